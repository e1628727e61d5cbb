use std::hint::black_box as bb;

use criterion::Criterion;

use dateonly::{
    tz::{Offset, TimezoneShift},
    DateOnlyBuilder,
};

use crate::benchmark;

pub(super) fn define(c: &mut Criterion) {
    parse_date(c);
}

/// Measures the time it takes to parse a date and place it on the timeline.
fn parse_date(c: &mut Criterion) {
    const NAME: &str = "parse/date";

    let builder = DateOnlyBuilder::new()
        .local_offset(Offset::UTC)
        .shift(TimezoneShift::UTC);
    for (label, string) in [("padded", "2001-02-03"), ("short", "2001-2-3")] {
        benchmark(c, format!("{NAME}/{label}/dateonly"), |b| {
            b.iter(|| {
                let got = builder.parse(bb(string)).unwrap();
                assert_eq!(got.start_epoch(), 981_158_400_000);
            })
        });
    }

    let expected = chrono::NaiveDate::from_ymd_opt(2001, 2, 3).unwrap();
    benchmark(c, format!("{NAME}/padded/chrono"), |b| {
        b.iter(|| {
            let got: chrono::NaiveDate = bb("2001-02-03").parse().unwrap();
            assert_eq!(got, expected);
        })
    });
}
