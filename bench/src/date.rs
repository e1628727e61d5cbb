use std::hint::black_box as bb;

use criterion::Criterion;

use dateonly::{
    tz::{Offset, TimezoneShift},
    DateOnlyBuilder,
};

use crate::benchmark;

pub(super) fn define(c: &mut Criterion) {
    new(c);
    new_system_local(c);
    is_valid(c);
}

/// Measures the time to validate a date and place it on the timeline.
fn new(c: &mut Criterion) {
    const NAME: &str = "date/new";

    fn benchmark_with(c: &mut Criterion, label: &str, shift: TimezoneShift) {
        let builder =
            DateOnlyBuilder::new().local_offset(Offset::UTC).shift(shift);
        benchmark(c, format!("{NAME}/{label}/dateonly"), |b| {
            b.iter(|| {
                let got = builder.build(bb(2001), bb(2), bb(3)).unwrap();
                assert_eq!(got.year(), 2001);
            })
        });
    }

    benchmark_with(c, "local", TimezoneShift::Local);
    benchmark_with(c, "fixed", TimezoneShift::hours(4.0).unwrap());
    benchmark_with(c, "min-max", TimezoneShift::MinMax);

    benchmark(c, format!("{NAME}/chrono"), |b| {
        b.iter(|| {
            let got = chrono::NaiveDate::from_ymd_opt(bb(2001), bb(2), bb(3))
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
                .and_utc()
                .timestamp_millis();
            assert_eq!(got, 981_158_400_000);
        })
    });
}

/// Measures the cost of asking the operating system for the local UTC
/// offset on every construction.
fn new_system_local(c: &mut Criterion) {
    const NAME: &str = "date/new_system_local";

    benchmark(c, format!("{NAME}/dateonly"), |b| {
        b.iter(|| {
            let got = dateonly::DateOnly::new(bb(2001), bb(2), bb(3)).unwrap();
            assert_eq!(got.year(), 2001);
        })
    });
}

/// Measures the time to check whether a date exists.
fn is_valid(c: &mut Criterion) {
    const NAME: &str = "date/is_valid";

    benchmark(c, format!("{NAME}/dateonly"), |b| {
        b.iter(|| {
            assert!(!dateonly::DateOnly::is_valid(bb(2019), bb(2), bb(29)));
        })
    });

    benchmark(c, format!("{NAME}/chrono"), |b| {
        b.iter(|| {
            let got = chrono::NaiveDate::from_ymd_opt(bb(2019), bb(2), bb(29));
            assert!(got.is_none());
        })
    });
}
