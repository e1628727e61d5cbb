use dateonly::{
    tz::{Offset, TimezoneShift},
    DateOnly, DateOnlyBuilder, Error,
};

use crate::{Case, D20010203};

#[test]
fn out_of_range_hours() {
    for hours in [14.1, -12.1, 24.0, -24.0, f64::NAN, f64::INFINITY] {
        let err = TimezoneShift::hours(hours).unwrap_err();
        assert!(err.is_invalid_timezone(), "{hours}");
        assert!(!err.is_invalid_date(), "{hours}");
    }
}

#[test]
fn boundaries_are_inclusive() {
    assert_eq!(
        TimezoneShift::hours(14.0).unwrap(),
        TimezoneShift::Fixed(Offset::MAX),
    );
    assert_eq!(
        TimezoneShift::hours(-12.0).unwrap(),
        TimezoneShift::Fixed(Offset::MIN),
    );
}

#[test]
fn unrecognized_strings() {
    for input in ["a", "", "LOCAL", "minmax", "14.1", "-12.1", "+14:30", "inf"] {
        let err = input.parse::<TimezoneShift>().unwrap_err();
        assert!(err.is_invalid_timezone(), "{input:?}");
    }
    insta::assert_snapshot!(
        "a".parse::<TimezoneShift>().unwrap_err(),
        @"unrecognized timezone shift `a` (expected `local`, `min-max` or a UTC offset such as `+3.5` or `-05:00`)",
    );
    insta::assert_snapshot!(
        "+14.1".parse::<TimezoneShift>().unwrap_err(),
        @"timezone shift of 14.1 hours is not in the supported range of -12..=14 hours",
    );
}

/// A broken local offset is a configuration problem, so even the lenient
/// constructors report it.
#[test]
fn local_failure_surfaces_from_lenient_constructors() {
    let broken = || -> Result<Offset, Error> {
        Err(Error::from_args(format_args!("no clock")))
    };
    let b = DateOnlyBuilder::new().local_offset(broken);
    let Case { year: y, month: m, day: d, .. } = D20010203;

    let err = b.try_build(y, m, d).unwrap_err();
    assert!(err.is_invalid_timezone());
    assert!(!err.is_invalid_date());
    let err = b.try_parse("2001-2-3").unwrap_err();
    assert!(err.is_invalid_timezone());
    assert!(!err.is_parse());
    assert!(b.build(y, m, d).unwrap_err().is_invalid_timezone());
    assert!(b.parse("2001-2-3").unwrap_err().is_invalid_timezone());

    // Other shifts never consult the local offset.
    let b = b.shift(TimezoneShift::MinMax);
    assert!(b.try_build(y, m, d).unwrap().is_some());
}

#[test]
fn local_out_of_window_is_rejected() {
    let far_east = || Offset::from_seconds(15 * 60 * 60);
    let b = DateOnlyBuilder::new().local_offset(far_east);
    let err = b.build(2001, 2, 3).unwrap_err();
    assert!(err.is_invalid_timezone());
    insta::assert_snapshot!(
        err,
        @"failed to determine the local UTC offset: UTC offset of 54000 seconds is not in the supported range of -12:00..=+14:00",
    );
}

#[cfg(not(feature = "tz-system"))]
#[test]
fn system_offset_needs_crate_feature() {
    let err = DateOnly::new(2001, 2, 3).unwrap_err();
    assert!(err.is_crate_feature());
    assert!(err.is_invalid_timezone());
    insta::assert_snapshot!(
        err,
        @"failed to determine the local UTC offset: this requires the `tz-system` crate feature to be enabled",
    );
    // Fixed shifts work without it.
    assert!(DateOnly::new_in(2001, 2, 3, TimezoneShift::UTC).is_ok());
}

#[cfg(feature = "tz-system")]
#[test]
fn system_offset_is_in_window() {
    assert!(DateOnly::new(2001, 2, 3).is_ok());
}
