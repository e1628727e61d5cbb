use dateonly::{tz::TimezoneShift, DateOnly};

fn canonical(year: i16, month: i8, day: i8) -> String {
    DateOnly::new_in(year, month, day, TimezoneShift::UTC)
        .unwrap()
        .to_string()
}

#[test]
fn to_string() {
    assert_eq!(canonical(2001, 2, 3), "2001-02-03");
    assert_eq!(canonical(2020, 12, 31), "2020-12-31");
    assert_eq!(canonical(999, 1, 1), "0999-01-01");
    assert_eq!(canonical(1, 1, 1), "0001-01-01");
    assert_eq!(canonical(-1, 1, 1), "-0001-01-01");
    assert_eq!(canonical(-1001, 2, 3), "-1001-02-03");
}

#[test]
fn independent_of_shift() -> crate::Result {
    for shift in crate::shifts() {
        let date = crate::builder(shift).build(2001, 2, 3)?;
        assert_eq!(date.to_string(), "2001-02-03", "{shift}");
        assert_eq!(format!("{date:?}"), "2001-02-03", "{shift}");
    }
    Ok(())
}

#[test]
fn parses_back() -> crate::Result {
    for shift in crate::shifts() {
        let b = crate::builder(shift);
        for (year, month, day) in [(2001, 2, 3), (-1001, 2, 3), (9999, 12, 31)]
        {
            let date = b.build(year, month, day)?;
            assert_eq!(b.parse(date.to_string())?, date);
        }
    }
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn json_is_canonical_string() -> crate::Result {
    let date = DateOnly::new_in(2001, 2, 3, TimezoneShift::UTC)?;
    let json = serde_json::to_string(&date).unwrap();
    assert_eq!(json, format!("\"{date}\""));
    assert_eq!(json, r#""2001-02-03""#);
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn json_timezone_shift() {
    let shift: TimezoneShift = serde_json::from_str(r#""min-max""#).unwrap();
    assert_eq!(shift, TimezoneShift::MinMax);
    let shift: TimezoneShift = serde_json::from_str("3.5").unwrap();
    assert_eq!(shift, TimezoneShift::hours(3.5).unwrap());
    let shift: TimezoneShift = serde_json::from_str("-12").unwrap();
    assert_eq!(serde_json::to_string(&shift).unwrap(), r#""-12""#);
    assert!(serde_json::from_str::<TimezoneShift>("14.1").is_err());
}
