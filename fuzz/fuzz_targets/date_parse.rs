#![cfg_attr(fuzzing, no_main)]

use libfuzzer_sys::fuzz_target;

use dateonly::{tz::TimezoneShift, DateOnly};

mod shim;

fn do_fuzz(data: &[u8]) {
    for shift in [TimezoneShift::UTC, TimezoneShift::MinMax] {
        let lenient = DateOnly::try_parse(data, shift)
            .expect("fixed shifts never fail to resolve");
        let Ok(first) = DateOnly::parse_in(data, shift) else {
            assert_eq!(lenient, None, "lenient parse accepted a bad date");
            continue;
        };
        assert_eq!(Some(first), lenient);
        assert!(first.start_epoch() <= first.end_epoch());

        let printed = first.to_string();
        match DateOnly::parse_in(&printed, shift) {
            Ok(second) => assert_eq!(
                first, second,
                "expected the initially parsed value \
                 to be equal to the value after printing and re-parsing",
            ),
            Err(e) if cfg!(not(feature = "relaxed")) => panic!(
                "should be able to parse a printed value; \
                 failed with `{e}` at: `{printed}`, corresponding to {first:#?}",
            ),
            Err(_) => {}
        }
    }
}

fuzz_target!(|data: &[u8]| do_fuzz(data));

maybe_define_main!();
