/*!
Civil dates that know when they start and end.

This crate provides [`DateOnly`], a date in the proleptic Gregorian calendar
that is always valid and that carries the inclusive range of milliseconds
since the Unix epoch during which it is considered to hold. The range is
decided by a [`TimezoneShift`]: the host's local UTC offset, a fixed offset,
or the "min-max" shift that widens the range by the offset extremes
`-12:00` and `+14:00`.

A typical use is to answer "is it currently this date?" for dates that come
from configuration or user input, where a date without a time zone is all
that's available.

# Example

```
use dateonly::{tz::TimezoneShift, DateOnly};

let date: DateOnly = DateOnly::parse_in("2001-2-3", TimezoneShift::UTC)?;
assert_eq!(date.to_string(), "2001-02-03");
assert_eq!(date.start_epoch(), 981_158_400_000);
assert_eq!(date.end_epoch(), 981_244_799_999);

// Invalid dates are rejected by the strict constructors...
assert!(DateOnly::new_in(2019, 2, 29, TimezoneShift::UTC).is_err());
// ...and absorbed by the lenient ones.
assert_eq!(DateOnly::try_new(2019, 2, 29, TimezoneShift::UTC)?, None);

// A date's range can be widened to 50 hours.
let wide = DateOnly::new_in(2001, 2, 3, TimezoneShift::MinMax)?;
assert_eq!(wide.end_epoch() - wide.start_epoch() + 1, 180_000_000);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **std** (enabled by default) - When enabled, [`Error`] implements
`std::error::Error`.
* **tz-system** (enabled by default) - When enabled, [`tz::SystemOffset`]
queries the host for its current UTC offset. When disabled, constructing a
date with [`TimezoneShift::Local`] fails unless a different
[`tz::LocalOffset`] is given to a [`DateOnlyBuilder`].
* **logging** - When enabled, the `log` crate is used to emit messages about
local offset discovery and rejected inputs.
* **serde** - When enabled, [`DateOnly`] and [`TimezoneShift`] implement
`Serialize` and `Deserialize`, and the helpers in [`fmt::serde`] become
available.
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Errors carry their messages on the heap, so `alloc` is always required.
extern crate alloc;

pub use crate::{
    civil::{DateOnly, DateOnlyBuilder},
    error::Error,
    tz::TimezoneShift,
};

#[macro_use]
mod logging;

pub mod civil;
mod error;
pub mod fmt;
pub mod tz;
mod util;

#[cfg(test)]
mod tests {
    use crate::tz::Offset;

    use super::*;

    #[test]
    fn topscratch() {
        let _ = env_logger::try_init();

        let builder = DateOnlyBuilder::new().local_offset(Offset::UTC);
        let got = builder.parse("2001-2-3").unwrap();
        let expected = builder.shift(TimezoneShift::UTC).build(2001, 2, 3);
        assert_eq!(got.epoch_range(), expected.unwrap().epoch_range());
    }
}
