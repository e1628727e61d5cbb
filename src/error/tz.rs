use alloc::boxed::Box;

use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    HoursFraction { hours: f64 },
    HoursNotFinite,
    HoursRange { hours: f64 },
    LocalOffset,
    SecondsRange { seconds: i32 },
    Unrecognized { input: Box<str> },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Tz(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            HoursFraction { hours } => write!(
                f,
                "timezone shift of {hours} hours is not a whole number \
                 of seconds",
            ),
            HoursNotFinite => {
                f.write_str("timezone shift must be a finite number of hours")
            }
            HoursRange { hours } => write!(
                f,
                "timezone shift of {hours} hours is not in the supported \
                 range of -12..=14 hours",
            ),
            LocalOffset => {
                f.write_str("failed to determine the local UTC offset")
            }
            SecondsRange { seconds } => write!(
                f,
                "UTC offset of {seconds} seconds is not in the supported \
                 range of -12:00..=+14:00",
            ),
            Unrecognized { ref input } => write!(
                f,
                "unrecognized timezone shift `{input}` (expected `local`, \
                 `min-max` or a UTC offset such as `+3.5` or `-05:00`)",
            ),
        }
    }
}
