use alloc::boxed::Box;

use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    ExpectedDay { found: Option<u8> },
    ExpectedMonth { found: Option<u8> },
    ExpectedSeparator { after: &'static str, found: Option<u8> },
    ExpectedYear { found: Option<u8> },
    Input { input: Box<str> },
    TooManyDigits { what: &'static str, max: u8 },
    TrailingInput { found: u8 },
}

impl Error {
    /// Creates the top-level context for a failure to parse `input`.
    #[cold]
    #[inline(never)]
    pub(crate) fn input(input: &[u8]) -> Error {
        let input = alloc::string::String::from_utf8_lossy(input);
        Error::Input { input: input.into() }
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Fmt(err).into()
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
            ExpectedDay { found } => write!(
                f,
                "expected one or two digits for the day, but found {found}",
                found = Found(found),
            ),
            ExpectedMonth { found } => write!(
                f,
                "expected one or two digits for the month, but found {found}",
                found = Found(found),
            ),
            ExpectedSeparator { after, found } => write!(
                f,
                "expected `-` after the {after}, but found {found}",
                found = Found(found),
            ),
            ExpectedYear { found } => write!(
                f,
                "expected one to four digits for the year \
                 (optionally preceded by `-`), but found {found}",
                found = Found(found),
            ),
            Input { ref input } => {
                write!(f, "failed to parse `{input}` as a date")
            }
            TooManyDigits { what, max } => {
                write!(f, "expected at most {max} digits for the {what}")
            }
            TrailingInput { found } => write!(
                f,
                "expected end of input after the day, but found {found}",
                found = Found(Some(found)),
            ),
        }
    }
}

/// Describes what the parser found where it expected something else.
struct Found(Option<u8>);

impl core::fmt::Display for Found {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.0 {
            None => f.write_str("end of input"),
            Some(byte) => {
                write!(f, "`{}`", core::ascii::escape_default(byte))
            }
        }
    }
}
