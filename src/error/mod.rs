use alloc::{boxed::Box, sync::Arc};

pub(crate) mod civil;
pub(crate) mod fmt;
pub(crate) mod tz;

/// An error that can occur in this crate.
///
/// Errors fall into three broad categories, each of which can be detected
/// with a predicate:
///
/// * The year, month and day given do not form a valid date in the
/// proleptic Gregorian calendar. See [`Error::is_invalid_date`].
/// * A date string does not match the `YYYY-MM-DD` grammar accepted by this
/// crate. See [`Error::is_parse`].
/// * A timezone shift is not supported, or the local UTC offset could not be
/// determined. See [`Error::is_invalid_timezone`].
///
/// The lenient constructors in this crate (like
/// [`DateOnly::try_new`](crate::DateOnly::try_new)) absorb the first two
/// categories by returning `Ok(None)`. Timezone errors are always reported.
///
/// # Display
///
/// An error may have been caused by another error, which may in turn have
/// a cause of its own. The `Display` implementation prints every message in
/// this chain, outermost first, separated by `: `. The alternate `Debug`
/// format (`{:#?}`) shows the structure instead.
#[derive(Clone)]
pub struct Error {
    /// One word wide and cheap to clone.
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Creates an error with the given message, usually built with
    /// [`format_args!`](format_args).
    ///
    /// This exists for implementations of
    /// [`LocalOffset`](crate::tz::LocalOffset) that need to report a failure.
    /// None of the predicates on `Error` are true for such an error, but
    /// one returned from a `LocalOffset` is wrapped in a timezone error.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::Error;
    ///
    /// let err = Error::from_args(format_args!("something failed"));
    /// assert_eq!(err.to_string(), "something failed");
    /// ```
    pub fn from_args<'a>(message: core::fmt::Arguments<'a>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(message)))
    }

    /// Returns true when this error originated from a year, month and day
    /// that do not form a valid date.
    ///
    /// This is true even when the date was parsed from a string that was
    /// otherwise well formed.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::{tz::TimezoneShift, DateOnly};
    ///
    /// let utc = TimezoneShift::UTC;
    /// assert!(DateOnly::new_in(2019, 2, 29, utc).unwrap_err().is_invalid_date());
    /// assert!(DateOnly::parse_in("2019-2-29", utc).unwrap_err().is_invalid_date());
    /// assert!(!DateOnly::parse_in("2019-2-x", utc).unwrap_err().is_invalid_date());
    /// ```
    pub fn is_invalid_date(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::Civil(_))
    }

    /// Returns true when this error originated from a string that does not
    /// match the date grammar accepted by this crate.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::{tz::TimezoneShift, DateOnly};
    ///
    /// let utc = TimezoneShift::UTC;
    /// assert!(DateOnly::parse_in("2001-02-03T00:00", utc).unwrap_err().is_parse());
    /// assert!(!DateOnly::parse_in("2001-02-30", utc).unwrap_err().is_parse());
    /// ```
    pub fn is_parse(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::Fmt(_))
    }

    /// Returns true when this error is the result of an unsupported timezone
    /// shift, or of a failure to determine the local UTC offset.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::tz::TimezoneShift;
    ///
    /// assert!(TimezoneShift::hours(14.1).unwrap_err().is_invalid_timezone());
    /// assert!("utc+1".parse::<TimezoneShift>().unwrap_err().is_invalid_timezone());
    /// ```
    pub fn is_invalid_timezone(&self) -> bool {
        self.chain().any(|err| matches!(*err.kind(), ErrorKind::Tz(_)))
    }

    /// Returns true when this error originated as a result of an operation
    /// failing because an appropriate crate feature was not enabled.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use dateonly::tz::{LocalOffset, SystemOffset};
    ///
    /// // This passes when the `tz-system` crate feature is NOT enabled.
    /// assert!(SystemOffset.local_offset().unwrap_err().is_crate_feature());
    /// ```
    pub fn is_crate_feature(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::CrateFeature(_))
    }
}

impl Error {
    pub(crate) fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        // OK because the consequent was created just now by the caller, so
        // the `Arc` has exactly one reference. And an error chain is a
        // linked list, so a consequent with a cause already would drop it.
        let inner = Arc::get_mut(&mut err.inner)
            .expect("consequent error must not be shared");
        assert!(inner.cause.is_none(), "cause of consequence must be `None`");
        inner.cause = Some(self);
        err
    }

    /// Returns the innermost cause of this error.
    fn root(&self) -> &Error {
        let mut err = self;
        while let Some(ref cause) = err.inner.cause {
            err = cause;
        }
        err
    }

    /// Iterates from this error down to its root cause.
    ///
    /// This always yields at least `self`.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Civil(self::civil::Error),
    CrateFeature(CrateFeatureError),
    Fmt(self::fmt::Error),
    Tz(self::tz::Error),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use core::fmt::Display;

        use self::ErrorKind::*;

        match *self {
            Adhoc(ref msg) => msg.fmt(f),
            Civil(ref err) => err.fmt(f),
            CrateFeature(ref err) => err.fmt(f),
            Fmt(ref err) => err.fmt(f),
            Tz(ref err) => err.fmt(f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, cause: None }) }
    }
}

/// A message from outside this crate. See `Error::from_args`.
#[derive(Debug)]
struct AdhocError(Box<str>);

impl AdhocError {
    fn from_args(message: core::fmt::Arguments<'_>) -> AdhocError {
        AdhocError(alloc::format!("{message}").into_boxed_str())
    }
}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A Cargo feature that an operation needed but that wasn't enabled.
///
/// Only features whose absence can fail at run time are listed.
#[derive(Clone, Debug)]
pub(crate) enum CrateFeatureError {
    #[cfg(not(feature = "tz-system"))]
    TzSystem,
}

impl From<CrateFeatureError> for Error {
    #[cold]
    #[inline(never)]
    fn from(err: CrateFeatureError) -> Error {
        ErrorKind::CrateFeature(err).into()
    }
}

impl IntoError for CrateFeatureError {
    fn into_error(self) -> Error {
        self.into()
    }
}

impl core::fmt::Display for CrateFeatureError {
    // With every feature enabled, this enum is empty.
    #[allow(unreachable_code, unused_variables)]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let feature: &str = match *self {
            #[cfg(not(feature = "tz-system"))]
            CrateFeatureError::TzSystem => "tz-system",
        };
        write!(f, "this requires the `{feature}` crate feature to be enabled")
    }
}

/// Conversion into `Error` for the internal error enums, without exposing
/// public `From` impls for them.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// Wraps the error of a `Result` in a higher level error.
pub(crate) trait ErrorContext<T> {
    /// Makes `consequent` the error, with the original error as its cause.
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;

    /// Like `context`, but only builds `consequent` on failure. Use this
    /// when building it allocates.
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: IntoError,
{
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent.into_error())
        })
    }

    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent().into_error())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Not an API guarantee, but growing it should be deliberate.
    #[test]
    fn error_is_one_word() {
        assert_eq!(
            core::mem::size_of::<Error>(),
            core::mem::size_of::<usize>(),
        );
    }

    #[test]
    fn chain_display() {
        let root = Error::from(civil::Error::YearZero);
        let err = root.context(fmt::Error::Input { input: "0-1-1".into() });
        insta::assert_snapshot!(
            err,
            @"failed to parse `0-1-1` as a date: year `0` does not exist (the year before `1` is `-1`)",
        );
        assert!(err.is_invalid_date());
        assert!(!err.is_parse());
        assert!(!err.is_invalid_timezone());
    }

    #[test]
    fn timezone_anywhere_in_chain() {
        let root = Error::from_args(format_args!("clock unavailable"));
        let err = root.context(tz::Error::LocalOffset);
        insta::assert_snapshot!(
            err,
            @"failed to determine the local UTC offset: clock unavailable",
        );
        assert!(err.is_invalid_timezone());
        assert!(!err.is_invalid_date());
        assert!(!err.is_crate_feature());
    }

    #[test]
    fn adhoc() {
        let err = Error::from_args(format_args!("oops {}", 5));
        insta::assert_snapshot!(err, @"oops 5");
        insta::assert_snapshot!(alloc::format!("{err:?}"), @"oops 5");
    }
}
