use crate::{error::Error, tz::Offset};

/// A source of the host's current UTC offset.
///
/// This is consulted whenever a [`DateOnly`](crate::DateOnly) is
/// constructed with [`TimezoneShift::Local`](crate::tz::TimezoneShift::Local).
/// By default, [`SystemOffset`] is used, but a different source can be
/// injected via [`DateOnlyBuilder::local_offset`]. This is mostly useful
/// in tests, where depending on the host's offset would make results vary
/// from machine to machine.
///
/// This trait is implemented for [`Offset`] (which always returns itself)
/// and for any closure `Fn() -> Result<Offset, Error>`.
///
/// # Example
///
/// ```
/// use dateonly::{tz::Offset, DateOnly};
///
/// // Midnight at `-05:00` is 5 hours after midnight in UTC.
/// let date = DateOnly::builder()
///     .local_offset(Offset::constant(-5))
///     .build(2001, 2, 3)?;
/// assert_eq!(date.start_epoch(), 981_158_400_000 + 18_000_000);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// [`DateOnlyBuilder::local_offset`]: crate::DateOnlyBuilder::local_offset
pub trait LocalOffset {
    /// Returns the current UTC offset, where a positive offset means local
    /// time is ahead of UTC.
    ///
    /// A date built with [`TimezoneShift::Local`](crate::TimezoneShift::Local)
    /// starts at local midnight, which is this offset *before* UTC midnight.
    fn local_offset(&self) -> Result<Offset, Error>;
}

impl LocalOffset for Offset {
    #[inline]
    fn local_offset(&self) -> Result<Offset, Error> {
        Ok(*self)
    }
}

impl<F> LocalOffset for F
where
    F: Fn() -> Result<Offset, Error>,
{
    #[inline]
    fn local_offset(&self) -> Result<Offset, Error> {
        (self)()
    }
}

/// The host's UTC offset, as reported by the operating system right now.
///
/// When the `tz-system` crate feature is enabled (it is by default), this
/// asks `chrono` for the offset of the current instant in the system time
/// zone. This respects the `TZ` environment variable on Unix.
///
/// When `tz-system` is disabled, every query returns an error for which
/// [`Error::is_crate_feature`] is true.
///
/// The offset is never cached. Each query reflects the host's configuration
/// at that moment.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemOffset;

impl LocalOffset for SystemOffset {
    #[cfg(feature = "tz-system")]
    fn local_offset(&self) -> Result<Offset, Error> {
        let seconds = chrono::Local::now().offset().local_minus_utc();
        match Offset::from_seconds(seconds) {
            Ok(offset) => {
                trace!("found system UTC offset {offset}");
                Ok(offset)
            }
            Err(err) => {
                warn!(
                    "system UTC offset of {seconds} seconds is outside \
                     the supported range: {err}",
                );
                Err(err)
            }
        }
    }

    #[cfg(not(feature = "tz-system"))]
    fn local_offset(&self) -> Result<Offset, Error> {
        use crate::error::CrateFeatureError;

        debug!(
            "cannot determine the system UTC offset because the \
             `tz-system` crate feature is disabled",
        );
        Err(Error::from(CrateFeatureError::TzSystem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed() {
        let offset = Offset::constant_seconds(-34_200);
        assert_eq!(offset.local_offset().unwrap(), offset);
    }

    #[test]
    fn closure() {
        let ok = || -> Result<Offset, Error> { Ok(Offset::constant(9)) };
        assert_eq!(ok.local_offset().unwrap().seconds(), 32_400);

        let broken = || -> Result<Offset, Error> {
            Err(Error::from_args(format_args!("x")))
        };
        assert!(broken.local_offset().is_err());
    }

    #[cfg(feature = "tz-system")]
    #[test]
    fn system_in_range() {
        let offset = SystemOffset.local_offset().unwrap();
        assert!(Offset::MIN <= offset && offset <= Offset::MAX);
    }

    #[cfg(not(feature = "tz-system"))]
    #[test]
    fn system_disabled() {
        let err = SystemOffset.local_offset().unwrap_err();
        assert!(err.is_crate_feature());
        insta::assert_snapshot!(
            err,
            @"this requires the `tz-system` crate feature to be enabled",
        );
    }
}
