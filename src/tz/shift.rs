use crate::{
    error::{tz::Error as E, Error, ErrorContext},
    tz::{LocalOffset, Offset},
};

/// How a civil date is placed on the timeline.
///
/// A civil date like `2021-03-14` does not, on its own, correspond to any
/// particular span of absolute time. A `TimezoneShift` supplies the missing
/// piece by saying which UTC offset (or offsets) to interpret the date in.
///
/// # Variants
///
/// * [`TimezoneShift::Local`] uses the UTC offset of the host at the moment
/// a [`DateOnly`](crate::DateOnly) is constructed, and moves the UTC window
/// to the host's own midnights. So on a host at `+04:00`, both ends move
/// 4 hours *earlier*. Note that this is the opposite direction of
/// `TimezoneShift::Fixed(+04:00)`. This is the default, and it is the only
/// interpretation that depends on the environment. Two
/// constructions of the same date may disagree if the host's offset changes
/// in between (for example, across a DST transition or a change of the `TZ`
/// environment variable).
/// * [`TimezoneShift::MinMax`] widens the UTC window of the date by fixed
/// amounts: 12 hours earlier at the start and 14 hours later at the end,
/// the extremes of the offsets `-12:00` and `+14:00`. This window is 50
/// hours wide. It does not cover every instant at which the date is in
/// effect somewhere. For example, the first two hours of the date at
/// `+14:00` fall before its start.
/// * [`TimezoneShift::Fixed`] adds the given offset to both ends of the 24
/// hour UTC window of the date.
///
/// # Parsing and printing
///
/// This type implements `FromStr` and `Display`, which makes it convenient to
/// read from configuration:
///
/// ```
/// use dateonly::tz::{Offset, TimezoneShift};
///
/// assert_eq!("local".parse::<TimezoneShift>()?, TimezoneShift::Local);
/// assert_eq!("min-max".parse::<TimezoneShift>()?, TimezoneShift::MinMax);
/// assert_eq!("3.5".parse::<TimezoneShift>()?, TimezoneShift::hours(3.5)?);
/// assert_eq!(
///     "-05:00".parse::<TimezoneShift>()?,
///     TimezoneShift::Fixed(Offset::constant(-5)),
/// );
/// assert_eq!(TimezoneShift::hours(5.75)?.to_string(), "+05:45");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum TimezoneShift {
    /// Interpret dates in the host's UTC offset, as of construction time.
    #[default]
    Local,
    /// Interpret dates so that their window covers every UTC offset from
    /// `-12:00` to `+14:00`.
    MinMax,
    /// Interpret dates in the given fixed UTC offset.
    Fixed(Offset),
}

impl TimezoneShift {
    /// An alias for [`TimezoneShift::Local`].
    pub const LOCAL: TimezoneShift = TimezoneShift::Local;

    /// An alias for [`TimezoneShift::MinMax`].
    pub const MIN_MAX: TimezoneShift = TimezoneShift::MinMax;

    /// Interprets dates in UTC.
    pub const UTC: TimezoneShift = TimezoneShift::Fixed(Offset::UTC);

    /// Creates a fixed shift from a possibly fractional number of hours.
    ///
    /// Half-hour and quarter-hour offsets such as `3.5` or `5.75` are
    /// supported.
    ///
    /// # Errors
    ///
    /// This returns an error when `hours` is not finite, is not in the range
    /// `-12.0..=14.0`, or doesn't correspond to a whole number of seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::tz::{Offset, TimezoneShift};
    ///
    /// let shift = TimezoneShift::hours(-12.0)?;
    /// assert_eq!(shift, TimezoneShift::Fixed(Offset::MIN));
    ///
    /// assert!(TimezoneShift::hours(14.1).is_err());
    /// assert!(TimezoneShift::hours(-12.1).is_err());
    /// assert!(TimezoneShift::hours(f64::NAN).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn hours(hours: f64) -> Result<TimezoneShift, Error> {
        Offset::from_fractional_hours(hours).map(TimezoneShift::Fixed)
    }

    /// Returns true if this is [`TimezoneShift::Local`].
    #[inline]
    pub fn is_local(self) -> bool {
        matches!(self, TimezoneShift::Local)
    }

    /// Returns true if this is [`TimezoneShift::MinMax`].
    #[inline]
    pub fn is_min_max(self) -> bool {
        matches!(self, TimezoneShift::MinMax)
    }

    /// Returns the fixed offset of this shift, if it has one.
    #[inline]
    pub fn offset(self) -> Option<Offset> {
        match self {
            TimezoneShift::Fixed(offset) => Some(offset),
            _ => None,
        }
    }

    /// Resolves this shift to the pair of millisecond offsets applied to
    /// the start and the end of a civil day in UTC.
    ///
    /// `local` is consulted only for `TimezoneShift::Local`. Its offset is
    /// negated, so that the window starts at the host's local midnight.
    pub(crate) fn resolve<L: LocalOffset + ?Sized>(
        self,
        local: &L,
    ) -> Result<EpochShift, Error> {
        let shift = match self {
            TimezoneShift::Local => {
                let offset = local.local_offset().context(E::LocalOffset)?;
                EpochShift::symmetric_ms(-offset.milliseconds())
            }
            TimezoneShift::MinMax => EpochShift::MIN_MAX,
            TimezoneShift::Fixed(offset) => EpochShift::symmetric(offset),
        };
        Ok(shift)
    }
}

impl From<Offset> for TimezoneShift {
    fn from(offset: Offset) -> TimezoneShift {
        TimezoneShift::Fixed(offset)
    }
}

impl core::fmt::Display for TimezoneShift {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            TimezoneShift::Local => f.write_str("local"),
            TimezoneShift::MinMax => f.write_str("min-max"),
            TimezoneShift::Fixed(ref offset) => {
                core::fmt::Display::fmt(offset, f)
            }
        }
    }
}

impl core::str::FromStr for TimezoneShift {
    type Err = Error;

    fn from_str(s: &str) -> Result<TimezoneShift, Error> {
        match s {
            "local" => return Ok(TimezoneShift::Local),
            "min-max" => return Ok(TimezoneShift::MinMax),
            _ => {}
        }
        if s.contains(':') {
            return s.parse::<Offset>().map(TimezoneShift::Fixed);
        }
        // Rust's float grammar also admits things like `inf` and `1e1`.
        // Insisting on a leading digit or sign keeps this to plain decimals.
        let plain = s
            .trim_start_matches(['+', '-'])
            .bytes()
            .all(|b| b.is_ascii_digit() || b == b'.');
        let hours = match s.parse::<f64>() {
            Ok(hours) if plain => hours,
            _ => return Err(Error::from(E::Unrecognized { input: s.into() })),
        };
        TimezoneShift::hours(hours)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimezoneShift {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimezoneShift {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<TimezoneShift, D::Error> {
        use serde::de;

        struct TimezoneShiftVisitor;

        impl<'de> de::Visitor<'de> for TimezoneShiftVisitor {
            type Value = TimezoneShift;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str(
                    "a timezone shift string (`local`, `min-max` or a \
                     UTC offset) or a number of hours",
                )
            }

            #[inline]
            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<TimezoneShift, E> {
                value.parse().map_err(de::Error::custom)
            }

            #[inline]
            fn visit_f64<E: de::Error>(
                self,
                value: f64,
            ) -> Result<TimezoneShift, E> {
                TimezoneShift::hours(value).map_err(de::Error::custom)
            }

            #[inline]
            fn visit_i64<E: de::Error>(
                self,
                value: i64,
            ) -> Result<TimezoneShift, E> {
                // OK because any i64 outside the offset range is rejected
                // by `hours` no matter how it rounds.
                self.visit_f64(value as f64)
            }

            #[inline]
            fn visit_u64<E: de::Error>(
                self,
                value: u64,
            ) -> Result<TimezoneShift, E> {
                self.visit_f64(value as f64)
            }
        }

        deserializer.deserialize_any(TimezoneShiftVisitor)
    }
}

/// The millisecond offsets applied to the UTC start and the UTC end of a
/// civil day.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct EpochShift {
    pub(crate) start: i64,
    pub(crate) end: i64,
}

impl EpochShift {
    /// The shift for `TimezoneShift::MinMax`.
    ///
    /// The start moves back by 12 hours and the end forward by 14 hours,
    /// which is `-43_200_000` and `50_400_000` milliseconds respectively.
    pub(crate) const MIN_MAX: EpochShift = EpochShift {
        start: Offset::MIN.milliseconds(),
        end: Offset::MAX.milliseconds(),
    };

    fn symmetric(offset: Offset) -> EpochShift {
        EpochShift::symmetric_ms(offset.milliseconds())
    }

    fn symmetric_ms(millis: i64) -> EpochShift {
        EpochShift { start: millis, end: millis }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for TimezoneShift {
    fn arbitrary(g: &mut quickcheck::Gen) -> TimezoneShift {
        // `Local` is left out since it depends on the host.
        if <bool as quickcheck::Arbitrary>::arbitrary(g) {
            TimezoneShift::MinMax
        } else {
            TimezoneShift::Fixed(<Offset as quickcheck::Arbitrary>::arbitrary(
                g,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn resolve_fixed() {
        let local = Offset::UTC;
        let r = |hours: f64| {
            TimezoneShift::hours(hours).unwrap().resolve(&local).unwrap()
        };

        assert_eq!(r(0.0), EpochShift { start: 0, end: 0 });
        assert_eq!(
            r(3.5),
            EpochShift { start: 12_600_000, end: 12_600_000 },
        );
        assert_eq!(
            r(14.0),
            EpochShift { start: 50_400_000, end: 50_400_000 },
        );
        assert_eq!(
            r(-12.0),
            EpochShift { start: -43_200_000, end: -43_200_000 },
        );
    }

    #[test]
    fn resolve_min_max() {
        let got = TimezoneShift::MinMax.resolve(&Offset::UTC).unwrap();
        assert_eq!(got, EpochShift { start: -43_200_000, end: 50_400_000 });
        // The local offset is never consulted.
        let broken =
            || -> Result<Offset, Error> { panic!("should not be called") };
        assert!(TimezoneShift::MinMax.resolve(&broken).is_ok());
    }

    #[test]
    fn resolve_local() {
        // A host behind UTC sees its midnight later than UTC's.
        let local = Offset::constant_seconds(-34_200);
        let got = TimezoneShift::Local.resolve(&local).unwrap();
        assert_eq!(got, EpochShift { start: 34_200_000, end: 34_200_000 });

        // And the reverse for a host ahead of UTC, which is the opposite of
        // the fixed shift with the same offset.
        let local = Offset::constant(4);
        let got = TimezoneShift::Local.resolve(&local).unwrap();
        assert_eq!(got, EpochShift { start: -14_400_000, end: -14_400_000 });
        let fixed = TimezoneShift::Fixed(local).resolve(&local).unwrap();
        assert_eq!(fixed, EpochShift { start: 14_400_000, end: 14_400_000 });

        let broken = || -> Result<Offset, Error> {
            Err(Error::from_args(format_args!("no clock")))
        };
        let err = TimezoneShift::Local.resolve(&broken).unwrap_err();
        assert!(err.is_invalid_timezone());
        insta::assert_snapshot!(
            err,
            @"failed to determine the local UTC offset: no clock",
        );
    }

    #[test]
    fn parse() {
        let p = |s: &str| s.parse::<TimezoneShift>();

        assert_eq!(p("local").unwrap(), TimezoneShift::Local);
        assert_eq!(p("min-max").unwrap(), TimezoneShift::MinMax);
        assert_eq!(p("0").unwrap(), TimezoneShift::UTC);
        assert_eq!(p("+14").unwrap(), TimezoneShift::Fixed(Offset::MAX));
        assert_eq!(p("-12").unwrap(), TimezoneShift::Fixed(Offset::MIN));
        assert_eq!(
            p("3.5").unwrap(),
            TimezoneShift::Fixed(Offset::constant_seconds(12_600)),
        );
        assert_eq!(
            p("+05:45").unwrap(),
            TimezoneShift::Fixed(Offset::constant_seconds(20_700)),
        );

        insta::assert_snapshot!(
            p("14.1").unwrap_err(),
            @"timezone shift of 14.1 hours is not in the supported range of -12..=14 hours",
        );
        insta::assert_snapshot!(
            p("a").unwrap_err(),
            @"unrecognized timezone shift `a` (expected `local`, `min-max` or a UTC offset such as `+3.5` or `-05:00`)",
        );
        assert!(p("inf").unwrap_err().is_invalid_timezone());
        assert!(p("NaN").unwrap_err().is_invalid_timezone());
        assert!(p("1e1").unwrap_err().is_invalid_timezone());
        assert!(p("Local").unwrap_err().is_invalid_timezone());
        assert!(p("").unwrap_err().is_invalid_timezone());
    }

    #[test]
    fn display() {
        assert_eq!(TimezoneShift::Local.to_string(), "local");
        assert_eq!(TimezoneShift::MinMax.to_string(), "min-max");
        assert_eq!(TimezoneShift::UTC.to_string(), "+00");
        assert_eq!(TimezoneShift::hours(-9.5).unwrap().to_string(), "-09:30");
    }

    #[test]
    fn default_is_local() {
        assert_eq!(TimezoneShift::default(), TimezoneShift::Local);
    }

    quickcheck::quickcheck! {
        fn prop_display_parse_roundtrip(shift: TimezoneShift) -> bool {
            shift.to_string().parse::<TimezoneShift>().unwrap() == shift
        }
    }
}
