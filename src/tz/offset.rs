use crate::error::{tz::Error as E, Error};

/// Represents a fixed UTC offset supported by this crate.
///
/// Negative offsets correspond to time zones west of the prime meridian, while
/// positive offsets correspond to time zones east of the prime meridian.
///
/// Offsets are limited to the range of UTC offsets in actual use on Earth:
/// `-12:00` (Baker Island) through `+14:00` (Line Islands), inclusive.
///
/// # Display format
///
/// This type implements the `std::fmt::Display` trait. It
/// will convert the offset to a string format in the form
/// `{sign}{hours}[:{minutes}[:{seconds}]]`, where `minutes` and `seconds` are
/// only present when non-zero. For example:
///
/// ```
/// use dateonly::tz::Offset;
///
/// let o = Offset::constant(-5);
/// assert_eq!(o.to_string(), "-05");
/// let o = Offset::constant_seconds(12_600);
/// assert_eq!(o.to_string(), "+03:30");
/// let o = Offset::constant_seconds(-18_062);
/// assert_eq!(o.to_string(), "-05:01:02");
/// // No offset.
/// let o = Offset::UTC;
/// assert_eq!(o.to_string(), "+00");
/// ```
///
/// The same format is accepted by its `FromStr` implementation.
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Offset {
    second: i32,
}

impl Offset {
    /// The westernmost supported offset, `-12:00`.
    pub const MIN: Offset = Offset { second: -12 * 60 * 60 };

    /// The easternmost supported offset, `+14:00`.
    pub const MAX: Offset = Offset { second: 14 * 60 * 60 };

    /// The offset corresponding to UTC. That is, no offset at all.
    pub const UTC: Offset = Offset { second: 0 };

    /// Creates a new offset in a `const` context from a given number of
    /// hours.
    ///
    /// # Panics
    ///
    /// This routine panics when the given number of hours is not in the
    /// range `-12..=14`.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::tz::Offset;
    ///
    /// assert_eq!(Offset::constant(-12).seconds(), -43_200);
    /// assert_eq!(Offset::constant(14).seconds(), 50_400);
    /// ```
    #[inline]
    pub const fn constant(hours: i8) -> Offset {
        if hours < -12 || hours > 14 {
            panic!("invalid UTC offset hours")
        }
        Offset::constant_seconds((hours as i32) * 60 * 60)
    }

    /// Creates a new offset in a `const` context from a given number of
    /// seconds.
    ///
    /// # Panics
    ///
    /// This routine panics when the given number of seconds is not in the
    /// range `-43_200..=50_400`.
    #[inline]
    pub const fn constant_seconds(seconds: i32) -> Offset {
        if seconds < Offset::MIN.second || seconds > Offset::MAX.second {
            panic!("invalid UTC offset seconds")
        }
        Offset { second: seconds }
    }

    /// Creates a new offset from a given number of whole hours.
    ///
    /// # Errors
    ///
    /// This returns an error when the given number of hours is not in the
    /// range `-12..=14`.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::tz::Offset;
    ///
    /// assert_eq!(Offset::from_hours(-12)?.seconds(), -43_200);
    /// assert!(Offset::from_hours(15).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn from_hours(hours: i8) -> Result<Offset, Error> {
        Offset::from_seconds(i32::from(hours) * 60 * 60)
    }

    /// Creates a new offset from a given number of seconds.
    ///
    /// # Errors
    ///
    /// This returns an error when the given number of seconds is not in the
    /// range `-43_200..=50_400`.
    #[inline]
    pub fn from_seconds(seconds: i32) -> Result<Offset, Error> {
        if !(Offset::MIN.second..=Offset::MAX.second).contains(&seconds) {
            return Err(Error::from(E::SecondsRange { seconds }));
        }
        Ok(Offset { second: seconds })
    }

    /// Creates a new offset from a possibly fractional number of hours.
    ///
    /// This is what backs [`TimezoneShift::hours`](crate::tz::TimezoneShift::hours).
    pub(crate) fn from_fractional_hours(hours: f64) -> Result<Offset, Error> {
        if !hours.is_finite() {
            return Err(Error::from(E::HoursNotFinite));
        }
        if !(-12.0..=14.0).contains(&hours) {
            return Err(Error::from(E::HoursRange { hours }));
        }
        let seconds = hours * 3600.0;
        // OK because the range check above bounds this to +/- 50_400.
        let whole = seconds as i32;
        if f64::from(whole) != seconds {
            return Err(Error::from(E::HoursFraction { hours }));
        }
        Offset::from_seconds(whole)
    }

    /// Returns the total number of seconds in this offset.
    ///
    /// The value returned is guaranteed to be in the range
    /// `-43_200..=50_400`.
    #[inline]
    pub const fn seconds(self) -> i32 {
        self.second
    }

    /// Returns the total number of milliseconds in this offset.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::tz::Offset;
    ///
    /// assert_eq!(Offset::constant(1).milliseconds(), 3_600_000);
    /// ```
    #[inline]
    pub const fn milliseconds(self) -> i64 {
        self.second as i64 * 1_000
    }

    /// Returns true if and only if this offset is less than zero.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.second < 0
    }

    /// Returns this offset as a number of hours, possibly fractional.
    #[inline]
    pub fn to_hours(self) -> f64 {
        f64::from(self.second) / 3600.0
    }
}

impl core::fmt::Debug for Offset {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Offset({self})")
    }
}

impl core::fmt::Display for Offset {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let sign = if self.second < 0 { "-" } else { "+" };
        let total = self.second.unsigned_abs();
        let hours = total / 3600;
        let minutes = (total / 60) % 60;
        let seconds = total % 60;
        if minutes == 0 && seconds == 0 {
            write!(f, "{sign}{hours:02}")
        } else if seconds == 0 {
            write!(f, "{sign}{hours:02}:{minutes:02}")
        } else {
            write!(f, "{sign}{hours:02}:{minutes:02}:{seconds:02}")
        }
    }
}

impl core::str::FromStr for Offset {
    type Err = Error;

    /// Parses an offset in the form `{sign}HH[:MM[:SS]]`.
    fn from_str(s: &str) -> Result<Offset, Error> {
        parse_offset(s.as_bytes())
            .ok_or_else(|| Error::from(E::Unrecognized { input: s.into() }))
            .and_then(Offset::from_seconds)
    }
}

/// Parses `{sign}HH[:MM[:SS]]` into a signed number of seconds.
///
/// This returns `None` when the input doesn't match. Range checking of the
/// total is left to the caller.
fn parse_offset(input: &[u8]) -> Option<i32> {
    fn two_digits(input: &[u8]) -> Option<(i32, &[u8])> {
        match *input {
            [a @ b'0'..=b'9', b @ b'0'..=b'9', ref rest @ ..] => {
                Some((i32::from(a - b'0') * 10 + i32::from(b - b'0'), rest))
            }
            _ => None,
        }
    }

    let (sign, input) = match input.split_first()? {
        (b'+', rest) => (1, rest),
        (b'-', rest) => (-1, rest),
        _ => return None,
    };
    let (hours, mut input) = two_digits(input)?;
    let (mut minutes, mut seconds) = (0, 0);
    if let Some(rest) = input.strip_prefix(b":") {
        (minutes, input) = two_digits(rest)?;
        if let Some(rest) = input.strip_prefix(b":") {
            (seconds, input) = two_digits(rest)?;
        }
    }
    if !input.is_empty() || minutes > 59 || seconds > 59 {
        return None;
    }
    Some(sign * (hours * 3600 + minutes * 60 + seconds))
}

#[cfg(test)]
impl quickcheck::Arbitrary for Offset {
    fn arbitrary(g: &mut quickcheck::Gen) -> Offset {
        // Quarter hours cover every offset actually in use.
        let quarters =
            <i32 as quickcheck::Arbitrary>::arbitrary(g).rem_euclid(105) - 48;
        Offset { second: quarters * 15 * 60 }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(Offset::MIN.milliseconds(), -43_200_000);
        assert_eq!(Offset::MAX.milliseconds(), 50_400_000);
        assert!(Offset::from_seconds(-43_200).is_ok());
        assert!(Offset::from_seconds(50_400).is_ok());
        assert!(Offset::from_seconds(-43_201).is_err());
        assert!(Offset::from_seconds(50_401).is_err());
    }

    #[test]
    fn fractional_hours() {
        let f = Offset::from_fractional_hours;

        assert_eq!(f(3.5).unwrap().seconds(), 12_600);
        assert_eq!(f(5.75).unwrap().seconds(), 20_700);
        assert_eq!(f(-9.5).unwrap().seconds(), -34_200);
        assert_eq!(f(14.0).unwrap(), Offset::MAX);
        assert_eq!(f(-12.0).unwrap(), Offset::MIN);

        insta::assert_snapshot!(
            f(14.1).unwrap_err(),
            @"timezone shift of 14.1 hours is not in the supported range of -12..=14 hours",
        );
        insta::assert_snapshot!(
            f(-12.1).unwrap_err(),
            @"timezone shift of -12.1 hours is not in the supported range of -12..=14 hours",
        );
        insta::assert_snapshot!(
            f(f64::NAN).unwrap_err(),
            @"timezone shift must be a finite number of hours",
        );
        insta::assert_snapshot!(
            f(f64::INFINITY).unwrap_err(),
            @"timezone shift must be a finite number of hours",
        );
        insta::assert_snapshot!(
            f(0.0001).unwrap_err(),
            @"timezone shift of 0.0001 hours is not a whole number of seconds",
        );
    }

    #[test]
    fn display() {
        assert_eq!(Offset::UTC.to_string(), "+00");
        assert_eq!(Offset::MIN.to_string(), "-12");
        assert_eq!(Offset::MAX.to_string(), "+14");
        assert_eq!(Offset::constant_seconds(20_700).to_string(), "+05:45");
        assert_eq!(Offset::constant_seconds(-1).to_string(), "-00:00:01");
        assert_eq!(
            alloc::format!("{:?}", Offset::constant_seconds(-34_200)),
            "Offset(-09:30)",
        );
    }

    #[test]
    fn parse() {
        let p = |s: &str| s.parse::<Offset>();

        assert_eq!(p("+00").unwrap(), Offset::UTC);
        assert_eq!(p("-00").unwrap(), Offset::UTC);
        assert_eq!(p("+05:45").unwrap().seconds(), 20_700);
        assert_eq!(p("-05:01:02").unwrap().seconds(), -18_062);
        assert_eq!(p("+14").unwrap(), Offset::MAX);

        insta::assert_snapshot!(
            p("+14:01").unwrap_err(),
            @"UTC offset of 50460 seconds is not in the supported range of -12:00..=+14:00",
        );
        insta::assert_snapshot!(
            p("05:00").unwrap_err(),
            @"unrecognized timezone shift `05:00` (expected `local`, `min-max` or a UTC offset such as `+3.5` or `-05:00`)",
        );
        assert!(p("+5").is_err());
        assert!(p("+05:60").is_err());
        assert!(p("+05:00:").is_err());
        assert!(p("").is_err());
    }

    quickcheck::quickcheck! {
        fn prop_display_parse_roundtrip(offset: Offset) -> bool {
            offset.to_string().parse::<Offset>().unwrap() == offset
        }
    }
}
