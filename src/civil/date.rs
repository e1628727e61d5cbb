use crate::{
    civil::{calendar, DateOnlyBuilder},
    error::Error,
    fmt,
    tz::TimezoneShift,
};

/// A civil date in the proleptic Gregorian calendar, together with the span
/// of absolute time it covers.
///
/// A `DateOnly` is a triple of year, month and day. Every `DateOnly` value is
/// guaranteed to be a valid date. For example, `2019-02-29` and `2001-04-31`
/// cannot be represented. Years are in the range `-9999..=9999`, excluding
/// `0`, and are otherwise astronomical. That is, the year `-4` is a leap year.
///
/// Unlike a plain civil date, a `DateOnly` also knows when it starts and ends
/// on the timeline. This is what makes it possible to ask whether a given
/// instant falls on a particular date. How a date is placed on the timeline
/// is decided by its [`TimezoneShift`], which is chosen at construction time
/// and never changes afterwards.
///
/// # Epoch range
///
/// The range is given in milliseconds since the Unix epoch, and both ends are
/// inclusive:
///
/// * With [`TimezoneShift::Fixed`], both the UTC midnight starting the date
/// and the last millisecond before the following UTC midnight are shifted
/// by the offset. The range is always exactly 24 hours wide.
/// * With [`TimezoneShift::Local`], the range runs from the host's local
/// midnight to the host's following local midnight. That is, the host's UTC
/// offset is *subtracted* from both ends, which is the opposite of a fixed
/// shift. The offset is queried once, when the value is constructed.
/// * With [`TimezoneShift::MinMax`], the start is moved back by 12 hours and
/// the end forward by 14 hours. The range is always exactly 50 hours wide.
///
/// ```
/// use dateonly::{tz::TimezoneShift, DateOnly};
///
/// let date = DateOnly::new_in(2001, 2, 3, TimezoneShift::UTC)?;
/// assert_eq!(date.start_epoch(), 981_158_400_000);
/// assert_eq!(date.end_epoch(), 981_244_799_999);
/// assert!(date.contains(981_200_000_000));
///
/// let date = DateOnly::new_in(2001, 2, 3, TimezoneShift::hours(3.5)?)?;
/// assert_eq!(date.start_epoch(), 981_158_400_000 + 12_600_000);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Construction
///
/// There are strict constructors, which return an error for invalid dates,
/// and lenient constructors, which return `Ok(None)` instead:
///
/// * [`DateOnly::new`] and [`DateOnly::new_in`] are strict.
/// * [`DateOnly::try_new`] is lenient.
/// * [`DateOnly::parse_in`] and the `FromStr` implementation are strict.
/// * [`DateOnly::try_parse`] is lenient.
///
/// All of them return an error when the timezone shift can't be resolved.
/// For more control, use a [`DateOnlyBuilder`].
///
/// # Display format
///
/// The `Display` implementation writes the canonical `YYYY-MM-DD` form. The
/// year is zero padded to four digits, and negative years are prefixed with a
/// `-`. The canonical form is accepted by the parser, and the same string is
/// used for serialization.
///
/// ```
/// use dateonly::{tz::TimezoneShift, DateOnly};
///
/// let utc = TimezoneShift::UTC;
/// assert_eq!(DateOnly::new_in(2001, 2, 3, utc)?.to_string(), "2001-02-03");
/// assert_eq!(DateOnly::new_in(-1001, 2, 3, utc)?.to_string(), "-1001-02-03");
/// assert_eq!(DateOnly::new_in(7, 1, 1, utc)?.to_string(), "0007-01-01");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Comparisons
///
/// Two `DateOnly` values are equal only when their dates, shifts and epoch
/// ranges are all equal. Values are ordered by date first, so that when a
/// date `d1` occurs before a date `d2` on the calendar, then `d1 < d2`.
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct DateOnly {
    pub(crate) year: i16,
    pub(crate) month: i8,
    pub(crate) day: i8,
    pub(crate) shift: TimezoneShift,
    pub(crate) start_epoch: i64,
    pub(crate) end_epoch: i64,
}

impl DateOnly {
    /// Creates a new date in the host's local UTC offset.
    ///
    /// This is equivalent to
    /// `DateOnly::new_in(year, month, day, TimezoneShift::Local)`.
    ///
    /// # Errors
    ///
    /// This returns an error when the given year, month and day do not form
    /// a valid date, or when the local UTC offset can't be determined.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::DateOnly;
    ///
    /// let date = DateOnly::new(2020, 2, 29)?;
    /// assert_eq!(date.end_epoch() - date.start_epoch() + 1, 86_400_000);
    ///
    /// assert!(DateOnly::new(2019, 2, 29).unwrap_err().is_invalid_date());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn new(year: i16, month: i8, day: i8) -> Result<DateOnly, Error> {
        DateOnly::builder().build(year, month, day)
    }

    /// Creates a new date placed on the timeline with the given shift.
    ///
    /// # Errors
    ///
    /// This returns an error when the given year, month and day do not form
    /// a valid date, or when the shift can't be resolved.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::{tz::TimezoneShift, DateOnly};
    ///
    /// let date = DateOnly::new_in(2001, 2, 3, TimezoneShift::MinMax)?;
    /// assert_eq!(date.start_epoch(), 981_115_200_000);
    /// assert_eq!(date.end_epoch(), 981_295_199_999);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn new_in(
        year: i16,
        month: i8,
        day: i8,
        shift: TimezoneShift,
    ) -> Result<DateOnly, Error> {
        DateOnly::builder().shift(shift).build(year, month, day)
    }

    /// Creates a new date placed on the timeline with the given shift, or
    /// returns `None` if the year, month and day do not form a valid date.
    ///
    /// # Errors
    ///
    /// This returns an error only when the shift can't be resolved. That can
    /// only happen with [`TimezoneShift::Local`], and only for valid dates.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::{tz::TimezoneShift, DateOnly};
    ///
    /// let utc = TimezoneShift::UTC;
    /// assert!(DateOnly::try_new(2001, 2, 3, utc)?.is_some());
    /// assert!(DateOnly::try_new(2001, 13, 1, utc)?.is_none());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn try_new(
        year: i16,
        month: i8,
        day: i8,
        shift: TimezoneShift,
    ) -> Result<Option<DateOnly>, Error> {
        DateOnly::builder().shift(shift).try_build(year, month, day)
    }

    /// Parses a date in the form `YYYY-MM-DD` and places it on the timeline
    /// with the given shift.
    ///
    /// Months and days may be written with one or two digits, and years
    /// with one to four digits and an optional leading `-`. See the
    /// [`fmt`](crate::fmt) module for details.
    ///
    /// # Errors
    ///
    /// This returns an error when the input isn't in the expected form, when
    /// the date parsed isn't valid, or when the shift can't be resolved. Use
    /// [`Error::is_parse`] and [`Error::is_invalid_date`] to tell the first
    /// two apart.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::{tz::TimezoneShift, DateOnly};
    ///
    /// let utc = TimezoneShift::UTC;
    /// assert_eq!(
    ///     DateOnly::parse_in("2001-2-3", utc)?,
    ///     DateOnly::new_in(2001, 2, 3, utc)?,
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn parse_in<I: AsRef<[u8]>>(
        input: I,
        shift: TimezoneShift,
    ) -> Result<DateOnly, Error> {
        DateOnly::builder().shift(shift).parse(input)
    }

    /// Parses a date in the form `YYYY-MM-DD` and places it on the timeline
    /// with the given shift, or returns `None` if the input isn't a valid
    /// date in the expected form.
    ///
    /// # Errors
    ///
    /// This returns an error only when the shift can't be resolved.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::{tz::TimezoneShift, DateOnly};
    ///
    /// let utc = TimezoneShift::UTC;
    /// assert!(DateOnly::try_parse("2001-02-03", utc)?.is_some());
    /// assert!(DateOnly::try_parse("2001-02-30", utc)?.is_none());
    /// assert!(DateOnly::try_parse("2001-02-03T00:00", utc)?.is_none());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn try_parse<I: AsRef<[u8]>>(
        input: I,
        shift: TimezoneShift,
    ) -> Result<Option<DateOnly>, Error> {
        DateOnly::builder().shift(shift).try_parse(input)
    }

    /// Returns a builder with the default configuration.
    ///
    /// This is equivalent to [`DateOnlyBuilder::new`].
    #[inline]
    pub fn builder() -> DateOnlyBuilder {
        DateOnlyBuilder::new()
    }

    /// Returns true if the given year, month and day form a valid date.
    ///
    /// This is true precisely when constructing a `DateOnly` from them
    /// with a resolvable shift succeeds.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::DateOnly;
    ///
    /// assert!(DateOnly::is_valid(2020, 2, 29));
    /// assert!(!DateOnly::is_valid(2019, 2, 29));
    /// assert!(!DateOnly::is_valid(0, 1, 1));
    /// assert!(DateOnly::is_valid(-1001, 2, 3));
    /// ```
    #[inline]
    pub fn is_valid(year: i16, month: i8, day: i8) -> bool {
        calendar::utc_day(year, month, day).is_some()
    }

    /// Returns the year of this date.
    ///
    /// The value returned is in the range `-9999..=9999` and is never `0`.
    #[inline]
    pub fn year(self) -> i16 {
        self.year
    }

    /// Returns the month of this date, in the range `1..=12`.
    #[inline]
    pub fn month(self) -> i8 {
        self.month
    }

    /// Returns the day of this date.
    ///
    /// The value returned is at least `1` and at most the number of days in
    /// this date's month.
    #[inline]
    pub fn day(self) -> i8 {
        self.day
    }

    /// Returns the shift used to place this date on the timeline.
    #[inline]
    pub fn timezone_shift(self) -> TimezoneShift {
        self.shift
    }

    /// Returns the first millisecond, since the Unix epoch, that is
    /// considered part of this date.
    #[inline]
    pub fn start_epoch(self) -> i64 {
        self.start_epoch
    }

    /// Returns the last millisecond, since the Unix epoch, that is
    /// considered part of this date.
    ///
    /// This is inclusive. The first millisecond of the following date is
    /// `end_epoch() + 1` (when both are in the same fixed shift).
    #[inline]
    pub fn end_epoch(self) -> i64 {
        self.end_epoch
    }

    /// Returns the inclusive range of milliseconds since the Unix epoch
    /// covered by this date.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::{tz::TimezoneShift, DateOnly};
    ///
    /// let date = DateOnly::new_in(1970, 1, 1, TimezoneShift::UTC)?;
    /// assert_eq!(date.epoch_range(), 0..=86_399_999);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn epoch_range(self) -> core::ops::RangeInclusive<i64> {
        self.start_epoch..=self.end_epoch
    }

    /// Returns true if the given number of milliseconds since the Unix
    /// epoch falls within this date.
    ///
    /// # Example
    ///
    /// With [`TimezoneShift::MinMax`], the range starts 12 hours before UTC
    /// midnight and ends 14 hours after the following UTC midnight. Both
    /// bounds are inclusive:
    ///
    /// ```
    /// use dateonly::{tz::TimezoneShift, DateOnly};
    ///
    /// let date = DateOnly::new_in(2001, 2, 3, TimezoneShift::MinMax)?;
    /// // 2001-02-02T12:00:00Z
    /// assert!(date.contains(981_115_200_000));
    /// // One millisecond earlier.
    /// assert!(!date.contains(981_115_199_999));
    /// // 2001-02-04T13:59:59.999Z
    /// assert!(date.contains(981_295_199_999));
    /// assert!(!date.contains(981_295_200_000));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn contains(self, epoch_millisecond: i64) -> bool {
        self.start_epoch <= epoch_millisecond
            && epoch_millisecond <= self.end_epoch
    }
}

impl core::fmt::Debug for DateOnly {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            return core::fmt::Display::fmt(self, f);
        }
        f.debug_struct("DateOnly")
            .field("date", &format_args!("{self}"))
            .field("shift", &self.shift)
            .field("start_epoch", &self.start_epoch)
            .field("end_epoch", &self.end_epoch)
            .finish()
    }
}

impl core::fmt::Display for DateOnly {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        fmt::print_date(self.year, self.month, self.day, f)
    }
}

/// Parses a date in the host's local UTC offset.
///
/// This is equivalent to `DateOnly::parse_in(s, TimezoneShift::Local)`.
impl core::str::FromStr for DateOnly {
    type Err = Error;

    fn from_str(s: &str) -> Result<DateOnly, Error> {
        DateOnly::builder().parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DateOnly {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Deserializes a date in the host's local UTC offset.
///
/// To deserialize dates in a fixed shift, see the helpers in
/// [`fmt::serde`](crate::fmt::serde).
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DateOnly {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateOnly, D::Error> {
        use serde::de;

        struct DateOnlyVisitor;

        impl<'de> de::Visitor<'de> for DateOnlyVisitor {
            type Value = DateOnly;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a date string in the form YYYY-MM-DD")
            }

            #[inline]
            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<DateOnly, E> {
                DateOnly::builder().parse(value).map_err(de::Error::custom)
            }

            #[inline]
            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<DateOnly, E> {
                self.visit_bytes(value.as_bytes())
            }
        }

        deserializer.deserialize_str(DateOnlyVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for DateOnly {
    fn arbitrary(g: &mut quickcheck::Gen) -> DateOnly {
        use crate::util::itime::days_in_month;

        let any = |g: &mut quickcheck::Gen| {
            <i32 as quickcheck::Arbitrary>::arbitrary(g)
        };
        let mut year = any(g).rem_euclid(19_999) - 9_999;
        if year == 0 {
            year = 1;
        }
        let month = any(g).rem_euclid(12) + 1;
        let day = any(g).rem_euclid(days_in_month(year, month)) + 1;
        let shift = <TimezoneShift as quickcheck::Arbitrary>::arbitrary(g);
        // OK because the components were generated in range.
        DateOnly::new_in(year as i16, month as i8, day as i8, shift).unwrap()
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = DateOnly>> {
        let date = *self;
        let components = (date.year, date.month, date.day);
        alloc::boxed::Box::new(
            quickcheck::Arbitrary::shrink(&components).filter_map(
                move |(year, month, day)| {
                    DateOnly::try_new(year, month, day, date.shift).ok()?
                },
            ),
        )
    }
}
