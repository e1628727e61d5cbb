use crate::{
    civil::{calendar, DateOnly},
    error::{
        civil::Error as CivilError, fmt::Error as FmtError, Error,
        ErrorContext,
    },
    fmt,
    tz::{LocalOffset, SystemOffset, TimezoneShift},
};

/// A builder for constructing [`DateOnly`] values.
///
/// Every constructor on `DateOnly` is a shortcut for a builder with a
/// particular configuration. Using a builder directly is useful when the
/// same configuration is used for many dates, or when the source of the
/// local UTC offset needs to be swapped out.
///
/// A builder has two knobs:
///
/// * The [`TimezoneShift`] used to compute the epoch range of each date.
/// This defaults to [`TimezoneShift::Local`].
/// * The [`LocalOffset`] consulted when the shift is `Local`. This defaults
/// to [`SystemOffset`], which asks the operating system.
///
/// # Strict versus lenient
///
/// The `build` and `parse` methods return an error when the input is not a
/// valid date. The `try_build` and `try_parse` methods return `Ok(None)`
/// instead. Both return an error when the timezone shift can't be resolved,
/// since that indicates a problem with the configuration and not with the
/// input.
///
/// # Example
///
/// This pins the local offset so that results don't depend on the host:
///
/// ```
/// use dateonly::{tz::Offset, DateOnlyBuilder};
///
/// let builder = DateOnlyBuilder::new().local_offset(Offset::constant(4));
/// let date = builder.build(2001, 2, 3)?;
/// // Local midnight at `+04:00` is 4 hours before UTC midnight.
/// assert_eq!(date.start_epoch(), 981_144_000_000);
/// assert_eq!(date.end_epoch(), 981_244_799_999 - 14_400_000);
///
/// assert_eq!(builder.try_build(2001, 2, 30)?, None);
/// assert!(builder.try_parse("2001-02-03")?.is_some());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct DateOnlyBuilder<L = SystemOffset> {
    shift: TimezoneShift,
    local: L,
}

impl DateOnlyBuilder {
    /// Creates a new builder using [`TimezoneShift::Local`] and the host's
    /// UTC offset.
    #[inline]
    pub fn new() -> DateOnlyBuilder {
        DateOnlyBuilder { shift: TimezoneShift::Local, local: SystemOffset }
    }
}

impl Default for DateOnlyBuilder {
    fn default() -> DateOnlyBuilder {
        DateOnlyBuilder::new()
    }
}

impl<L: LocalOffset> DateOnlyBuilder<L> {
    /// Sets the timezone shift used for dates built by this builder.
    ///
    /// # Example
    ///
    /// ```
    /// use dateonly::{tz::TimezoneShift, DateOnlyBuilder};
    ///
    /// let date = DateOnlyBuilder::new()
    ///     .shift(TimezoneShift::MinMax)
    ///     .build(2001, 2, 3)?;
    /// assert_eq!(date.end_epoch() - date.start_epoch() + 1, 180_000_000);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn shift(self, shift: TimezoneShift) -> DateOnlyBuilder<L> {
        DateOnlyBuilder { shift, ..self }
    }

    /// Sets the source of the local UTC offset.
    ///
    /// This is only consulted when the shift is [`TimezoneShift::Local`],
    /// and it is consulted once for every date built.
    #[inline]
    pub fn local_offset<M: LocalOffset>(
        self,
        local: M,
    ) -> DateOnlyBuilder<M> {
        DateOnlyBuilder { shift: self.shift, local }
    }

    /// Builds a date from its year, month and day.
    ///
    /// # Errors
    ///
    /// This returns an error when the given year, month and day do not form
    /// a valid date (see [`DateOnly::is_valid`]), or when the timezone shift
    /// can't be resolved.
    pub fn build(
        &self,
        year: i16,
        month: i8,
        day: i8,
    ) -> Result<DateOnly, Error> {
        let Some(utc) = calendar::utc_day(year, month, day) else {
            trace!("rejected invalid date {year}, {month}, {day}");
            return Err(Error::from(CivilError::diagnose(year, month, day)));
        };
        self.assemble(year, month, day, utc)
    }

    /// Builds a date from its year, month and day, returning `None` when
    /// they do not form a valid date.
    ///
    /// # Errors
    ///
    /// This returns an error only when the timezone shift can't be resolved.
    /// The shift is resolved only after the date is known to be valid.
    pub fn try_build(
        &self,
        year: i16,
        month: i8,
        day: i8,
    ) -> Result<Option<DateOnly>, Error> {
        let Some(utc) = calendar::utc_day(year, month, day) else {
            trace!("rejected invalid date {year}, {month}, {day}");
            return Ok(None);
        };
        self.assemble(year, month, day, utc).map(Some)
    }

    /// Parses a date from a string in the form `YYYY-MM-DD`.
    ///
    /// See the [`fmt`](crate::fmt) module for the grammar accepted.
    ///
    /// # Errors
    ///
    /// This returns an error when the input doesn't match the grammar,
    /// when the components parsed do not form a valid date, or when the
    /// timezone shift can't be resolved.
    pub fn parse<I: AsRef<[u8]>>(
        &self,
        input: I,
    ) -> Result<DateOnly, Error> {
        let input = input.as_ref();
        let (year, month, day, utc) = fmt::parse_date(input)
            .and_then(|(year, month, day)| {
                let Some(utc) = calendar::utc_day(year, month, day) else {
                    return Err(Error::from(CivilError::diagnose(
                        year, month, day,
                    )));
                };
                Ok((year, month, day, utc))
            })
            .with_context(|| FmtError::input(input))?;
        self.assemble(year, month, day, utc)
    }

    /// Parses a date from a string in the form `YYYY-MM-DD`, returning
    /// `None` when the input doesn't match the grammar or doesn't form a
    /// valid date.
    ///
    /// # Errors
    ///
    /// This returns an error only when the timezone shift can't be resolved.
    pub fn try_parse<I: AsRef<[u8]>>(
        &self,
        input: I,
    ) -> Result<Option<DateOnly>, Error> {
        let input = input.as_ref();
        let (year, month, day) = match fmt::parse_date(input) {
            Ok(components) => components,
            Err(_err) => {
                trace!(
                    "rejected date string {:?}: {_err}",
                    alloc::string::String::from_utf8_lossy(input),
                );
                return Ok(None);
            }
        };
        self.try_build(year, month, day)
    }

    /// Places an already validated date on the timeline.
    fn assemble(
        &self,
        year: i16,
        month: i8,
        day: i8,
        utc: calendar::UtcDay,
    ) -> Result<DateOnly, Error> {
        let shift = self.shift.resolve(&self.local)?;
        Ok(DateOnly {
            year,
            month,
            day,
            shift: self.shift,
            start_epoch: utc.start + shift.start,
            end_epoch: utc.end + shift.end,
        })
    }
}

impl<L> core::fmt::Debug for DateOnlyBuilder<L> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("DateOnlyBuilder")
            .field("shift", &self.shift)
            .field("local", &core::any::type_name::<L>())
            .finish()
    }
}
