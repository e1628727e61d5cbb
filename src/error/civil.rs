use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    DayRange { year: i16, month: i8, day: i8, max: i8 },
    MonthRange { month: i8 },
    YearRange { year: i16 },
    YearZero,
}

impl Error {
    /// Explains why the given year, month and day do not form a valid date.
    ///
    /// This is only called after the calendar has already rejected the
    /// date, so it never needs to report success.
    #[cold]
    #[inline(never)]
    pub(crate) fn diagnose(year: i16, month: i8, day: i8) -> Error {
        use crate::util::itime::days_in_month;

        if year == 0 {
            return Error::YearZero;
        }
        if !(-9999..=9999).contains(&year) {
            return Error::YearRange { year };
        }
        if !(1..=12).contains(&month) {
            return Error::MonthRange { month };
        }
        // OK because month is in 1..=12, so this is at most 31.
        let max = days_in_month(i32::from(year), i32::from(month)) as i8;
        Error::DayRange { year, month, day, max }
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Civil(err).into()
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
            DayRange { year, month, day, max } => write!(
                f,
                "day {day} is not valid for month {month} of year {year} \
                 (expected a day in the range 1..={max})",
            ),
            MonthRange { month } => write!(
                f,
                "month {month} is not in the required range of 1..=12",
            ),
            YearRange { year } => write!(
                f,
                "year {year} is not in the supported range of -9999..=9999",
            ),
            YearZero => f.write_str(
                "year `0` does not exist (the year before `1` is `-1`)",
            ),
        }
    }
}
