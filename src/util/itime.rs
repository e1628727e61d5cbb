/*!
Internal calendar arithmetic.

Everything that knows how the Gregorian calendar counts days lives here:
leap years, month lengths and the conversion between a date and a count of
days since the Unix epoch.

The routines work on plain integers and do not assume their inputs are
valid dates. `IDate::normalize` rolls a date like `2001-02-30` forward to
`2001-03-02`. Callers that care about validity compare the normalized
result with what they started with.

The `I` prefix marks these types as internal. For example, `IDate` versus
the public `DateOnly`.
*/

/// The number of milliseconds in a single civil day.
pub(crate) const MILLIS_PER_DAY: i64 = 86_400_000;

/// The number of days from `0000-03-01` to `1970-01-01`.
const DAYS_TO_UNIX_EPOCH: i32 = 719_468;

/// The number of days in a 400 year Gregorian cycle.
const DAYS_PER_ERA: i32 = 146_097;

/// A count of days since `1970-01-01`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub(crate) struct IEpochDay {
    pub(crate) epoch_day: i32,
}

impl IEpochDay {
    /// Converts days since the Unix epoch to a Gregorian date.
    ///
    /// Years are counted from March so that the leap day, when there is
    /// one, is the last day of the year. The calendar repeats every 400
    /// years, so only the position within an era needs any real work.
    ///
    /// Ref: <https://howardhinnant.github.io/date_algorithms.html#civil_from_days>
    #[inline]
    pub(crate) const fn to_date(&self) -> IDate {
        let days = self.epoch_day + DAYS_TO_UNIX_EPOCH;
        let era = days.div_euclid(DAYS_PER_ERA);
        // Both of these are non-negative from here on.
        let day_of_era = days - era * DAYS_PER_ERA;
        let year_of_era = (day_of_era - day_of_era / 1460
            + day_of_era / 36524
            - day_of_era / (DAYS_PER_ERA - 1))
            / 365;
        let day_of_year = day_of_era
            - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let march_month = (5 * day_of_year + 2) / 153;
        let day = day_of_year - (153 * march_month + 2) / 5 + 1;
        let month =
            if march_month < 10 { march_month + 3 } else { march_month - 9 };
        let year = year_of_era + era * 400 + (month <= 2) as i32;
        IDate { year, month, day }
    }

    /// Returns the Unix timestamp, in milliseconds, of midnight (UTC) at the
    /// beginning of this day.
    #[inline]
    pub(crate) const fn to_millisecond(&self) -> i64 {
        (self.epoch_day as i64) * MILLIS_PER_DAY
    }
}

/// A Gregorian date whose components are not necessarily in range.
///
/// Years use astronomical numbering here: the year before `1` is `0`. The
/// public API is what forbids year `0`, not this type.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub(crate) struct IDate {
    pub(crate) year: i32,
    pub(crate) month: i32,
    pub(crate) day: i32,
}

impl IDate {
    /// Converts a Gregorian date to days since the Unix epoch.
    ///
    /// The month must be in the range `1..=12` and the day must be in range
    /// for this to produce a meaningful result. Use `IDate::normalize` for
    /// dates that might not be.
    ///
    /// This is the inverse of `IEpochDay::to_date`.
    ///
    /// Ref: <https://howardhinnant.github.io/date_algorithms.html#days_from_civil>
    #[inline]
    pub(crate) const fn to_epoch_day(&self) -> IEpochDay {
        let year = if self.month <= 2 { self.year - 1 } else { self.year };
        let era = year.div_euclid(400);
        let year_of_era = year - era * 400;
        // March is `0` and February is `11`.
        let march_month = (self.month + 9) % 12;
        let day_of_year = (153 * march_month + 2) / 5 + self.day - 1;
        let day_of_era = 365 * year_of_era + year_of_era / 4
            - year_of_era / 100
            + day_of_year;
        let epoch_day = era * DAYS_PER_ERA + day_of_era - DAYS_TO_UNIX_EPOCH;
        IEpochDay { epoch_day }
    }

    /// Computes the epoch day for this date as if months and days were
    /// allowed to overflow into the next year or month.
    ///
    /// Month `13` of `2001` is month `1` of `2002`. Day `0` of March is the
    /// last day of February. Day `32` of January is February 1.
    ///
    /// Components from the `i16` and `i8` types used at the public boundary
    /// can't overflow here, even with the `+ 1` used to get the following
    /// day.
    #[inline(always)]
    pub(crate) const fn normalize(&self) -> IEpochDay {
        let zero_based = self.month - 1;
        let year = self.year + zero_based.div_euclid(12);
        let month = zero_based.rem_euclid(12) + 1;
        let first = IDate { year, month, day: 1 }.to_epoch_day();
        IEpochDay { epoch_day: first.epoch_day + (self.day - 1) }
    }
}

/// Returns true if the given astronomical year has a February 29.
#[inline]
pub(crate) const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given month, which must be in the
/// range `1..=12`.
#[inline]
pub(crate) const fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_epochday_date() {
        for year in -9999..=9999 {
            for month in 1..=12 {
                for day in 1..=days_in_month(year, month) {
                    let date = IDate { year, month, day };
                    let epoch_day = date.to_epoch_day();
                    let date_roundtrip = epoch_day.to_date();
                    assert_eq!(date, date_roundtrip);
                }
            }
        }
    }

    #[test]
    fn normalize_in_range_is_identity() {
        for year in [-1001, -1, 0, 1, 1970, 2000, 2001, 2020, 9999] {
            for month in 1..=12 {
                for day in 1..=days_in_month(year, month) {
                    let date = IDate { year, month, day };
                    assert_eq!(date.normalize(), date.to_epoch_day());
                }
            }
        }
    }

    #[test]
    fn normalize_rolls_forward() {
        let got = IDate { year: 2001, month: 2, day: 30 }.normalize();
        assert_eq!(got.to_date(), IDate { year: 2001, month: 3, day: 2 });

        let got = IDate { year: 2001, month: 13, day: 1 }.normalize();
        assert_eq!(got.to_date(), IDate { year: 2002, month: 1, day: 1 });

        let got = IDate { year: 2001, month: 12, day: 32 }.normalize();
        assert_eq!(got.to_date(), IDate { year: 2002, month: 1, day: 1 });

        let got = IDate { year: 2001, month: 3, day: 0 }.normalize();
        assert_eq!(got.to_date(), IDate { year: 2001, month: 2, day: 28 });

        let got = IDate { year: 2001, month: 0, day: 1 }.normalize();
        assert_eq!(got.to_date(), IDate { year: 2000, month: 12, day: 1 });

        let got = IDate { year: 2001, month: -4, day: 1 }.normalize();
        assert_eq!(got.to_date(), IDate { year: 2000, month: 8, day: 1 });
    }

    #[test]
    fn normalize_extremes_roundtrip() {
        let got = IDate { year: -32768, month: -128, day: -128 }.normalize();
        let date = got.to_date();
        assert_eq!(date.to_epoch_day(), got);

        let got = IDate { year: 32767, month: 127, day: 128 }.normalize();
        let date = got.to_date();
        assert_eq!(date.to_epoch_day(), got);
    }

    #[test]
    fn epoch_milliseconds() {
        let unix = IDate { year: 1970, month: 1, day: 1 }.to_epoch_day();
        assert_eq!(unix.to_millisecond(), 0);

        let d = IDate { year: 2001, month: 2, day: 3 }.to_epoch_day();
        assert_eq!(d.to_millisecond(), 981_158_400_000);

        let d = IDate { year: -1001, month: 2, day: 3 }.to_epoch_day();
        assert_eq!(d.to_millisecond(), -93_752_812_800_000);
    }

    #[test]
    fn leap_year() {
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2001));
        assert!(!is_leap_year(2002));
        assert!(!is_leap_year(2003));
        assert!(is_leap_year(2004));
        assert!(is_leap_year(2020));
        assert!(!is_leap_year(2019));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
        assert!(is_leap_year(-400));
    }

    #[test]
    fn number_of_days_in_month() {
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2024, 3), 31);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 5), 31);
        assert_eq!(days_in_month(2024, 6), 30);
        assert_eq!(days_in_month(2024, 7), 31);
        assert_eq!(days_in_month(2024, 8), 31);
        assert_eq!(days_in_month(2024, 9), 30);
        assert_eq!(days_in_month(2024, 10), 31);
        assert_eq!(days_in_month(2024, 11), 30);
        assert_eq!(days_in_month(2024, 12), 31);

        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }
}
