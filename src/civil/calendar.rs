use crate::util::itime::{IDate, MILLIS_PER_DAY};

/// The smallest year accepted by this crate.
pub(crate) const YEAR_MIN: i16 = -9999;

/// The largest year accepted by this crate.
pub(crate) const YEAR_MAX: i16 = 9999;

/// The span of a civil day in UTC, in milliseconds since the Unix epoch.
///
/// Both ends are inclusive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct UtcDay {
    /// The first millisecond of the day, i.e., midnight.
    pub(crate) start: i64,
    /// The last millisecond of the day, i.e., one millisecond before the
    /// following midnight.
    pub(crate) end: i64,
}

/// Returns the UTC span of the given date, or `None` if the date is not
/// valid.
///
/// Validity is decided by computing the epoch day of the date as if months
/// and days could overflow (so `2001-02-30` becomes `2001-03-02`), and then
/// requiring that converting it back yields exactly the same date. This
/// rejects out of range months and days as well as days that don't exist in
/// a particular month of a particular year.
///
/// Year `0` does not exist and years outside of `-9999..=9999` are not
/// supported.
pub(crate) fn utc_day(year: i16, month: i8, day: i8) -> Option<UtcDay> {
    if year == 0 || !(YEAR_MIN..=YEAR_MAX).contains(&year) {
        return None;
    }
    let date = IDate {
        year: i32::from(year),
        month: i32::from(month),
        day: i32::from(day),
    };
    let epoch_day = date.normalize();
    if epoch_day.to_date() != date {
        return None;
    }
    // The following day is computed with the same roll-forward, so that
    // `2001-12-31` is followed by `2002-01-01`.
    let following = IDate { day: date.day + 1, ..date }.normalize();
    Some(UtcDay {
        start: epoch_day.to_millisecond(),
        end: following.to_millisecond() - 1,
    })
}
