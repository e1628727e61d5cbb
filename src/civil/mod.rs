/*!
Civil dates and their placement on the timeline.

The main type of this module is [`DateOnly`], a valid date in the proleptic
Gregorian calendar that also carries the inclusive range of epoch
milliseconds it covers. Values are created either directly through the
constructors on `DateOnly`, or through a [`DateOnlyBuilder`] when the same
configuration is reused or the source of the local UTC offset needs to be
injected.

# Validity

A year, month and day form a valid date when all of the following hold:

* The year is in the range `-9999..=9999` and is not `0`.
* The month is in the range `1..=12`.
* The day is at least `1` and at most the number of days in that month of
that year. Leap years follow the Gregorian rules, applied proleptically with
astronomical year numbering.

[`is_valid_date`] checks these rules without constructing anything.
*/

pub use self::{builder::DateOnlyBuilder, date::DateOnly};

mod builder;
pub(crate) mod calendar;
mod date;

/// Returns true if the given year, month and day form a valid date.
///
/// This is the same as [`DateOnly::is_valid`].
///
/// # Example
///
/// ```
/// use dateonly::civil::is_valid_date;
///
/// assert!(is_valid_date(2020, 2, 29));
/// assert!(!is_valid_date(2019, 2, 29));
/// assert!(!is_valid_date(2001, 13, 1));
/// assert!(!is_valid_date(2001, 1, 32));
/// assert!(!is_valid_date(0, 1, 1));
/// ```
#[inline]
pub fn is_valid_date(year: i16, month: i8, day: i8) -> bool {
    calendar::utc_day(year, month, day).is_some()
}
