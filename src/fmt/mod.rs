/*!
Parsing and printing of civil dates.

This crate accepts exactly one date format: an optional `-` sign, a year of
one to four digits, a month of one or two digits and a day of one or two
digits, separated by `-`. Nothing may precede or follow it. So `2001-02-03`,
`2001-2-3` and `-1001-02-03` are accepted, while `2001-02-03T00:00`,
`20010203` and ` 2001-02-03` are not.

Dates are always printed in the canonical form `YYYY-MM-DD`, with years
zero padded to four digits and negative years prefixed with `-`. The
canonical form of every valid date is accepted by the parser.

Note that parsing here is purely syntactic. Whether the parsed components
form a real date is decided by [`civil`](crate::civil).

# Serde

When the `serde` crate feature is enabled, [`DateOnly`](crate::DateOnly)
serializes to its canonical form. The [`serde`](self::serde) module provides
helpers for deserializing under a fixed [`TimezoneShift`](crate::tz::TimezoneShift)
instead of the local one.
*/

pub(crate) use self::{parse::parse_date, print::print_date};

mod parse;
mod print;
#[cfg(feature = "serde")]
pub mod serde;

/// The result of parsing a value out of a slice of bytes.
///
/// This contains both the parsed value and the offset at which the value
/// ended in the input given. This makes it possible to parse, for example, a
/// year and then continue parsing after it.
#[derive(Debug)]
pub(crate) struct Parsed<'i, V> {
    /// The value parsed.
    value: V,
    /// The remaining unparsed input.
    input: &'i [u8],
}
