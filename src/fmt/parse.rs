use crate::{
    error::{fmt::Error as E, Error},
    fmt::Parsed,
};

/// Parses the components of a date from `input`.
///
/// The grammar is `-?Y{1,4}-M{1,2}-D{1,2}`, where `Y`, `M` and `D` are ASCII
/// digits, and the entire input must be consumed. The components returned
/// are not validated against the calendar. For example, `2001-02-30` and
/// `0-13-0` both parse successfully.
///
/// The error returned does not include the input itself. Callers are
/// expected to add that as context.
pub(crate) fn parse_date(input: &[u8]) -> Result<(i16, i8, i8), Error> {
    let Parsed { value: year, input } = parse_year(input)?;
    let input = parse_separator(input, "year")?;
    let Parsed { value: month, input } = parse_month(input)?;
    let input = parse_separator(input, "month")?;
    let Parsed { value: day, input } = parse_day(input)?;
    if let Some(&found) = input.first() {
        return Err(Error::from(E::TrailingInput { found }));
    }
    Ok((year, month, day))
}

fn parse_year<'i>(input: &'i [u8]) -> Result<Parsed<'i, i16>, Error> {
    let (sign, input) = match input.split_first() {
        Some((b'-', rest)) => (-1, rest),
        _ => (1, input),
    };
    let Some(Parsed { value: year, input }) = digits(input, 4, "year")? else {
        return Err(Error::from(E::ExpectedYear { found: first(input) }));
    };
    // OK because four digits is at most 9999.
    let year = (year as i16) * sign;
    Ok(Parsed { value: year, input })
}

fn parse_month<'i>(input: &'i [u8]) -> Result<Parsed<'i, i8>, Error> {
    let Some(Parsed { value: month, input }) = digits(input, 2, "month")?
    else {
        return Err(Error::from(E::ExpectedMonth { found: first(input) }));
    };
    // OK because two digits is at most 99.
    Ok(Parsed { value: month as i8, input })
}

fn parse_day<'i>(input: &'i [u8]) -> Result<Parsed<'i, i8>, Error> {
    let Some(Parsed { value: day, input }) = digits(input, 2, "day")? else {
        return Err(Error::from(E::ExpectedDay { found: first(input) }));
    };
    // OK because two digits is at most 99.
    Ok(Parsed { value: day as i8, input })
}

fn parse_separator<'i>(
    input: &'i [u8],
    after: &'static str,
) -> Result<&'i [u8], Error> {
    match input.split_first() {
        Some((b'-', rest)) => Ok(rest),
        _ => Err(Error::from(E::ExpectedSeparator {
            after,
            found: first(input),
        })),
    }
}

/// Parses a run of at most `max` ASCII digits as an unsigned integer.
///
/// This returns `None` when `input` doesn't start with a digit, and an error
/// when the run of digits is longer than `max`.
fn digits<'i>(
    input: &'i [u8],
    max: u8,
    what: &'static str,
) -> Result<Option<Parsed<'i, u16>>, Error> {
    let len = input.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return Ok(None);
    }
    if len > usize::from(max) {
        return Err(Error::from(E::TooManyDigits { what, max }));
    }
    let (digits, input) = input.split_at(len);
    let value = digits
        .iter()
        .fold(0u16, |acc, &b| acc * 10 + u16::from(b - b'0'));
    Ok(Some(Parsed { value, input }))
}

fn first(input: &[u8]) -> Option<u8> {
    input.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(input: &str) -> Result<(i16, i8, i8), Error> {
        parse_date(input.as_bytes())
    }

    #[test]
    fn ok() {
        assert_eq!(p("2001-02-03").unwrap(), (2001, 2, 3));
        assert_eq!(p("2001-2-3").unwrap(), (2001, 2, 3));
        assert_eq!(p("1-1-1").unwrap(), (1, 1, 1));
        assert_eq!(p("0001-01-01").unwrap(), (1, 1, 1));
        assert_eq!(p("-1001-02-03").unwrap(), (-1001, 2, 3));
        assert_eq!(p("9999-12-31").unwrap(), (9999, 12, 31));
        assert_eq!(p("-9999-12-31").unwrap(), (-9999, 12, 31));
    }

    // The parser does not know about the calendar.
    #[test]
    fn ok_but_not_a_date() {
        assert_eq!(p("2001-02-30").unwrap(), (2001, 2, 30));
        assert_eq!(p("0-0-0").unwrap(), (0, 0, 0));
        assert_eq!(p("-0-99-99").unwrap(), (0, 99, 99));
    }

    #[test]
    fn err() {
        insta::assert_snapshot!(
            p("").unwrap_err(),
            @"expected one to four digits for the year (optionally preceded by `-`), but found end of input",
        );
        insta::assert_snapshot!(
            p("+2001-02-03").unwrap_err(),
            @"expected one to four digits for the year (optionally preceded by `-`), but found `+`",
        );
        insta::assert_snapshot!(
            p("--2001-02-03").unwrap_err(),
            @"expected one to four digits for the year (optionally preceded by `-`), but found `-`",
        );
        insta::assert_snapshot!(
            p("20010-02-03").unwrap_err(),
            @"expected at most 4 digits for the year",
        );
        insta::assert_snapshot!(
            p("2001/02/03").unwrap_err(),
            @"expected `-` after the year, but found `/`",
        );
        insta::assert_snapshot!(
            p("2001-x-03").unwrap_err(),
            @"expected one or two digits for the month, but found `x`",
        );
        insta::assert_snapshot!(
            p("2001-002-03").unwrap_err(),
            @"expected at most 2 digits for the month",
        );
        insta::assert_snapshot!(
            p("2001-02").unwrap_err(),
            @"expected `-` after the month, but found end of input",
        );
        insta::assert_snapshot!(
            p("2001-02-").unwrap_err(),
            @"expected one or two digits for the day, but found end of input",
        );
        insta::assert_snapshot!(
            p("2001-02-003").unwrap_err(),
            @"expected at most 2 digits for the day",
        );
        insta::assert_snapshot!(
            p("2001-02-03T00:00").unwrap_err(),
            @"expected end of input after the day, but found `T`",
        );
        insta::assert_snapshot!(
            p("2001-02-03\n").unwrap_err(),
            @r"expected end of input after the day, but found `\n`",
        );
        insta::assert_snapshot!(
            p(" 2001-02-03").unwrap_err(),
            @"expected one to four digits for the year (optionally preceded by `-`), but found ` `",
        );
    }

    #[test]
    fn err_is_parse() {
        for input in ["", "2001", "2001-02-03 ", "x2001-02-03", "20010203"] {
            let err = p(input).unwrap_err();
            assert!(err.is_parse(), "{input:?}");
            assert!(!err.is_invalid_date(), "{input:?}");
        }
    }
}
