use core::fmt::Write;

/// Writes the canonical `YYYY-MM-DD` form of the given date.
///
/// The year is zero padded to four digits. Negative years are written with
/// a leading `-` followed by the zero padded absolute value, which keeps the
/// output inside the grammar accepted by [`parse_date`](super::parse_date)
/// for every year in `-9999..=9999`.
pub(crate) fn print_date<W: Write>(
    year: i16,
    month: i8,
    day: i8,
    mut wtr: W,
) -> core::fmt::Result {
    if year < 0 {
        wtr.write_char('-')?;
    }
    write!(wtr, "{:04}-{:02}-{:02}", year.unsigned_abs(), month, day)
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;

    fn print(year: i16, month: i8, day: i8) -> String {
        let mut buf = String::new();
        print_date(year, month, day, &mut buf).unwrap();
        buf
    }

    #[test]
    fn canonical() {
        assert_eq!(print(2001, 2, 3), "2001-02-03");
        assert_eq!(print(1, 1, 1), "0001-01-01");
        assert_eq!(print(9999, 12, 31), "9999-12-31");
        assert_eq!(print(-1, 1, 1), "-0001-01-01");
        assert_eq!(print(-1001, 2, 3), "-1001-02-03");
        assert_eq!(print(-9999, 12, 31), "-9999-12-31");
    }
}
