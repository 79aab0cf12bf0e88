//! Period code and display date helpers.

use chrono::{Datelike, NaiveDate};

/// Display format of the `date` field.
pub const DAY_MONTH_YEAR: &str = "%d/%m/%Y";

/// Display format of the `Mes-ano` field.
pub const YEAR_MONTH: &str = "%Y-%m";

/// Parse a SIDRA monthly period code (`YYYYMM`) into the first day of that month.
pub fn parse_period_code(code: &str) -> Option<NaiveDate> {
    let code = code.trim();
    if code.len() != 6 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = code[0..4].parse().ok()?;
    let month: u32 = code[4..6].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// `dd/mm/yyyy`
pub fn format_day_month_year(date: NaiveDate) -> String {
    date.format(DAY_MONTH_YEAR).to_string()
}

/// Reparse a `dd/mm/yyyy` date and truncate it to `YYYY-MM`.
pub fn month_year_of(day_month_year: &str) -> Result<String, chrono::ParseError> {
    let date = NaiveDate::parse_from_str(day_month_year, DAY_MONTH_YEAR)?;
    Ok(first_of_month(date).format(YEAR_MONTH).to_string())
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_period_code() {
        assert_eq!(
            parse_period_code("202403"),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(
            parse_period_code(" 199412 "),
            NaiveDate::from_ymd_opt(1994, 12, 1)
        );
    }

    #[test]
    fn test_parse_period_code_rejects_garbage() {
        for bad in ["", "2024", "2024031", "202413", "202400", "2024-3", "+20243", "Mês (Código)"] {
            assert_eq!(parse_period_code(bad), None, "accepted {bad:?}");
        }
    }

    #[test]
    fn test_format_day_month_year_pads() {
        let date = NaiveDate::from_ymd_opt(2016, 2, 1).unwrap();
        assert_eq!(format_day_month_year(date), "01/02/2016");
    }

    #[test]
    fn test_month_year_of() {
        assert_eq!(month_year_of("01/03/2024").unwrap(), "2024-03");
        assert_eq!(month_year_of("17/11/2019").unwrap(), "2019-11");
        assert!(month_year_of("2024-03-01").is_err());
    }
}
