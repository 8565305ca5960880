use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::errors::{Result, ValidationError};

/// Date layouts seen in registrar exports, tried in order.
const LEDGER_DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%d-%b-%Y", "%Y/%m/%d"];

/// Parses a ledger date column.
///
/// Accepts the plain date layouts in `LEDGER_DATE_FORMATS` and full RFC 3339
/// timestamps, in which case only the date part is kept.
pub fn parse_ledger_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("investmentDate".to_string()).into());
    }

    for format in LEDGER_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }

    Err(ValidationError::InvalidInput(format!("Unrecognized date '{}'", trimmed)).into())
}

/// Midnight at the start of `date`, the instant a ledger date stands for.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        let date = parse_ledger_date("2024-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_registrar_layouts() {
        let expected = NaiveDate::from_ymd_opt(2023, 3, 7).unwrap();
        assert_eq!(parse_ledger_date("07-03-2023").unwrap(), expected);
        assert_eq!(parse_ledger_date("07/03/2023").unwrap(), expected);
        assert_eq!(parse_ledger_date("07-Mar-2023").unwrap(), expected);
        assert_eq!(parse_ledger_date(" 2023/03/07 ").unwrap(), expected);
    }

    #[test]
    fn test_parse_rfc3339_keeps_date() {
        let date = parse_ledger_date("2024-06-30T18:45:00+05:30").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_ledger_date("next tuesday").is_err());
        assert!(parse_ledger_date("   ").is_err());
    }

    #[test]
    fn test_start_of_day() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(start_of_day(date).date(), date);
        assert_eq!(start_of_day(date).time(), NaiveTime::MIN);
    }
}
