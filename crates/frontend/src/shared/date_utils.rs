//! Date helpers for the report filter.

use chrono::NaiveDate;

/// Parse a date-input value (YYYY-MM-DD); empty means "no bound".
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Validate a report window before any request is issued. Equal endpoints
/// are a one-day window and pass.
pub fn validate_window(from: &str, to: &str) -> Result<(), String> {
    match (parse_input_date(from), parse_input_date(to)) {
        (Some(from), Some(to)) if from > to => {
            Err("'From' date must not be after 'To' date".to_string())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_date() {
        assert_eq!(
            parse_input_date("2024-03-15"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("15.03.2024"), None);
    }

    #[test]
    fn test_validate_window() {
        assert!(validate_window("2024-03-01", "2024-03-31").is_ok());
        assert!(validate_window("2024-03-01", "2024-03-01").is_ok());
        assert!(validate_window("2024-03-31", "2024-03-01").is_err());
        // open-ended windows impose no ordering constraint
        assert!(validate_window("", "2024-03-01").is_ok());
        assert!(validate_window("2024-03-01", "").is_ok());
        assert!(validate_window("", "").is_ok());
    }
}
