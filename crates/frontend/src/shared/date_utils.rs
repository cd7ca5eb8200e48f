/// Utilities for date formatting and `<input type="date">` values
use chrono::NaiveDate;

const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Format a date as DD.MM.YYYY
/// Example: 2025-03-15 -> "15.03.2025"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Value for a native date input (yyyy-mm-dd); empty for `None`
pub fn to_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// Parse a native date input value; blank or malformed gives `None`
pub fn parse_input_value(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), INPUT_FORMAT).ok()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        assert_eq!(format_date(d), "15.03.2025");
    }

    #[test]
    fn test_input_value_roundtrip_and_blank() {
        let d = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(to_input_value(Some(d)), "2024-12-31");
        assert_eq!(parse_input_value("2024-12-31"), Some(d));
        assert_eq!(to_input_value(None), "");
        assert_eq!(parse_input_value(""), None);
        assert_eq!(parse_input_value("31.12.2024"), None);
    }
}
