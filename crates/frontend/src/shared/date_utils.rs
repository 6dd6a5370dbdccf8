//! Date helpers for the article list: display formatting of server
//! timestamps and validation of the `YYYY-MM-DD` filter bounds.

use chrono::NaiveDate;

/// Server format for `pubdate`, e.g. "2024-03-15 14:02:26"
const SERVER_DATETIME: &str = "%Y-%m-%d %H:%M:%S";

/// Format a server timestamp as `YYYY-MM-DD HH:MM`.
/// Unparseable input is shown as is.
pub fn format_pubdate(raw: &str) -> String {
    let trimmed = raw.trim();
    match chrono::NaiveDateTime::parse_from_str(trimmed, SERVER_DATETIME) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => match chrono::DateTime::parse_from_rfc3339(trimmed) {
            Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
            Err(_) => trimmed.to_string(),
        },
    }
}

/// Parse a date input value. Empty input means "no bound".
pub fn parse_filter_date(value: &str) -> Result<Option<NaiveDate>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("Invalid date: {}", value))
}

/// Validate a `[begin, end]` filter range. Either bound may be open.
pub fn filter_range(
    begin: &str,
    end: &str,
) -> Result<(Option<NaiveDate>, Option<NaiveDate>), String> {
    let begin = parse_filter_date(begin)?;
    let end = parse_filter_date(end)?;
    if let (Some(b), Some(e)) = (begin, end) {
        if b > e {
            return Err("Start date must not be after end date".to_string());
        }
    }
    Ok((begin, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pubdate() {
        assert_eq!(format_pubdate("2024-03-15 14:02:26"), "2024-03-15 14:02");
        assert_eq!(format_pubdate("2024-03-15T14:02:26Z"), "2024-03-15 14:02");
        assert_eq!(format_pubdate("yesterday"), "yesterday");
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_filter_range() {
        assert_eq!(filter_range("", ""), Ok((None, None)));
        assert_eq!(
            filter_range("2024-03-01", " 2024-03-31 "),
            Ok((Some(date(2024, 3, 1)), Some(date(2024, 3, 31))))
        );
        assert_eq!(
            filter_range("", "2024-03-31"),
            Ok((None, Some(date(2024, 3, 31))))
        );
        assert!(filter_range("2024-04-01", "2024-03-01").is_err());
        assert!(filter_range("03/01/2024", "").is_err());
    }
}
