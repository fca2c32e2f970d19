//! Posting-date formatting.

use chrono::DateTime;

/// Format Unix seconds as `DD MMM YYYY` (UTC, English month abbreviations).
///
/// Returns `None` for timestamps outside chrono's representable range.
pub fn format_posted(unix_secs: i64) -> Option<String> {
    DateTime::from_timestamp(unix_secs, 0).map(|dt| dt.format("%d %b %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        assert_eq!(format_posted(0).as_deref(), Some("01 Jan 1970"));
    }

    #[test]
    fn test_zero_padded_day() {
        // 2004-11-19T21:11:19Z
        assert_eq!(format_posted(1_100_898_679).as_deref(), Some("19 Nov 2004"));
        // 2021-03-05T00:00:00Z
        assert_eq!(format_posted(1_614_902_400).as_deref(), Some("05 Mar 2021"));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(format_posted(i64::MAX), None);
    }
}
