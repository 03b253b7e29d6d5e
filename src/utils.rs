//! Utility functions

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;

use crate::constants::APP_NAME;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://[\w\-_]+(\.[\w\-_]+)+([\w\-.,@?^=%&:/~+#]*[\w\-@?^=%&/~+#])?").unwrap()
});

/// Get the app data directory path
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// First http(s) URL found in arbitrary text
pub fn match_url(text: &str) -> Option<String> {
    URL_PATTERN.find(text).map(|m| m.as_str().to_owned())
}

/// True if `text` is a plain decimal number within `start..=end`.
/// Empty strings, signs and anything with ten or more significant digits are
/// rejected; leading zeros are ignored.
pub fn is_number_in_range(text: &str, start: u32, end: u32) -> bool {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let significant = text.trim_start_matches('0');
    if significant.len() >= 10 {
        return false;
    }
    // Only the all-zero string fails to parse here
    let n = significant.parse::<u32>().unwrap_or(0);
    (start..=end).contains(&n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_url_from_surrounding_text() {
        assert_eq!(
            match_url("check this out: https://example.com/x?y=1 thanks").as_deref(),
            Some("https://example.com/x?y=1")
        );
    }

    #[test]
    fn first_url_wins() {
        assert_eq!(
            match_url("http://a.org and https://b.org").as_deref(),
            Some("http://a.org")
        );
    }

    #[test]
    fn trailing_punctuation_is_not_part_of_url() {
        assert_eq!(
            match_url("see https://www.youtube.com/watch.").as_deref(),
            Some("https://www.youtube.com/watch")
        );
    }

    #[test]
    fn no_url_found() {
        assert_eq!(match_url("nothing to see here"), None);
        assert_eq!(match_url("ftp://example.com"), None);
        assert_eq!(match_url(""), None);
    }

    #[test]
    fn number_range_bounds() {
        assert!(is_number_in_range("1", 1, 1_000_000));
        assert!(is_number_in_range("1000000", 1, 1_000_000));
        assert!(!is_number_in_range("0", 1, 1_000_000));
        assert!(!is_number_in_range("1000001", 1, 1_000_000));
    }

    #[test]
    fn number_range_ignores_leading_zeros() {
        assert!(is_number_in_range("0000000500", 1, 1_000_000));
        assert!(is_number_in_range("00000000000001000000", 1, 1_000_000));
        assert!(!is_number_in_range("0000", 1, 1_000_000));
        assert!(is_number_in_range("000", 0, 10));
    }

    #[test]
    fn number_range_rejects_non_numeric() {
        assert!(!is_number_in_range("", 1, 10));
        assert!(!is_number_in_range("+5", 1, 10));
        assert!(!is_number_in_range("5a", 1, 10));
        assert!(!is_number_in_range("9999999999", 1, u32::MAX));
    }
}
