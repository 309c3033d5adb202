use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for archive date labels used in query parameters
    /// Must be a zero-padded calendar date
    /// - Valid: "2024-05-03", "2024-12-31"
    /// - Invalid: "2024-5-3", "03-05-2024", "2024/05/03", "2024-05-03T00:00"
    pub static ref ARCHIVE_DATE_REGEX: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_date_regex_valid() {
        assert!(ARCHIVE_DATE_REGEX.is_match("2024-05-03"));
        assert!(ARCHIVE_DATE_REGEX.is_match("2024-12-31"));
        assert!(ARCHIVE_DATE_REGEX.is_match("1999-01-01"));
    }

    #[test]
    fn test_archive_date_regex_invalid() {
        assert!(!ARCHIVE_DATE_REGEX.is_match("2024-5-3")); // not zero-padded
        assert!(!ARCHIVE_DATE_REGEX.is_match("03-05-2024")); // day first
        assert!(!ARCHIVE_DATE_REGEX.is_match("2024/05/03")); // slashes
        assert!(!ARCHIVE_DATE_REGEX.is_match("2024-05-03T00:00")); // trailing time
        assert!(!ARCHIVE_DATE_REGEX.is_match(" 2024-05-03")); // leading space
        assert!(!ARCHIVE_DATE_REGEX.is_match("")); // empty
    }
}
