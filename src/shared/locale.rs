//! Indonesian (id-ID) date labels for archive display and export.

use chrono::{DateTime, FixedOffset, Locale, NaiveDate};

const LOCALE: Locale = Locale::id_ID;

/// "Jumat, 03 Mei 2024"
pub fn full_date_label(date: NaiveDate) -> String {
    date.format_localized("%A, %d %B %Y", LOCALE).to_string()
}

/// "03 Mei 2024"
pub fn compact_date_label(date: NaiveDate) -> String {
    date.format_localized("%d %b %Y", LOCALE).to_string()
}

/// "03 Mei 2024 15.30.00", rendered in the offset carried by `at`
pub fn timestamp_label(at: DateTime<FixedOffset>) -> String {
    at.format_localized("%d %B %Y %H.%M.%S", LOCALE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_full_date_label() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
        assert_eq!(full_date_label(date), "Jumat, 03 Mei 2024");

        let date = NaiveDate::from_ymd_opt(2024, 8, 17).unwrap();
        assert_eq!(full_date_label(date), "Sabtu, 17 Agustus 2024");

        let date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        assert_eq!(full_date_label(date), "Minggu, 01 September 2024");
    }

    #[test]
    fn test_compact_date_label() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 6).unwrap();
        assert_eq!(compact_date_label(date), "06 Des 2024");

        let date = NaiveDate::from_ymd_opt(2024, 8, 2).unwrap();
        assert_eq!(compact_date_label(date), "02 Agu 2024");
    }

    #[test]
    fn test_timestamp_label_uses_given_offset() {
        let jakarta = FixedOffset::east_opt(7 * 3600).unwrap();
        let at = chrono::Utc
            .with_ymd_and_hms(2024, 5, 3, 8, 30, 5)
            .unwrap()
            .with_timezone(&jakarta);

        assert_eq!(timestamp_label(at), "03 Mei 2024 15.30.05");
    }
}
