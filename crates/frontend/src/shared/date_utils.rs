//! Даты в таблицах: DD.MM.YYYY и DD.MM.YYYY HH:MM

use chrono::{DateTime, Utc};

pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y %H:%M").to_string()
}

pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y").to_string()
}

/// Пустая дата показывается прочерком
pub fn format_optional_datetime(value: Option<&DateTime<Utc>>) -> String {
    value.map(format_datetime).unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format() {
        let value = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&value), "15.03.2024 14:02");
        assert_eq!(format_date(&value), "15.03.2024");
        assert_eq!(format_optional_datetime(Some(&value)), "15.03.2024 14:02");
        assert_eq!(format_optional_datetime(None), "—");
    }
}
