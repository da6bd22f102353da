use chrono::{DateTime, NaiveDate};

/// Форматирует дату из API (RFC3339 или YYYY-MM-DD) в DD.MM.YYYY.
/// Нераспознанная строка возвращается без изменений
pub fn format_date(value: &str) -> String {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format("%d.%m.%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format("%d.%m.%Y").to_string();
    }
    value.to_string()
}

/// Пустое значение отображается как "-"
pub fn format_optional_date(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => format_date(v),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15T14:02:26Z"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123+03:00"), "15.03.2024");
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("March 2024"), "March 2024");
    }

    #[test]
    fn test_format_optional_date() {
        assert_eq!(format_optional_date(None), "-");
        assert_eq!(format_optional_date(Some("  ")), "-");
        assert_eq!(format_optional_date(Some("2024-01-02")), "02.01.2024");
    }
}
