use chrono::{DateTime, NaiveDateTime, Utc};
use std::cmp::Ordering;

/// Значение поля записи, как его видит движок списков
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Bool(bool),
    /// Момент времени (UTC); `None` - не заполнено
    Time(Option<NaiveDateTime>),
}

impl<'a> FieldValue<'a> {
    pub fn time(value: &DateTime<Utc>) -> Self {
        Self::Time(Some(value.naive_utc()))
    }

    pub fn optional_time(value: Option<&DateTime<Utc>>) -> Self {
        Self::Time(value.map(|v| v.naive_utc()))
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Порядок для сортировки. Пустые даты всегда после заполненных.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            (FieldValue::Time(a), FieldValue::Time(b)) => match (a, b) {
                (Some(a), Some(b)) => a.cmp(b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            _ => Ordering::Equal,
        }
    }
}

/// Доступ к полям записи по имени колонки (`FilterField::column`, `SortKey::column`)
pub trait ListRecord {
    fn field(&self, column: &str) -> Option<FieldValue<'_>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_compare_ignores_case() {
        assert_eq!(
            FieldValue::Text("абв").compare(&FieldValue::Text("АБГ")),
            Ordering::Less
        );
    }

    #[test]
    fn test_missing_time_sorts_last() {
        let now = FieldValue::time(&Utc::now());
        assert_eq!(now.compare(&FieldValue::Time(None)), Ordering::Less);
        assert_eq!(FieldValue::Time(None).compare(&now), Ordering::Greater);
    }

    #[test]
    fn test_compare_values_of_different_records() {
        let key = FieldValue::Text("Петров");
        let name = String::from("иванов");
        let borrowed = FieldValue::Text(name.as_str());
        assert_eq!(key.compare(&borrowed), Ordering::Greater);
        assert_eq!(borrowed.compare(&key), Ordering::Less);
        assert_eq!(FieldValue::Number(1.0).compare(&borrowed), Ordering::Equal);
    }
}
