use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Как сервер сравнивает числовой фильтр со значением поля записи
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberBound {
    AtLeast,
    AtMost,
    Exact,
}

/// Вариант значения для фильтра-перечисления
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumOption {
    pub code: &'static str,
    pub label: &'static str,
}

/// Тип поля фильтра
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Text,
    Number { bound: NumberBound },
    Boolean,
    /// Период: два параметра запроса, по одному на каждую границу
    DateRange {
        from_param: &'static str,
        to_param: &'static str,
    },
    Enum { options: &'static [EnumOption] },
}

impl FilterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number { .. } => "number",
            Self::Boolean => "boolean",
            Self::DateRange { .. } => "date range",
            Self::Enum { .. } => "enum",
        }
    }
}

/// Описание поля фильтра списочного экрана
///
/// `key` одновременно ключ черновика и имя параметра запроса
/// (для периода параметры берутся из [`FilterKind::DateRange`]).
/// `column` - поле записи, по которому сервер применяет фильтр.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterField {
    pub key: &'static str,
    pub column: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
}

impl FilterField {
    pub const fn text(key: &'static str, column: &'static str, label: &'static str) -> Self {
        Self {
            key,
            column,
            label,
            kind: FilterKind::Text,
        }
    }

    pub const fn number(
        key: &'static str,
        column: &'static str,
        label: &'static str,
        bound: NumberBound,
    ) -> Self {
        Self {
            key,
            column,
            label,
            kind: FilterKind::Number { bound },
        }
    }

    pub const fn boolean(key: &'static str, column: &'static str, label: &'static str) -> Self {
        Self {
            key,
            column,
            label,
            kind: FilterKind::Boolean,
        }
    }

    pub const fn date_range(
        key: &'static str,
        column: &'static str,
        label: &'static str,
        from_param: &'static str,
        to_param: &'static str,
    ) -> Self {
        Self {
            key,
            column,
            label,
            kind: FilterKind::DateRange {
                from_param,
                to_param,
            },
        }
    }

    pub const fn choice(
        key: &'static str,
        column: &'static str,
        label: &'static str,
        options: &'static [EnumOption],
    ) -> Self {
        Self {
            key,
            column,
            label,
            kind: FilterKind::Enum { options },
        }
    }

    /// Пустое значение, соответствующее типу поля
    pub fn empty_value(&self) -> FilterValue {
        FilterValue::empty(&self.kind)
    }
}

/// Граница периода: дата без времени или конкретный момент
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DateBound {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl DateBound {
    /// Разбор ввода `YYYY-MM-DD` или `YYYY-MM-DDTHH:MM[:SS[.fff]]`
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(Self::Date(date));
        }
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(Self::DateTime)
    }

    /// Нижняя граница: дата превращается в начало суток
    pub fn range_start(&self) -> NaiveDateTime {
        match self {
            Self::Date(date) => date.and_time(NaiveTime::MIN),
            Self::DateTime(dt) => *dt,
        }
    }

    /// Верхняя граница: дата превращается в 23:59:59.999 того же дня
    pub fn range_end(&self) -> NaiveDateTime {
        match self {
            Self::Date(date) => {
                let start = date.and_time(NaiveTime::MIN);
                start
                    .checked_add_signed(TimeDelta::milliseconds(86_399_999))
                    .unwrap_or(start)
            }
            Self::DateTime(dt) => *dt,
        }
    }

    /// Значение для поля ввода type="date"
    pub fn input_value(&self) -> String {
        match self {
            Self::Date(date) => date.format("%Y-%m-%d").to_string(),
            Self::DateTime(dt) => dt.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Значение фильтра, типизированное по виду поля
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FilterValue {
    Text(String),
    Number(Option<f64>),
    Boolean(Option<bool>),
    DateRange {
        from: Option<DateBound>,
        to: Option<DateBound>,
    },
    Enum(Option<String>),
}

impl FilterValue {
    pub fn empty(kind: &FilterKind) -> Self {
        match kind {
            FilterKind::Text => Self::Text(String::new()),
            FilterKind::Number { .. } => Self::Number(None),
            FilterKind::Boolean => Self::Boolean(None),
            FilterKind::DateRange { .. } => Self::DateRange {
                from: None,
                to: None,
            },
            FilterKind::Enum { .. } => Self::Enum(None),
        }
    }

    /// Числовой ввод; нечисловая строка означает "фильтр не задан", а не ноль
    pub fn number_input(raw: &str) -> Self {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| if c == ',' { '.' } else { c })
            .collect();
        let parsed = normalized.parse::<f64>().ok().filter(|v| v.is_finite());
        Self::Number(parsed)
    }

    /// Ввод из select: "true" / "false" / пусто
    pub fn boolean_input(raw: &str) -> Self {
        match raw.trim() {
            "true" => Self::Boolean(Some(true)),
            "false" => Self::Boolean(Some(false)),
            _ => Self::Boolean(None),
        }
    }

    pub fn enum_input(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            Self::Enum(None)
        } else {
            Self::Enum(Some(raw.to_string()))
        }
    }

    pub fn date_range_input(from: &str, to: &str) -> Self {
        Self::DateRange {
            from: DateBound::parse(from),
            to: DateBound::parse(to),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(value) => value.is_none(),
            Self::Boolean(value) => value.is_none(),
            Self::DateRange { from, to } => from.is_none() && to.is_none(),
            Self::Enum(value) => value.as_deref().map_or(true, |v| v.trim().is_empty()),
        }
    }

    pub fn matches_kind(&self, kind: &FilterKind) -> bool {
        matches!(
            (self, kind),
            (Self::Text(_), FilterKind::Text)
                | (Self::Number(_), FilterKind::Number { .. })
                | (Self::Boolean(_), FilterKind::Boolean)
                | (Self::DateRange { .. }, FilterKind::DateRange { .. })
                | (Self::Enum(_), FilterKind::Enum { .. })
        )
    }

    /// Строка для поля ввода (черновик в форме фильтра)
    pub fn input_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(value) => value.map(|v| v.to_string()).unwrap_or_default(),
            Self::Boolean(value) => value.map(|v| v.to_string()).unwrap_or_default(),
            Self::DateRange { .. } => String::new(),
            Self::Enum(value) => value.clone().unwrap_or_default(),
        }
    }
}

/// Набор значений фильтров экрана, ключ - [`FilterField::key`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterValues(BTreeMap<String, FilterValue>);

impl FilterValues {
    /// Все поля экрана с пустыми значениями
    pub fn empty_for(fields: &[FilterField]) -> Self {
        Self(
            fields
                .iter()
                .map(|f| (f.key.to_string(), f.empty_value()))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FilterValue) {
        self.0.insert(key.into(), value);
    }

    /// Количество непустых значений (бейдж на панели фильтров)
    pub fn active_count(&self) -> usize {
        self.0.values().filter(|v| !v.is_empty()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}
