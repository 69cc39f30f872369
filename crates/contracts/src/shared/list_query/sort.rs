use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Ключ сортировки, разрешённый на экране
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    /// Имя в запросе (`sortBy`)
    pub field: &'static str,
    /// Поле записи на сервере
    pub column: &'static str,
    pub label: &'static str,
}

/// Активная сортировка. Поле и направление меняются только вместе.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Клик по заголовку колонки: та же колонка - смена направления,
    /// другая колонка - сортировка по возрастанию
    pub fn toggle(current: Option<&SortSpec>, field: &str) -> SortSpec {
        match current {
            Some(spec) if spec.field == field => {
                SortSpec::new(field, spec.direction.reversed())
            }
            _ => SortSpec::asc(field),
        }
    }

    /// Индикатор сортировки для заголовка колонки
    pub fn indicator(current: Option<&SortSpec>, field: &str) -> &'static str {
        match current {
            Some(spec) if spec.field == field => match spec.direction {
                SortDirection::Asc => " ▲",
                SortDirection::Desc => " ▼",
            },
            _ => " ⇅",
        }
    }
}
