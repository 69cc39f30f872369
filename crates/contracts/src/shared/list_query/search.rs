/// Минимальная длина поискового запроса (в символах, после trim)
pub const MIN_SEARCH_LEN: usize = 3;

/// Что делать с введённой строкой поиска
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchInput {
    /// Поле очищено - поиск снимается
    Clear,
    /// Достаточно символов - запрос уходит на сервер
    Commit(String),
    /// 1-2 символа - запоминаем, но не запрашиваем
    Pending,
}

impl SearchInput {
    pub fn classify(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.chars().count() {
            0 => Self::Clear,
            n if n >= MIN_SEARCH_LEN => Self::Commit(trimmed.to_string()),
            _ => Self::Pending,
        }
    }

    /// Значение, которое станет активным поиском (None для Pending)
    pub fn committed(&self) -> Option<&str> {
        match self {
            Self::Clear => Some(""),
            Self::Commit(term) => Some(term),
            Self::Pending => None,
        }
    }
}

/// Как поиск сочетается с полевыми фильтрами экрана
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPolicy {
    /// Поиск и фильтры применяются вместе
    Combined,
    /// Непустой поиск заменяет перечисленные фильтры (номер, имя и т.п.)
    Overrides(&'static [&'static str]),
}

impl SearchPolicy {
    pub fn suppresses(&self, key: &str) -> bool {
        match self {
            Self::Combined => false,
            Self::Overrides(keys) => keys.contains(&key),
        }
    }
}
