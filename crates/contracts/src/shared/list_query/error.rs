use thiserror::Error;

/// Ошибки обращения к контроллеру списка с неизвестными идентификаторами
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListQueryError {
    #[error("Unknown filter field: {0}")]
    UnknownField(String),

    #[error("Filter field {key} expects a {expected} value")]
    KindMismatch { key: String, expected: &'static str },

    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Invalid page size: {0}")]
    InvalidPageSize(usize),
}
