use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::list_query::ErrorEnvelope;

/// Ошибка API; в ответ уходит `{ "message": ... }` с non-2xx статусом
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Набор данных ещё не загружен")]
    NotReady,
    #[error("Не найдено: {0}")]
    NotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotReady => StatusCode::SERVICE_UNAVAILABLE,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        (status, Json(ErrorEnvelope::new(self.to_string()))).into_response()
    }
}
