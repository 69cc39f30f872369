use axum::{http::Uri, routing::get, Router};
use contracts::domain::a001_meter::aggregate::METER_LIST;
use contracts::domain::a002_debt_customer::aggregate::DEBT_CUSTOMER_LIST;
use contracts::domain::a003_debt_entry::aggregate::DEBT_ENTRY_LIST;
use contracts::domain::a004_refund::aggregate::REFUND_LIST;
use contracts::domain::a005_prepaid_transaction::aggregate::PREPAID_TRANSACTION_LIST;

use crate::handlers;
use crate::shared::api_error::ApiError;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // LIST ROUTES
        // ========================================
        .route(METER_LIST.endpoint, get(handlers::a001_meter::list))
        .route(DEBT_CUSTOMER_LIST.endpoint, get(handlers::a002_debt_customer::list))
        .route(DEBT_ENTRY_LIST.endpoint, get(handlers::a003_debt_entry::list))
        .route(REFUND_LIST.endpoint, get(handlers::a004_refund::list))
        .route(
            PREPAID_TRANSACTION_LIST.endpoint,
            get(handlers::a005_prepaid_transaction::list),
        )
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
