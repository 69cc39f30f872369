use axum::{extract::Query, Json};
use contracts::domain::a005_prepaid_transaction::aggregate::{PrepaidTransactionListItemDto, PREPAID_TRANSACTION_LIST};
use contracts::shared::list_query::ListResult;

use crate::domain::a005_prepaid_transaction::service;
use crate::shared::api_error::ApiError;
use crate::shared::list_engine::parse_params;

/// GET /api/prepaid-transactions
pub async fn list(
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ListResult<PrepaidTransactionListItemDto>>, ApiError> {
    let query = parse_params(&PREPAID_TRANSACTION_LIST, &params);
    service::list(&query).map(Json)
}
