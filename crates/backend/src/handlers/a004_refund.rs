use axum::{extract::Query, Json};
use contracts::domain::a004_refund::aggregate::{RefundListItemDto, REFUND_LIST};
use contracts::shared::list_query::ListResult;

use crate::domain::a004_refund::service;
use crate::shared::api_error::ApiError;
use crate::shared::list_engine::parse_params;

/// GET /api/refunds
pub async fn list(
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ListResult<RefundListItemDto>>, ApiError> {
    let query = parse_params(&REFUND_LIST, &params);
    service::list(&query).map(Json)
}
