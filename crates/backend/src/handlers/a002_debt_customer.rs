use axum::{extract::Query, Json};
use contracts::domain::a002_debt_customer::aggregate::{DebtCustomerListItemDto, DEBT_CUSTOMER_LIST};
use contracts::shared::list_query::ListResult;

use crate::domain::a002_debt_customer::service;
use crate::shared::api_error::ApiError;
use crate::shared::list_engine::parse_params;

/// GET /api/debt-customers
pub async fn list(
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ListResult<DebtCustomerListItemDto>>, ApiError> {
    let query = parse_params(&DEBT_CUSTOMER_LIST, &params);
    service::list(&query).map(Json)
}
