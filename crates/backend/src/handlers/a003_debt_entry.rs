use axum::{extract::Query, Json};
use contracts::domain::a003_debt_entry::aggregate::{DebtEntryListItemDto, DEBT_ENTRY_LIST};
use contracts::shared::list_query::ListResult;

use crate::domain::a003_debt_entry::service;
use crate::shared::api_error::ApiError;
use crate::shared::list_engine::parse_params;

/// GET /api/debt-entries
pub async fn list(
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ListResult<DebtEntryListItemDto>>, ApiError> {
    let query = parse_params(&DEBT_ENTRY_LIST, &params);
    service::list(&query).map(Json)
}
