use axum::{extract::Query, Json};
use contracts::domain::a001_meter::aggregate::{MeterListItemDto, METER_LIST};
use contracts::shared::list_query::ListResult;

use crate::domain::a001_meter::service;
use crate::shared::api_error::ApiError;
use crate::shared::list_engine::parse_params;

/// GET /api/meters
pub async fn list(
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ListResult<MeterListItemDto>>, ApiError> {
    let query = parse_params(&METER_LIST, &params);
    service::list(&query).map(Json)
}
