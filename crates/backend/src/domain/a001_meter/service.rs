use contracts::domain::a001_meter::aggregate::{MeterListItemDto, METER_LIST};
use contracts::shared::list_query::{ListResult, ParsedQuery};

use crate::shared::api_error::ApiError;
use crate::shared::data::dataset::get_dataset;
use crate::shared::list_engine::{self, FieldValue, ListRecord};

impl ListRecord for MeterListItemDto {
    fn field(&self, column: &str) -> Option<FieldValue<'_>> {
        Some(match column {
            "meter_number" => FieldValue::Text(&self.meter_number),
            "customer_name" => FieldValue::Text(&self.customer_name),
            "account_number" => FieldValue::Text(&self.account_number),
            "meter_type" => FieldValue::Text(self.meter_type.code()),
            "is_active" => FieldValue::Bool(self.is_active),
            "is_tampered" => FieldValue::Bool(self.is_tampered),
            "credit_balance" => FieldValue::Number(self.credit_balance),
            "installed_at" => FieldValue::time(&self.installed_at),
            _ => return None,
        })
    }
}

/// Страница списка приборов учёта
pub fn list(query: &ParsedQuery) -> Result<ListResult<MeterListItemDto>, ApiError> {
    let dataset = get_dataset()?;
    Ok(list_engine::run(&METER_LIST, &dataset.meters, query))
}
