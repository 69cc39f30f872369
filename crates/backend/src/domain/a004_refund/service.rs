use contracts::domain::a004_refund::aggregate::{RefundListItemDto, REFUND_LIST};
use contracts::shared::list_query::{ListResult, ParsedQuery};

use crate::shared::api_error::ApiError;
use crate::shared::data::dataset::get_dataset;
use crate::shared::list_engine::{self, FieldValue, ListRecord};

impl ListRecord for RefundListItemDto {
    fn field(&self, column: &str) -> Option<FieldValue<'_>> {
        Some(match column {
            "reference" => FieldValue::Text(&self.reference),
            "customer_name" => FieldValue::Text(&self.customer_name),
            "meter_number" => FieldValue::Text(&self.meter_number),
            "amount" => FieldValue::Number(self.amount),
            "status" => FieldValue::Text(self.status.code()),
            "requested_at" => FieldValue::time(&self.requested_at),
            _ => return None,
        })
    }
}

/// Страница заявок на возврат
pub fn list(query: &ParsedQuery) -> Result<ListResult<RefundListItemDto>, ApiError> {
    let dataset = get_dataset()?;
    Ok(list_engine::run(&REFUND_LIST, &dataset.refunds, query))
}
