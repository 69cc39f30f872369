use contracts::domain::a002_debt_customer::aggregate::{
    DebtCustomerListItemDto, DEBT_CUSTOMER_LIST,
};
use contracts::shared::list_query::{ListResult, ParsedQuery};

use crate::shared::api_error::ApiError;
use crate::shared::data::dataset::get_dataset;
use crate::shared::list_engine::{self, FieldValue, ListRecord};

impl ListRecord for DebtCustomerListItemDto {
    fn field(&self, column: &str) -> Option<FieldValue<'_>> {
        Some(match column {
            "account_number" => FieldValue::Text(&self.account_number),
            "customer_name" => FieldValue::Text(&self.customer_name),
            "status" => FieldValue::Text(self.status.code()),
            "total_debt" => FieldValue::Number(self.total_debt),
            "last_payment_at" => FieldValue::optional_time(self.last_payment_at.as_ref()),
            _ => return None,
        })
    }
}

/// Страница списка должников
pub fn list(query: &ParsedQuery) -> Result<ListResult<DebtCustomerListItemDto>, ApiError> {
    let dataset = get_dataset()?;
    Ok(list_engine::run(&DEBT_CUSTOMER_LIST, &dataset.debt_customers, query))
}
