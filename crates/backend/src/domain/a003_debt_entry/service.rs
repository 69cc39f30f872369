use contracts::domain::a003_debt_entry::aggregate::{DebtEntryListItemDto, DEBT_ENTRY_LIST};
use contracts::shared::list_query::{ListResult, ParsedQuery};

use crate::shared::api_error::ApiError;
use crate::shared::data::dataset::get_dataset;
use crate::shared::list_engine::{self, FieldValue, ListRecord};

impl ListRecord for DebtEntryListItemDto {
    fn field(&self, column: &str) -> Option<FieldValue<'_>> {
        Some(match column {
            "reference" => FieldValue::Text(&self.reference),
            "account_number" => FieldValue::Text(&self.account_number),
            "description" => FieldValue::Text(&self.description),
            "entry_type" => FieldValue::Text(self.entry_type.code()),
            "amount" => FieldValue::Number(self.amount),
            "created_at" => FieldValue::time(&self.created_at),
            _ => return None,
        })
    }
}

/// Страница истории задолженности
pub fn list(query: &ParsedQuery) -> Result<ListResult<DebtEntryListItemDto>, ApiError> {
    let dataset = get_dataset()?;
    Ok(list_engine::run(&DEBT_ENTRY_LIST, &dataset.debt_entries, query))
}
