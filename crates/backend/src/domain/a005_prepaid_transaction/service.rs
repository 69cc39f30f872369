use contracts::domain::a005_prepaid_transaction::aggregate::{
    PrepaidTransactionListItemDto, PREPAID_TRANSACTION_LIST,
};
use contracts::shared::list_query::{ListResult, ParsedQuery};

use crate::shared::api_error::ApiError;
use crate::shared::data::dataset::get_dataset;
use crate::shared::list_engine::{self, FieldValue, ListRecord};

impl ListRecord for PrepaidTransactionListItemDto {
    fn field(&self, column: &str) -> Option<FieldValue<'_>> {
        Some(match column {
            "reference" => FieldValue::Text(&self.reference),
            "meter_number" => FieldValue::Text(&self.meter_number),
            "customer_name" => FieldValue::Text(&self.customer_name),
            "token" => FieldValue::Text(&self.token),
            "channel" => FieldValue::Text(self.channel.code()),
            "amount" => FieldValue::Number(self.amount),
            "units_kwh" => FieldValue::Number(self.units_kwh),
            "created_at" => FieldValue::time(&self.created_at),
            _ => return None,
        })
    }
}

/// Страница предоплатных транзакций
pub fn list(query: &ParsedQuery) -> Result<ListResult<PrepaidTransactionListItemDto>, ApiError> {
    let dataset = get_dataset()?;
    Ok(list_engine::run(&PREPAID_TRANSACTION_LIST, &dataset.prepaid_transactions, query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::dataset::Dataset;
    use contracts::shared::list_query::QueryRequest;

    #[test]
    fn test_search_by_meter_number() {
        let dataset = Dataset::embedded().unwrap();
        let meter = dataset.prepaid_transactions[0].meter_number.clone();
        let query = QueryRequest::parse(
            &PREPAID_TRANSACTION_LIST,
            [("pageNumber", "1"), ("search", meter.as_str())],
        );
        let result = list_engine::run(
            &PREPAID_TRANSACTION_LIST,
            &dataset.prepaid_transactions,
            &query,
        );
        assert!(result.total_count > 0);
        assert!(result.items.iter().all(|t| t.meter_number == meter));
    }
}
