use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::DebtEntryType;
use crate::shared::list_query::{
    FilterField, ListScreen, NumberBound, SearchPolicy, SortDirection, SortKey,
};

/// Строка истории задолженности (начисления, оплаты, корректировки)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtEntryListItemDto {
    pub id: Uuid,
    pub reference: String,
    pub account_number: String,
    pub description: String,
    pub entry_type: DebtEntryType,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

const FILTERS: &[FilterField] = &[
    FilterField::text("reference", "reference", "Номер документа"),
    FilterField::text("accountNumber", "account_number", "Лицевой счёт"),
    FilterField::choice("entryType", "entry_type", "Вид", DebtEntryType::OPTIONS),
    FilterField::number("minAmount", "amount", "Сумма от", NumberBound::AtLeast),
    FilterField::number("maxAmount", "amount", "Сумма до", NumberBound::AtMost),
    FilterField::date_range("created", "created_at", "Дата", "fromUtc", "toUtc"),
];

const SORT_KEYS: &[SortKey] = &[
    SortKey {
        field: "createdAt",
        column: "created_at",
        label: "Дата",
    },
    SortKey {
        field: "reference",
        column: "reference",
        label: "Номер",
    },
    SortKey {
        field: "amount",
        column: "amount",
        label: "Сумма",
    },
];

pub static DEBT_ENTRY_LIST: ListScreen = ListScreen {
    id: "a003_debt_entry",
    title: "Начисления и оплаты",
    endpoint: "/api/debt-entries",
    filters: FILTERS,
    sort_keys: SORT_KEYS,
    default_sort_field: "createdAt",
    default_sort_direction: SortDirection::Desc,
    search_policy: SearchPolicy::Overrides(&["reference"]),
    search_columns: &["reference", "account_number", "description"],
    default_page_size: 100,
    page_size_options: &[50, 100, 200, 500],
};
