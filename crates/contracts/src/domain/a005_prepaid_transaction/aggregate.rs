use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::PaymentChannel;
use crate::shared::list_query::{
    FilterField, ListScreen, NumberBound, SearchPolicy, SortDirection, SortKey,
};

/// Строка списка продаж предоплатных токенов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepaidTransactionListItemDto {
    pub id: Uuid,
    pub reference: String,
    pub meter_number: String,
    pub customer_name: String,
    pub amount: f64,
    pub units_kwh: f64,
    pub token: String,
    pub channel: PaymentChannel,
    pub created_at: DateTime<Utc>,
}

const FILTERS: &[FilterField] = &[
    FilterField::text("reference", "reference", "Номер транзакции"),
    FilterField::text("meterNumber", "meter_number", "Номер счётчика"),
    FilterField::choice("channel", "channel", "Канал", PaymentChannel::OPTIONS),
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
        field: "amount",
        column: "amount",
        label: "Сумма",
    },
    SortKey {
        field: "unitsKwh",
        column: "units_kwh",
        label: "кВт·ч",
    },
];

pub static PREPAID_TRANSACTION_LIST: ListScreen = ListScreen {
    id: "a005_prepaid_transaction",
    title: "Предоплатные транзакции",
    endpoint: "/api/prepaid-transactions",
    filters: FILTERS,
    sort_keys: SORT_KEYS,
    default_sort_field: "createdAt",
    default_sort_direction: SortDirection::Desc,
    search_policy: SearchPolicy::Overrides(&["reference", "meterNumber"]),
    search_columns: &["reference", "meter_number", "customer_name", "token"],
    default_page_size: 100,
    page_size_options: &[50, 100, 200, 500],
};
