use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::RefundStatus;
use crate::shared::list_query::{
    FilterField, ListScreen, NumberBound, SearchPolicy, SortDirection, SortKey,
};

/// Строка списка заявок на возврат
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundListItemDto {
    pub id: Uuid,
    pub reference: String,
    pub customer_name: String,
    pub meter_number: String,
    pub amount: f64,
    pub status: RefundStatus,
    pub requested_at: DateTime<Utc>,
}

const FILTERS: &[FilterField] = &[
    FilterField::text("reference", "reference", "Номер заявки"),
    FilterField::text("meterNumber", "meter_number", "Номер счётчика"),
    FilterField::choice("status", "status", "Статус", RefundStatus::OPTIONS),
    FilterField::number("minAmount", "amount", "Сумма от", NumberBound::AtLeast),
    FilterField::date_range("requested", "requested_at", "Дата заявки", "fromUtc", "toUtc"),
];

const SORT_KEYS: &[SortKey] = &[
    SortKey {
        field: "requestedAt",
        column: "requested_at",
        label: "Дата заявки",
    },
    SortKey {
        field: "customerName",
        column: "customer_name",
        label: "Абонент",
    },
    SortKey {
        field: "amount",
        column: "amount",
        label: "Сумма",
    },
];

/// Поиск по имени абонента на этом экране сочетается с фильтром по номеру заявки
pub static REFUND_LIST: ListScreen = ListScreen {
    id: "a004_refund",
    title: "Возвраты",
    endpoint: "/api/refunds",
    filters: FILTERS,
    sort_keys: SORT_KEYS,
    default_sort_field: "requestedAt",
    default_sort_direction: SortDirection::Desc,
    search_policy: SearchPolicy::Combined,
    search_columns: &["customer_name", "meter_number"],
    default_page_size: 50,
    page_size_options: &[25, 50, 100],
};
