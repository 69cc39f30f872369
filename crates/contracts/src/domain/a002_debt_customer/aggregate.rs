use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::DebtStatus;
use crate::shared::list_query::{
    FilterField, ListScreen, NumberBound, SearchPolicy, SortDirection, SortKey,
};

/// Строка списка абонентов-должников
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtCustomerListItemDto {
    pub id: Uuid,
    pub account_number: String,
    pub customer_name: String,
    pub status: DebtStatus,
    pub total_debt: f64,
    pub last_payment_at: Option<DateTime<Utc>>,
}

const FILTERS: &[FilterField] = &[
    FilterField::text("accountNumber", "account_number", "Лицевой счёт"),
    FilterField::choice("status", "status", "Статус", DebtStatus::OPTIONS),
    FilterField::number("minDebt", "total_debt", "Долг от", NumberBound::AtLeast),
    FilterField::number("maxDebt", "total_debt", "Долг до", NumberBound::AtMost),
    FilterField::date_range(
        "lastPayment",
        "last_payment_at",
        "Последняя оплата",
        "fromUtc",
        "toUtc",
    ),
];

const SORT_KEYS: &[SortKey] = &[
    SortKey {
        field: "customerName",
        column: "customer_name",
        label: "Абонент",
    },
    SortKey {
        field: "totalDebt",
        column: "total_debt",
        label: "Долг",
    },
    SortKey {
        field: "lastPaymentAt",
        column: "last_payment_at",
        label: "Последняя оплата",
    },
];

pub static DEBT_CUSTOMER_LIST: ListScreen = ListScreen {
    id: "a002_debt_customer",
    title: "Должники",
    endpoint: "/api/debt-customers",
    filters: FILTERS,
    sort_keys: SORT_KEYS,
    default_sort_field: "totalDebt",
    default_sort_direction: SortDirection::Desc,
    search_policy: SearchPolicy::Overrides(&["accountNumber"]),
    search_columns: &["account_number", "customer_name"],
    default_page_size: 50,
    page_size_options: &[25, 50, 100, 200],
};
