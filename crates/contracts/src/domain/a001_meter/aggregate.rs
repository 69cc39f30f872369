use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::MeterType;
use crate::shared::list_query::{
    FilterField, ListScreen, NumberBound, SearchPolicy, SortDirection, SortKey,
};

/// Строка списка приборов учёта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterListItemDto {
    pub id: Uuid,
    pub meter_number: String,
    pub customer_name: String,
    pub account_number: String,
    pub meter_type: MeterType,
    pub is_active: bool,
    /// Зафиксировано вскрытие / вмешательство
    pub is_tampered: bool,
    /// Остаток кредита на предоплатном счётчике, кВт·ч
    pub credit_balance: f64,
    pub installed_at: DateTime<Utc>,
}

const FILTERS: &[FilterField] = &[
    FilterField::text("meterNumber", "meter_number", "Номер счётчика"),
    FilterField::choice("meterType", "meter_type", "Тип", MeterType::OPTIONS),
    FilterField::boolean("isMeterActive", "is_active", "Активен"),
    FilterField::boolean("isTampered", "is_tampered", "Вскрытие"),
    FilterField::number("minCredit", "credit_balance", "Кредит от", NumberBound::AtLeast),
    FilterField::date_range("installed", "installed_at", "Дата установки", "fromUtc", "toUtc"),
];

const SORT_KEYS: &[SortKey] = &[
    SortKey {
        field: "meterNumber",
        column: "meter_number",
        label: "Номер",
    },
    SortKey {
        field: "customerName",
        column: "customer_name",
        label: "Абонент",
    },
    SortKey {
        field: "creditBalance",
        column: "credit_balance",
        label: "Кредит",
    },
    SortKey {
        field: "installedAt",
        column: "installed_at",
        label: "Установлен",
    },
];

pub static METER_LIST: ListScreen = ListScreen {
    id: "a001_meter",
    title: "Приборы учёта",
    endpoint: "/api/meters",
    filters: FILTERS,
    sort_keys: SORT_KEYS,
    default_sort_field: "installedAt",
    default_sort_direction: SortDirection::Desc,
    search_policy: SearchPolicy::Overrides(&["meterNumber"]),
    search_columns: &["meter_number", "customer_name", "account_number"],
    default_page_size: 50,
    page_size_options: &[25, 50, 100, 200],
};
