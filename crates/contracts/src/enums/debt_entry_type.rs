use serde::{Deserialize, Serialize};

use crate::shared::list_query::EnumOption;

/// Вид записи в истории задолженности
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtEntryType {
    Charge,
    Payment,
    Adjustment,
}

impl DebtEntryType {
    pub const OPTIONS: &'static [EnumOption] = &[
        EnumOption {
            code: "charge",
            label: "Начисление",
        },
        EnumOption {
            code: "payment",
            label: "Оплата",
        },
        EnumOption {
            code: "adjustment",
            label: "Корректировка",
        },
    ];

    pub fn code(&self) -> &'static str {
        match self {
            DebtEntryType::Charge => "charge",
            DebtEntryType::Payment => "payment",
            DebtEntryType::Adjustment => "adjustment",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DebtEntryType::Charge => "Начисление",
            DebtEntryType::Payment => "Оплата",
            DebtEntryType::Adjustment => "Корректировка",
        }
    }
}
