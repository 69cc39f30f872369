use serde::{Deserialize, Serialize};

use crate::shared::list_query::EnumOption;

/// Статус задолженности абонента (коды учётной системы)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebtStatus {
    #[serde(rename = "1")]
    Current,
    #[serde(rename = "2")]
    Overdue,
    #[serde(rename = "3")]
    Disconnected,
    #[serde(rename = "4")]
    Settled,
}

impl DebtStatus {
    pub const OPTIONS: &'static [EnumOption] = &[
        EnumOption {
            code: "1",
            label: "Текущий",
        },
        EnumOption {
            code: "2",
            label: "Просрочен",
        },
        EnumOption {
            code: "3",
            label: "Отключён",
        },
        EnumOption {
            code: "4",
            label: "Погашен",
        },
    ];

    pub fn code(&self) -> &'static str {
        match self {
            DebtStatus::Current => "1",
            DebtStatus::Overdue => "2",
            DebtStatus::Disconnected => "3",
            DebtStatus::Settled => "4",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DebtStatus::Current => "Текущий",
            DebtStatus::Overdue => "Просрочен",
            DebtStatus::Disconnected => "Отключён",
            DebtStatus::Settled => "Погашен",
        }
    }
}
