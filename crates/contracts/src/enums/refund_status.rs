use serde::{Deserialize, Serialize};

use crate::shared::list_query::EnumOption;

/// Статус заявки на возврат
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefundStatus {
    Pending,
    Approved,
    Rejected,
    Paid,
}

impl RefundStatus {
    pub const OPTIONS: &'static [EnumOption] = &[
        EnumOption {
            code: "pending",
            label: "На рассмотрении",
        },
        EnumOption {
            code: "approved",
            label: "Одобрен",
        },
        EnumOption {
            code: "rejected",
            label: "Отклонён",
        },
        EnumOption {
            code: "paid",
            label: "Выплачен",
        },
    ];

    pub fn code(&self) -> &'static str {
        match self {
            RefundStatus::Pending => "pending",
            RefundStatus::Approved => "approved",
            RefundStatus::Rejected => "rejected",
            RefundStatus::Paid => "paid",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RefundStatus::Pending => "На рассмотрении",
            RefundStatus::Approved => "Одобрен",
            RefundStatus::Rejected => "Отклонён",
            RefundStatus::Paid => "Выплачен",
        }
    }
}
