use serde::{Deserialize, Serialize};

use crate::shared::list_query::EnumOption;

/// Канал продажи предоплатного токена
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentChannel {
    Vendor,
    Mobile,
    Bank,
}

impl PaymentChannel {
    pub const OPTIONS: &'static [EnumOption] = &[
        EnumOption {
            code: "vendor",
            label: "Пункт продаж",
        },
        EnumOption {
            code: "mobile",
            label: "Мобильный платёж",
        },
        EnumOption {
            code: "bank",
            label: "Банк",
        },
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PaymentChannel::Vendor => "vendor",
            PaymentChannel::Mobile => "mobile",
            PaymentChannel::Bank => "bank",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentChannel::Vendor => "Пункт продаж",
            PaymentChannel::Mobile => "Мобильный платёж",
            PaymentChannel::Bank => "Банк",
        }
    }
}
