use serde::{Deserialize, Serialize};

use crate::shared::list_query::EnumOption;

/// Тип прибора учёта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeterType {
    Prepaid,
    Postpaid,
}

impl MeterType {
    pub const OPTIONS: &'static [EnumOption] = &[
        EnumOption {
            code: "prepaid",
            label: "Предоплатный",
        },
        EnumOption {
            code: "postpaid",
            label: "Постоплатный",
        },
    ];

    /// Получить код типа
    pub fn code(&self) -> &'static str {
        match self {
            MeterType::Prepaid => "prepaid",
            MeterType::Postpaid => "postpaid",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            MeterType::Prepaid => "Предоплатный",
            MeterType::Postpaid => "Постоплатный",
        }
    }
}
