use contracts::domain::a001_meter::aggregate::MeterListItemDto;
use contracts::domain::a002_debt_customer::aggregate::DebtCustomerListItemDto;
use contracts::domain::a003_debt_entry::aggregate::DebtEntryListItemDto;
use contracts::domain::a004_refund::aggregate::RefundListItemDto;
use contracts::domain::a005_prepaid_transaction::aggregate::PrepaidTransactionListItemDto;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::Path;

use crate::shared::api_error::ApiError;

/// Встроенный демо-набор
const EMBEDDED_SEED: &str = include_str!("seed.json");

static DATASET: OnceCell<Dataset> = OnceCell::new();

/// Записи всех списков; после загрузки не меняются
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub meters: Vec<MeterListItemDto>,
    #[serde(default)]
    pub debt_customers: Vec<DebtCustomerListItemDto>,
    #[serde(default)]
    pub debt_entries: Vec<DebtEntryListItemDto>,
    #[serde(default)]
    pub refunds: Vec<RefundListItemDto>,
    #[serde(default)]
    pub prepaid_transactions: Vec<PrepaidTransactionListItemDto>,
}

impl Dataset {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_json(EMBEDDED_SEED)
    }

    pub fn total(&self) -> usize {
        self.meters.len()
            + self.debt_customers.len()
            + self.debt_entries.len()
            + self.refunds.len()
            + self.prepaid_transactions.len()
    }
}

/// Загружает набор данных: из файла, если он задан, иначе встроенный
pub fn initialize_dataset(seed_path: Option<&Path>) -> anyhow::Result<()> {
    let dataset = match seed_path {
        Some(path) => {
            tracing::info!("Loading dataset from: {}", path.display());
            let contents = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", path.display()))?;
            Dataset::from_json(&contents)?
        }
        None => {
            tracing::info!("Using embedded demo dataset");
            Dataset::embedded()?
        }
    };

    tracing::info!(
        "Dataset loaded: {} meters, {} debt customers, {} debt entries, {} refunds, {} prepaid transactions",
        dataset.meters.len(),
        dataset.debt_customers.len(),
        dataset.debt_entries.len(),
        dataset.refunds.len(),
        dataset.prepaid_transactions.len()
    );

    DATASET
        .set(dataset)
        .map_err(|_| anyhow::anyhow!("Dataset already initialized"))
}

pub fn get_dataset() -> Result<&'static Dataset, ApiError> {
    DATASET.get().ok_or(ApiError::NotReady)
}
