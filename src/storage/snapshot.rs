//! Persisted snapshot schema
//!
//! The on-disk and import/export representation of a ledger. Field names
//! are fixed by existing data files and kept exactly as they appear there;
//! the rest of the crate only sees the domain types, translated here.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Category, FlowType, Ledger, LedgerConfig, Money, Transaction, TransactionId, Year,
};

/// Date format used on the wire
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// A money amount as found on the wire
///
/// Older files store the baseline balance as the raw text the user typed,
/// so both JSON numbers and numeric strings are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireAmount {
    Number(f64),
    Text(String),
}

impl WireAmount {
    fn to_money(&self, field: &str) -> LedgerResult<Money> {
        let parsed = match self {
            Self::Number(n) => Money::try_from_f64(*n),
            Self::Text(s) => Money::parse(s),
        };
        parsed.map_err(|e| LedgerError::Import(format!("{}: {}", field, e)))
    }
}

impl From<Money> for WireAmount {
    fn from(amount: Money) -> Self {
        Self::Number(amount.to_f64())
    }
}

/// One taxonomy entry on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireCategory {
    pub nome: String,
    /// Absent or empty means Expense
    #[serde(default)]
    pub tipo: Option<String>,
}

/// Ledger configuration on the wire
///
/// Every field is optional; missing ones take the fresh-ledger default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireConfig {
    #[serde(default, alias = "saldoStatoZero", skip_serializing_if = "Option::is_none")]
    pub baseline_balance: Option<WireAmount>,

    #[serde(default, alias = "dataStatoZero", skip_serializing_if = "Option::is_none")]
    pub baseline_date: Option<String>,

    #[serde(default, alias = "coloreTema", skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,

    #[serde(default, alias = "percorsoSalvataggio", skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<String>,

    #[serde(default, alias = "categorie", skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<WireCategory>>,

    #[serde(default, rename = "anniAttivi", skip_serializing_if = "Option::is_none")]
    pub active_years: Option<Vec<String>>,
}

/// One transaction on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireTransaction {
    pub id: i64,
    pub importo: WireAmount,
    pub categoria: String,
    pub data: String,
    #[serde(default)]
    pub nota: String,
    #[serde(default)]
    pub allegato: Option<String>,
}

/// A complete snapshot: `{config, spese}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireSnapshot {
    pub config: WireConfig,
    pub spese: Vec<WireTransaction>,
}

fn parse_date(field: &str, value: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), WIRE_DATE_FORMAT).map_err(|_| {
        LedgerError::Import(format!(
            "{}: invalid date '{}' (expected YYYY-MM-DD)",
            field, value
        ))
    })
}

impl WireCategory {
    fn from_category(category: &Category) -> Self {
        Self {
            nome: category.name.clone(),
            tipo: Some(category.flow_type.wire_name().to_string()),
        }
    }

    fn to_category(&self) -> LedgerResult<Category> {
        let flow_type = match self.tipo.as_deref().map(str::trim) {
            None | Some("") => FlowType::Expense,
            Some(tipo) => tipo.parse().map_err(|e| {
                LedgerError::Import(format!("category '{}': {}", self.nome, e))
            })?,
        };
        Ok(Category::new(&self.nome, flow_type))
    }
}

impl WireConfig {
    /// Wire form of a configuration, every field present
    pub fn from_config(config: &LedgerConfig) -> Self {
        Self {
            baseline_balance: Some(config.baseline_balance.into()),
            baseline_date: Some(config.baseline_date.format(WIRE_DATE_FORMAT).to_string()),
            theme_color: Some(config.theme_color.clone()),
            storage_path: Some(config.storage_path.clone()),
            categories: Some(
                config
                    .categories
                    .iter()
                    .map(WireCategory::from_category)
                    .collect(),
            ),
            active_years: Some(config.active_years.iter().map(|y| y.to_string()).collect()),
        }
    }

    /// Translate into a validated configuration
    ///
    /// Missing fields, and an empty storage path, fall back to the defaults
    /// of a fresh ledger stored under `default_storage_path`.
    pub fn into_config(self, default_storage_path: &str) -> LedgerResult<LedgerConfig> {
        let mut config = LedgerConfig::with_storage_path(default_storage_path);

        match self.baseline_balance {
            Some(WireAmount::Text(ref s)) if s.trim().is_empty() => {}
            Some(amount) => config.baseline_balance = amount.to_money("baselineBalance")?,
            None => {}
        }

        if let Some(date) = self.baseline_date {
            config.baseline_date = parse_date("baselineDate", &date)?;
        }

        if let Some(color) = self.theme_color.filter(|c| !c.trim().is_empty()) {
            config.theme_color = color;
        }

        if let Some(path) = self.storage_path.filter(|p| !p.trim().is_empty()) {
            config.storage_path = path;
        }

        if let Some(categories) = self.categories {
            let mut seen = HashSet::new();
            let mut taxonomy = Vec::with_capacity(categories.len());
            for wire in &categories {
                let category = wire.to_category()?;
                if category.name.is_empty() {
                    return Err(LedgerError::Import("category with an empty name".into()));
                }
                if !seen.insert(category.name.clone()) {
                    return Err(LedgerError::Import(format!(
                        "duplicate category '{}'",
                        category.name
                    )));
                }
                taxonomy.push(category);
            }
            config.categories = taxonomy;
        }

        if let Some(years) = self.active_years {
            let mut registry: Vec<Year> = Vec::with_capacity(years.len());
            for raw in &years {
                let year = Year::parse(raw.trim())
                    .map_err(|e| LedgerError::Import(format!("anniAttivi: {}", e)))?;
                if !registry.contains(&year) {
                    registry.push(year);
                }
            }
            config.active_years = registry;
        }

        Ok(config)
    }
}

impl WireTransaction {
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            id: transaction.id.value(),
            importo: transaction.amount.into(),
            categoria: transaction.category.clone(),
            data: transaction.date.format(WIRE_DATE_FORMAT).to_string(),
            nota: transaction.note.clone(),
            allegato: transaction.attachment.clone(),
        }
    }

    /// Translate into a transaction, keeping the category name as stored
    pub fn into_transaction(self) -> LedgerResult<Transaction> {
        let field = format!("transaction {}", self.id);
        let amount = self.importo.to_money(&field)?;
        let date = parse_date(&field, &self.data)?;

        let mut transaction =
            Transaction::new(TransactionId::new(self.id), amount, self.categoria, date)
                .with_note(self.nota);
        if let Some(attachment) = self.allegato.filter(|a| !a.trim().is_empty()) {
            transaction = transaction.with_attachment(attachment);
        }
        Ok(transaction)
    }
}

/// Wire form of a transaction log
pub fn transactions_to_wire(transactions: &[Transaction]) -> Vec<WireTransaction> {
    transactions
        .iter()
        .map(WireTransaction::from_transaction)
        .collect()
}

/// Translate a transaction log, failing on the first invalid record
pub fn transactions_from_wire(wire: Vec<WireTransaction>) -> LedgerResult<Vec<Transaction>> {
    wire.into_iter()
        .map(WireTransaction::into_transaction)
        .collect()
}

impl WireSnapshot {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            config: WireConfig::from_config(&ledger.config),
            spese: transactions_to_wire(&ledger.transactions),
        }
    }

    /// Translate into a ledger; nothing is returned unless every record is valid
    pub fn into_ledger(self, default_storage_path: &str) -> LedgerResult<Ledger> {
        let config = self.config.into_config(default_storage_path)?;
        let transactions = transactions_from_wire(self.spese)?;
        Ok(Ledger::new(config, transactions))
    }
}
