//! Year registry
//!
//! The registry is the union of the years the user registered and the years
//! any transaction falls in, newest first. It gates which year the per-year
//! reports may run for, so it is always recomputed before them.

use std::collections::BTreeSet;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{LedgerConfig, Transaction, Year};

/// Outcome of a successful year removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearRemoval {
    pub config: LedgerConfig,

    /// The removed year was the one on display; the caller should fall
    /// back to its overview
    pub fallback_to_overview: bool,
}

/// Registered years plus years observed in transactions, descending, deduplicated
pub fn active_years(config: &LedgerConfig, transactions: &[Transaction]) -> Vec<Year> {
    let years: BTreeSet<Year> = config
        .active_years
        .iter()
        .copied()
        .chain(transactions.iter().map(Transaction::year))
        .collect();

    years.into_iter().rev().collect()
}

/// Check whether `year` is selectable
pub fn is_active(config: &LedgerConfig, transactions: &[Transaction], year: Year) -> bool {
    config.active_years.contains(&year) || transactions.iter().any(|t| t.is_in_year(year))
}

/// Register a year given as a 4-digit string
///
/// Idempotent: a year already registered leaves the configuration as is.
pub fn add_year(config: &LedgerConfig, input: &str) -> LedgerResult<LedgerConfig> {
    let year = Year::parse(input)?;

    let mut updated = config.clone();
    if !updated.active_years.contains(&year) {
        updated.active_years.push(year);
    }
    Ok(updated)
}

/// Unregister a year
///
/// Fails with `YearNotEmpty` while any transaction falls in it. When
/// `selected` is the removed year the outcome asks the caller to fall back.
pub fn remove_year(
    config: &LedgerConfig,
    transactions: &[Transaction],
    year: Year,
    selected: Option<Year>,
) -> LedgerResult<YearRemoval> {
    let count = transactions.iter().filter(|t| t.is_in_year(year)).count();
    if count > 0 {
        return Err(LedgerError::YearNotEmpty {
            year: year.to_string(),
            count,
        });
    }

    let mut updated = config.clone();
    updated.active_years.retain(|y| *y != year);

    Ok(YearRemoval {
        config: updated,
        fallback_to_overview: selected == Some(year),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId};
    use chrono::NaiveDate;

    fn year(s: &str) -> Year {
        Year::parse(s).unwrap()
    }

    fn config_with_years(years: &[&str]) -> LedgerConfig {
        let mut config = LedgerConfig::with_storage_path("/tmp");
        config.active_years = years.iter().map(|y| year(y)).collect();
        config
    }

    fn txn_on(y: i32, m: u32, d: u32) -> Transaction {
        Transaction::new(
            TransactionId::new(1),
            Money::from_units(1),
            "affitto",
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
    }

    #[test]
    fn test_registry_sorted_descending() {
        let config = config_with_years(&["2024", "2026", "2025"]);
        let years: Vec<String> = active_years(&config, &[])
            .iter()
            .map(|y| y.to_string())
            .collect();
        assert_eq!(years, vec!["2026", "2025", "2024"]);
    }

    #[test]
    fn test_registry_merges_transaction_years() {
        let config = config_with_years(&["2025"]);
        let transactions = vec![txn_on(2023, 6, 1), txn_on(2025, 1, 1), txn_on(2023, 7, 1)];
        let years: Vec<i32> = active_years(&config, &transactions)
            .iter()
            .map(|y| y.value())
            .collect();
        assert_eq!(years, vec![2025, 2023]);
        assert!(is_active(&config, &transactions, year("2023")));
        assert!(!is_active(&config, &transactions, year("2024")));
    }

    #[test]
    fn test_add_year_idempotent() {
        let config = config_with_years(&["2024"]);
        let once = add_year(&config, "2027").unwrap();
        let twice = add_year(&once, "2027").unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice.active_years.len(), 2);
    }

    #[test]
    fn test_add_year_rejects_invalid() {
        let config = config_with_years(&[]);
        for bad in ["27", "20277", "year", "", " 2024", "2024 "] {
            assert!(matches!(
                add_year(&config, bad),
                Err(LedgerError::InvalidFormat(_))
            ));
        }
    }

    #[test]
    fn test_remove_year_blocked_by_data() {
        let config = config_with_years(&["2024", "2025"]);
        let transactions = vec![txn_on(2024, 2, 1)];
        let err = remove_year(&config, &transactions, year("2024"), None).unwrap_err();
        assert!(matches!(err, LedgerError::YearNotEmpty { count: 1, .. }));
    }

    #[test]
    fn test_remove_empty_year() {
        let config = config_with_years(&["2024", "2025"]);
        let transactions = vec![txn_on(2024, 2, 1)];
        let outcome =
            remove_year(&config, &transactions, year("2025"), Some(year("2024"))).unwrap();
        assert_eq!(outcome.config.active_years, vec![year("2024")]);
        assert!(!outcome.fallback_to_overview);
    }

    #[test]
    fn test_remove_selected_year_signals_fallback() {
        let config = config_with_years(&["2024", "2025"]);
        let outcome = remove_year(&config, &[], year("2025"), Some(year("2025"))).unwrap();
        assert!(outcome.fallback_to_overview);
    }
}
