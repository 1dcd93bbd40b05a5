//! Current Balance
//!
//! Liquidity today: the baseline balance plus the signed effect of every
//! transaction dated on or after the baseline date. Neutral categories
//! contribute nothing; transactions whose category no longer exists are
//! excluded outright.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{FlowType, Ledger, LedgerConfig, Money, Transaction, TransactionId};
use crate::services::taxonomy::find_category;

use super::signed_effect;

/// Current balance of the ledger
pub fn current_balance(config: &LedgerConfig, transactions: &[Transaction]) -> Money {
    let counted = transactions
        .iter()
        .filter(|t| t.date >= config.baseline_date)
        .filter_map(|t| signed_effect(&config.categories, t));

    config.baseline_balance + counted.sum::<Money>()
}

/// A transaction left out of the balance because its category is gone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingEntry {
    pub transaction_id: TransactionId,
    pub category: String,
    pub amount: Money,
}

/// Balance Report
#[derive(Debug, Clone)]
pub struct BalanceReport {
    pub baseline_balance: Money,
    pub baseline_date: NaiveDate,
    /// Current balance
    pub balance: Money,
    /// Transactions on or after the baseline date that moved the balance
    pub counted: usize,
    /// Transactions dated before the baseline
    pub before_baseline: usize,
    /// Transactions filed under a Neutral category
    pub neutral: usize,
    pub dangling: Vec<DanglingEntry>,
}

impl BalanceReport {
    /// Generate a balance report
    pub fn generate(ledger: &Ledger) -> Self {
        let config = &ledger.config;
        let mut counted = 0;
        let mut before_baseline = 0;
        let mut neutral = 0;
        let mut dangling = Vec::new();

        for txn in &ledger.transactions {
            if txn.date < config.baseline_date {
                before_baseline += 1;
                continue;
            }
            match find_category(&config.categories, &txn.category) {
                None => dangling.push(DanglingEntry {
                    transaction_id: txn.id,
                    category: txn.category.clone(),
                    amount: txn.amount,
                }),
                Some(c) if c.flow_type == FlowType::Neutral => neutral += 1,
                Some(_) => counted += 1,
            }
        }

        let balance = current_balance(config, &ledger.transactions);
        debug!(
            %balance,
            counted,
            before_baseline,
            neutral,
            dangling = dangling.len(),
            "computed balance"
        );

        Self {
            baseline_balance: config.baseline_balance,
            baseline_date: config.baseline_date,
            balance,
            counted,
            before_baseline,
            neutral,
            dangling,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Current Liquidity (neutral excluded)\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:>20}\n",
            self.balance.format_with_symbol(currency_symbol)
        ));
        output.push('\n');
        output.push_str(&format!(
            "Baseline:        {} on {}\n",
            self.baseline_balance.format_with_symbol(currency_symbol),
            self.baseline_date
        ));
        output.push_str(&format!("Counted:         {}\n", self.counted));
        output.push_str(&format!("Neutral:         {}\n", self.neutral));
        output.push_str(&format!("Before baseline: {}\n", self.before_baseline));

        if !self.dangling.is_empty() {
            output.push('\n');
            output.push_str(&format!(
                "{} transaction(s) reference a removed category and are excluded:\n",
                self.dangling.len()
            ));
            for entry in &self.dangling {
                output.push_str(&format!(
                    "  #{} '{}' {}\n",
                    entry.transaction_id,
                    entry.category,
                    entry.amount.format_with_symbol(currency_symbol)
                ));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn config() -> LedgerConfig {
        let mut config = LedgerConfig::with_storage_path("/tmp");
        config.baseline_balance = Money::from_units(10_000);
        config.baseline_date = date("2024-01-01");
        config.categories = vec![
            Category::new("stipendio", FlowType::Income),
            Category::new("affitto", FlowType::Expense),
            Category::new("documenti", FlowType::Neutral),
        ];
        config
    }

    fn txn(id: i64, units: i64, category: &str, on: &str) -> Transaction {
        Transaction::new(TransactionId::new(id), Money::from_units(units), category, date(on))
    }

    fn scenario() -> Vec<Transaction> {
        vec![
            txn(1, 2000, "stipendio", "2024-02-01"),
            txn(2, 800, "affitto", "2024-03-01"),
        ]
    }

    #[test]
    fn test_end_to_end_balance() {
        assert_eq!(current_balance(&config(), &scenario()), Money::from_units(11_200));
    }

    #[test]
    fn test_before_baseline_excluded() {
        let mut transactions = scenario();
        transactions.push(txn(3, 500, "stipendio", "2023-12-31"));
        transactions.push(txn(4, 500, "affitto", "2023-06-01"));
        assert_eq!(current_balance(&config(), &transactions), Money::from_units(11_200));
    }

    #[test]
    fn test_baseline_day_is_included() {
        let transactions = vec![txn(1, 100, "stipendio", "2024-01-01")];
        assert_eq!(current_balance(&config(), &transactions), Money::from_units(10_100));
    }

    #[test]
    fn test_neutral_never_moves_balance() {
        let mut transactions = scenario();
        transactions.push(txn(3, 99_999, "documenti", "2024-05-01"));
        assert_eq!(current_balance(&config(), &transactions), Money::from_units(11_200));
    }

    #[test]
    fn test_dangling_reference_excluded() {
        let mut transactions = scenario();
        transactions.push(txn(3, 300, "palestra", "2024-05-01"));
        assert_eq!(current_balance(&config(), &transactions), Money::from_units(11_200));

        let ledger = Ledger::new(config(), transactions);
        let report = BalanceReport::generate(&ledger);
        assert_eq!(report.dangling.len(), 1);
        assert_eq!(report.dangling[0].category, "palestra");
        assert_eq!(report.neutral, 0);
    }

    #[test]
    fn test_removed_category_becomes_dangling() {
        let mut config = config();
        config.categories.retain(|c| c.name != "affitto");
        let ledger = Ledger::new(config, scenario());

        let report = BalanceReport::generate(&ledger);
        assert_eq!(report.balance, Money::from_units(12_000));
        assert_eq!(report.counted, 1);
        assert_eq!(report.dangling.len(), 1);
    }

    #[test]
    fn test_report_counts() {
        let mut transactions = scenario();
        transactions.push(txn(3, 1, "documenti", "2024-05-01"));
        transactions.push(txn(4, 1, "affitto", "2023-05-01"));
        let report = BalanceReport::generate(&Ledger::new(config(), transactions));

        assert_eq!(report.counted, 2);
        assert_eq!(report.neutral, 1);
        assert_eq!(report.before_baseline, 1);
        assert!(report.format_terminal("€").contains("€ 11200.00"));
    }
}
