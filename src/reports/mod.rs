//! Reports module for FinanceLab
//!
//! The derived views of a ledger snapshot: current balance, the monthly
//! cumulative net-worth series and the per-category monthly comparison.
//! All of them are pure functions of the snapshot they are given.

pub mod balance;
pub mod category_comparison;
pub mod net_worth;

pub use balance::{current_balance, BalanceReport};
pub use category_comparison::{CategoryComparisonReport, ComparisonPoint};
pub use net_worth::{MonthlyNetWorthReport, NetWorthPoint};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{Category, FlowType, Money, Transaction};
use crate::services::taxonomy::find_category;

/// Month labels in calendar order
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTH_LABELS_IT: [&str; 12] = [
    "Gen", "Feb", "Mar", "Apr", "Mag", "Giu", "Lug", "Ago", "Set", "Ott", "Nov", "Dic",
];

/// Language used for month labels in terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MonthLabels {
    #[default]
    English,
    Italian,
}

impl MonthLabels {
    /// Label for a 1-based month number
    pub fn label(self, month: u32) -> &'static str {
        let labels = match self {
            Self::English => &MONTH_LABELS,
            Self::Italian => &MONTH_LABELS_IT,
        };
        month
            .checked_sub(1)
            .and_then(|i| labels.get(i as usize))
            .copied()
            .unwrap_or("?")
    }
}

/// Signed balance effect of one transaction
///
/// `None` when the category does not resolve: the transaction is excluded,
/// which is distinct from a Neutral category's `Some(zero)`.
pub fn signed_effect(categories: &[Category], transaction: &Transaction) -> Option<Money> {
    let Some(category) = find_category(categories, &transaction.category) else {
        warn!(
            id = %transaction.id,
            category = %transaction.category,
            "excluding transaction with dangling category reference"
        );
        return None;
    };

    Some(match category.flow_type {
        FlowType::Income => transaction.amount,
        FlowType::Expense => -transaction.amount,
        FlowType::Neutral => Money::zero(),
    })
}

/// Sum of the signed effects of `transactions`, skipping dangling references
pub fn signed_total<'a, I>(categories: &[Category], transactions: I) -> Money
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter_map(|t| signed_effect(categories, t))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionId;
    use chrono::NaiveDate;

    fn txn(category: &str, units: i64) -> Transaction {
        Transaction::new(
            TransactionId::new(1),
            Money::from_units(units),
            category,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    fn categories() -> Vec<Category> {
        vec![
            Category::new("stipendio", FlowType::Income),
            Category::new("affitto", FlowType::Expense),
            Category::new("documenti", FlowType::Neutral),
        ]
    }

    #[test]
    fn test_signed_effect_by_flow_type() {
        let cats = categories();
        assert_eq!(signed_effect(&cats, &txn("stipendio", 10)), Some(Money::from_units(10)));
        assert_eq!(signed_effect(&cats, &txn("affitto", 10)), Some(Money::from_units(-10)));
        assert_eq!(signed_effect(&cats, &txn("documenti", 10)), Some(Money::zero()));
    }

    #[test]
    fn test_dangling_is_excluded_not_neutral() {
        let cats = categories();
        assert_eq!(signed_effect(&cats, &txn("palestra", 10)), None);
    }

    #[test]
    fn test_month_labels() {
        assert_eq!(MonthLabels::English.label(1), "Jan");
        assert_eq!(MonthLabels::English.label(12), "Dec");
        assert_eq!(MonthLabels::Italian.label(5), "Mag");
        assert_eq!(MonthLabels::English.label(0), "?");
        assert_eq!(MonthLabels::English.label(13), "?");
    }
}
