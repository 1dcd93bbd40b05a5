//! Transaction log operations
//!
//! The log is append-only: transactions are recorded and listed, never
//! edited.

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Money, Transaction, TransactionId, Year};

use super::taxonomy::resolve_category;

/// Input for recording a transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    pub note: String,
    pub attachment: Option<String>,
}

impl NewTransaction {
    pub fn new(amount: Money, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            category: category.into(),
            date,
            note: String::new(),
            attachment: None,
        }
    }
}

/// Next identifier: the current millisecond timestamp, bumped past every existing id
pub fn next_id(transactions: &[Transaction], now_millis: i64) -> LedgerResult<TransactionId> {
    let Some(highest) = transactions.iter().map(|t| t.id.value()).max() else {
        return Ok(TransactionId::new(now_millis));
    };
    let floor = highest
        .checked_add(1)
        .ok_or_else(|| LedgerError::Validation(format!("No id left after {}", highest)))?;
    Ok(TransactionId::new(now_millis.max(floor)))
}

/// Append a transaction to the log, returning the new log
pub fn record_transaction(
    transactions: &[Transaction],
    categories: &[Category],
    input: NewTransaction,
) -> LedgerResult<Vec<Transaction>> {
    record_transaction_at(transactions, categories, input, Utc::now().timestamp_millis())
}

/// Same as [`record_transaction`] with an explicit clock
pub fn record_transaction_at(
    transactions: &[Transaction],
    categories: &[Category],
    input: NewTransaction,
    now_millis: i64,
) -> LedgerResult<Vec<Transaction>> {
    if input.amount.is_zero() {
        return Err(LedgerError::Validation("Amount cannot be zero".into()));
    }
    if input.amount.is_negative() {
        return Err(LedgerError::Validation(
            "Amount cannot be negative; the category's flow type gives the sign".into(),
        ));
    }

    let category = input.category.trim().to_lowercase();
    if category.is_empty() {
        return Err(LedgerError::Validation("Category is required".into()));
    }

    let mut transaction = Transaction::new(
        next_id(transactions, now_millis)?,
        input.amount,
        category,
        input.date,
    )
    .with_note(input.note.trim());
    transaction.attachment = input.attachment.filter(|a| !a.trim().is_empty());

    // A new entry must point at a live category.
    resolve_category(categories, &transaction)?;

    info!(
        id = %transaction.id,
        category = %transaction.category,
        date = %transaction.date,
        "recorded transaction"
    );

    let mut updated = transactions.to_vec();
    updated.push(transaction);
    Ok(updated)
}

/// Transactions of one year, newest first
pub fn transactions_in_year(transactions: &[Transaction], year: Year) -> Vec<&Transaction> {
    let mut in_year: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.is_in_year(year))
        .collect();
    in_year.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
    in_year
}

/// Default date offered for a new entry in `year`
pub fn default_entry_date(year: Year) -> LedgerResult<NaiveDate> {
    year.first_day()
        .ok_or_else(|| LedgerError::Validation(format!("Year {} has no valid dates", year)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FlowType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn categories() -> Vec<Category> {
        vec![
            Category::new("stipendio", FlowType::Income),
            Category::new("affitto", FlowType::Expense),
        ]
    }

    #[test]
    fn test_record_appends() {
        let input = NewTransaction::new(Money::from_units(800), "Affitto", date(2024, 3, 1));
        let log = record_transaction_at(&[], &categories(), input, 1_700_000_000_000).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].id.value(), 1_700_000_000_000);
        assert_eq!(log[0].category, "affitto");
    }

    #[test]
    fn test_ids_strictly_increase() {
        let cats = categories();
        let first = NewTransaction::new(Money::from_units(1), "affitto", date(2024, 3, 1));
        let log = record_transaction_at(&[], &cats, first.clone(), 5_000).unwrap();
        // clock went backwards
        let log = record_transaction_at(&log, &cats, first, 4_000).unwrap();
        assert_eq!(log[1].id.value(), 5_001);
    }

    #[test]
    fn test_exhausted_ids_rejected() {
        let existing = vec![Transaction::new(
            TransactionId::new(i64::MAX),
            Money::from_units(1),
            "affitto",
            date(2024, 3, 1),
        )];
        let input = NewTransaction::new(Money::from_units(1), "affitto", date(2024, 3, 2));
        let err = record_transaction_at(&existing, &categories(), input, 1).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_record_rejects_invalid_input() {
        let cats = categories();
        let zero = NewTransaction::new(Money::zero(), "affitto", date(2024, 3, 1));
        assert!(record_transaction_at(&[], &cats, zero, 1).unwrap_err().is_validation());

        let negative = NewTransaction::new(Money::from_cents(-1), "affitto", date(2024, 3, 1));
        assert!(record_transaction_at(&[], &cats, negative, 1).unwrap_err().is_validation());

        let no_category = NewTransaction::new(Money::from_units(1), " ", date(2024, 3, 1));
        assert!(record_transaction_at(&[], &cats, no_category, 1).unwrap_err().is_validation());

        let unknown = NewTransaction::new(Money::from_units(1), "palestra", date(2024, 3, 1));
        assert!(record_transaction_at(&[], &cats, unknown, 1).unwrap_err().is_dangling());
    }

    #[test]
    fn test_blank_attachment_dropped() {
        let mut input = NewTransaction::new(Money::from_units(1), "affitto", date(2024, 3, 1));
        input.attachment = Some("  ".into());
        let log = record_transaction_at(&[], &categories(), input, 1).unwrap();
        assert!(log[0].attachment.is_none());
    }

    #[test]
    fn test_transactions_in_year_newest_first() {
        let cats = categories();
        let mut log = Vec::new();
        let dates = [date(2024, 1, 5), date(2025, 1, 1), date(2024, 6, 1)];
        for (i, d) in dates.into_iter().enumerate() {
            let input = NewTransaction::new(Money::from_units(1), "affitto", d);
            log = record_transaction_at(&log, &cats, input, i as i64).unwrap();
        }

        let year = Year::parse("2024").unwrap();
        let listed = transactions_in_year(&log, year);
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].date, date(2024, 6, 1));
        assert_eq!(listed[1].date, date(2024, 1, 5));
    }

    #[test]
    fn test_default_entry_date() {
        let year = Year::parse("2026").unwrap();
        assert_eq!(default_entry_date(year).unwrap(), date(2026, 1, 1));
    }
}
