//! Transaction model
//!
//! A dated amount filed under a category name. The category name is a soft
//! reference: it may outlive the category it once pointed at.

use chrono::NaiveDate;
use std::fmt;

use super::money::Money;
use super::year::Year;

/// Transaction identifier, the creation timestamp in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransactionId(i64);

impl TransactionId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,

    /// Non-negative by convention; the engine does not enforce it
    pub amount: Money,

    /// Name of the category this transaction is filed under
    pub category: String,

    pub date: NaiveDate,

    pub note: String,

    /// Opaque reference to an attached file (its file name)
    pub attachment: Option<String>,
}

impl Transaction {
    /// Create a transaction with an empty note and no attachment
    pub fn new(
        id: TransactionId,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            amount,
            category: category.into(),
            date,
            note: String::new(),
            attachment: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_attachment(mut self, attachment: impl Into<String>) -> Self {
        self.attachment = Some(attachment.into());
        self
    }

    pub fn year(&self) -> Year {
        Year::of(self.date)
    }

    /// Check whether this transaction falls in `year`
    pub fn is_in_year(&self, year: Year) -> bool {
        year.contains(self.date)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.category, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_builder() {
        let txn = Transaction::new(
            TransactionId::new(1),
            Money::from_units(800),
            "affitto",
            date(2024, 3, 1),
        )
        .with_note("March rent")
        .with_attachment("receipt.pdf");

        assert_eq!(txn.category, "affitto");
        assert_eq!(txn.note, "March rent");
        assert_eq!(txn.attachment.as_deref(), Some("receipt.pdf"));
    }

    #[test]
    fn test_year_membership() {
        let txn = Transaction::new(
            TransactionId::new(1),
            Money::from_units(10),
            "affitto",
            date(2024, 12, 31),
        );
        assert!(txn.is_in_year(Year::parse("2024").unwrap()));
        assert!(!txn.is_in_year(Year::parse("2025").unwrap()));
        assert_eq!(txn.year().value(), 2024);
    }
}
