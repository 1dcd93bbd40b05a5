//! Custom error types for FinanceLab
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every variant is recoverable: nothing here
//! should bring the process down.

use thiserror::Error;

/// The main error type for FinanceLab operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A year string that is not exactly four digits
    #[error("Invalid year format: '{0}' (expected 4 digits, e.g. 2027)")]
    InvalidFormat(String),

    /// A category name already present in the taxonomy
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    /// Year removal blocked because transactions still fall in it
    #[error("Year {year} still contains {count} transaction(s); remove them first")]
    YearNotEmpty { year: String, count: usize },

    /// Malformed snapshot payload
    #[error("Import error: {0}")]
    Import(String),

    /// A transaction points at a category name that no longer exists
    #[error("Transaction {transaction_id} references unknown category '{category}'")]
    DanglingCategoryReference { transaction_id: i64, category: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for years
    pub fn year_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Year",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error only flags a soft reference problem
    pub fn is_dangling(&self) -> bool {
        matches!(self, Self::DanglingCategoryReference { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for FinanceLab operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = LedgerError::category_not_found("affitto");
        assert_eq!(err.to_string(), "Category not found: affitto");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_year_not_empty_error() {
        let err = LedgerError::YearNotEmpty {
            year: "2024".into(),
            count: 3,
        };
        assert_eq!(
            err.to_string(),
            "Year 2024 still contains 3 transaction(s); remove them first"
        );
    }

    #[test]
    fn test_dangling_error() {
        let err = LedgerError::DanglingCategoryReference {
            transaction_id: 42,
            category: "gym".into(),
        };
        assert!(err.is_dangling());
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Transaction 42 references unknown category 'gym'"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LedgerError = io_err.into();
        assert!(matches!(err, LedgerError::Io(_)));
    }
}
