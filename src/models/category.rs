//! Category model
//!
//! A category is a name plus a flow type. The flow type decides how a
//! transaction filed under the category moves the balance.

use std::fmt;
use std::str::FromStr;

/// How a category's transactions contribute to the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlowType {
    /// Adds to the balance
    Income,
    /// Subtracts from the balance
    #[default]
    Expense,
    /// Documentary only, never moves the balance
    Neutral,
}

impl FlowType {
    /// All flow types, in toggle order
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expense, Self::Neutral]
    }

    /// Next state of the 3-way toggle: Income -> Expense -> Neutral -> Income
    pub const fn next(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Neutral,
            Self::Neutral => Self::Income,
        }
    }

    /// Wire name used by the persisted snapshot
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Income => "entrata",
            Self::Expense => "uscita",
            Self::Neutral => "neutro",
        }
    }

    /// Single-character badge used in listings
    pub const fn symbol(self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
            Self::Neutral => 'o',
        }
    }
}

impl fmt::Display for FlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::Neutral => write!(f, "Neutral"),
        }
    }
}

impl FromStr for FlowType {
    type Err = String;

    /// Accepts both the English names and the wire names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "entrata" => Ok(Self::Income),
            "expense" | "uscita" => Ok(Self::Expense),
            "neutral" | "neutro" => Ok(Self::Neutral),
            other => Err(format!(
                "Unknown flow type '{}' (expected income, expense or neutral)",
                other
            )),
        }
    }
}

/// A named category in the taxonomy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Unique key, always lowercase
    pub name: String,

    pub flow_type: FlowType,
}

impl Category {
    /// Create a new category, normalizing the name to lowercase
    pub fn new(name: impl AsRef<str>, flow_type: FlowType) -> Self {
        Self {
            name: normalize_name(name.as_ref()),
            flow_type,
        }
    }

    /// Check whether this category answers to `name`
    pub fn matches(&self, name: &str) -> bool {
        self.name == name
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Normalize a category name the way the taxonomy stores it
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Categories every fresh ledger starts with
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("stipendio", FlowType::Income),
        Category::new("affitto", FlowType::Expense),
        Category::new("documenti", FlowType::Neutral),
    ]
}
