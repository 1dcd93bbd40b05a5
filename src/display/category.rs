//! Category display formatting

use crate::models::{Category, Transaction};

/// Format the taxonomy as a table with usage counts
pub fn format_category_list(categories: &[Category], transactions: &[Transaction]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nAdd one with 'financelab category add <NAME>'.\n"
            .to_string();
    }

    let width = categories
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(0)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "   {:<width$}  {:<8}  {:>6}\n",
        "Name",
        "Type",
        "Txns",
        width = width
    ));
    output.push_str(&"-".repeat(width + 21));
    output.push('\n');

    for category in categories {
        let used = transactions
            .iter()
            .filter(|t| category.matches(&t.category))
            .count();
        output.push_str(&format!(
            "{}  {:<width$}  {:<8}  {:>6}\n",
            category.flow_type.symbol(),
            category.name,
            category.flow_type.to_string(),
            used,
            width = width
        ));
    }

    output
}
