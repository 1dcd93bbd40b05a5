//! Category taxonomy operations
//!
//! Every function takes the current taxonomy by reference and returns a new
//! one; nothing is mutated in place.

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::category::normalize_name;
use crate::models::{Category, FlowType, Transaction};

/// Look up a category by name
///
/// A miss means the caller holds a dangling reference and must decide
/// what to do with it.
pub fn find_category<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.matches(name))
}

/// Resolve a transaction's category, failing on a dangling reference
pub fn resolve_category<'a>(
    categories: &'a [Category],
    transaction: &Transaction,
) -> LedgerResult<&'a Category> {
    find_category(categories, &transaction.category).ok_or_else(|| {
        LedgerError::DanglingCategoryReference {
            transaction_id: transaction.id.value(),
            category: transaction.category.clone(),
        }
    })
}

/// Advance the named category through Income -> Expense -> Neutral -> Income
///
/// The name is lowercased before matching. Unknown names leave the
/// taxonomy unchanged.
pub fn cycle_type(categories: &[Category], name: &str) -> Vec<Category> {
    let name = normalize_name(name);
    categories
        .iter()
        .map(|c| {
            if c.matches(&name) {
                let next = c.flow_type.next();
                debug!(category = %c.name, from = %c.flow_type, to = %next, "cycled flow type");
                Category {
                    flow_type: next,
                    ..c.clone()
                }
            } else {
                c.clone()
            }
        })
        .collect()
}

/// Set the named category's flow type explicitly
pub fn set_type(
    categories: &[Category],
    name: &str,
    flow_type: FlowType,
) -> LedgerResult<Vec<Category>> {
    let name = normalize_name(name);
    if find_category(categories, &name).is_none() {
        return Err(LedgerError::category_not_found(name));
    }

    Ok(categories
        .iter()
        .map(|c| {
            if c.matches(&name) {
                Category {
                    flow_type,
                    ..c.clone()
                }
            } else {
                c.clone()
            }
        })
        .collect())
}

/// Append a new Expense category
///
/// An empty (or whitespace-only) name is ignored. A name already present,
/// after lowercasing, fails with `DuplicateCategory`.
pub fn add_category(categories: &[Category], name: &str) -> LedgerResult<Vec<Category>> {
    let name = normalize_name(name);
    if name.is_empty() {
        return Ok(categories.to_vec());
    }

    if find_category(categories, &name).is_some() {
        return Err(LedgerError::DuplicateCategory(name));
    }

    let mut updated = categories.to_vec();
    updated.push(Category::new(&name, FlowType::Expense));
    Ok(updated)
}

/// Remove the named category; transactions filed under it are left alone
pub fn remove_category(categories: &[Category], name: &str) -> Vec<Category> {
    let name = normalize_name(name);
    categories
        .iter()
        .filter(|c| !c.matches(&name))
        .cloned()
        .collect()
}
