//! Category CLI commands
//!
//! Implements CLI commands for the category taxonomy.

use clap::Subcommand;

use crate::display::category::format_category_list;
use crate::error::LedgerResult;
use crate::models::category::normalize_name;
use crate::models::FlowType;
use crate::services::taxonomy::{
    add_category, cycle_type, find_category, remove_category, set_type,
};
use crate::storage::LedgerStore;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories with their flow type
    List,

    /// Add a new category (flow type Expense)
    Add {
        /// Category name (stored lowercase)
        name: String,
    },

    /// Remove a category; its transactions stay but stop counting
    Remove {
        /// Category name
        name: String,
    },

    /// Advance the flow type: Income -> Expense -> Neutral -> Income
    Cycle {
        /// Category name
        name: String,
    },

    /// Set the flow type explicitly
    #[command(name = "set-type")]
    SetType {
        /// Category name
        name: String,
        /// income, expense or neutral (entrata, uscita, neutro also accepted)
        flow_type: FlowType,
    },
}

/// Handle a category command
pub fn handle_category_command(store: &LedgerStore, cmd: CategoryCommands) -> LedgerResult<()> {
    let ledger = store.load()?;

    match cmd {
        CategoryCommands::List => {
            print!(
                "{}",
                format_category_list(&ledger.config.categories, &ledger.transactions)
            );
        }

        CategoryCommands::Add { name } => {
            let categories = add_category(&ledger.config.categories, &name)?;
            if categories.len() == ledger.config.categories.len() {
                println!("Nothing to add: category name is empty.");
                return Ok(());
            }

            let mut config = ledger.config.clone();
            config.categories = categories;
            store.save(&ledger.with_config(config))?;
            println!("Added category: {} (Expense)", normalize_name(&name));
        }

        CategoryCommands::Remove { name } => {
            let name = normalize_name(&name);
            if find_category(&ledger.config.categories, &name).is_none() {
                println!("No category named '{}'.", name);
                return Ok(());
            }

            let orphaned = ledger
                .transactions
                .iter()
                .filter(|t| t.category == name)
                .count();

            let mut config = ledger.config.clone();
            config.categories = remove_category(&ledger.config.categories, &name);
            store.save(&ledger.with_config(config))?;

            println!("Removed category: {}", name);
            if orphaned > 0 {
                println!(
                    "{} transaction(s) still reference '{}' and are now excluded from balances.",
                    orphaned, name
                );
            }
        }

        CategoryCommands::Cycle { name } => {
            let name = normalize_name(&name);
            let categories = cycle_type(&ledger.config.categories, &name);

            match find_category(&categories, &name) {
                Some(category) => {
                    println!("{}: {}", category.name, category.flow_type);
                    let mut config = ledger.config.clone();
                    config.categories = categories;
                    store.save(&ledger.with_config(config))?;
                }
                None => println!("No category named '{}'.", name),
            }
        }

        CategoryCommands::SetType { name, flow_type } => {
            let mut config = ledger.config.clone();
            config.categories = set_type(&ledger.config.categories, &name, flow_type)?;
            store.save(&ledger.with_config(config))?;
            println!("{}: {}", normalize_name(&name), flow_type);
        }
    }

    Ok(())
}
