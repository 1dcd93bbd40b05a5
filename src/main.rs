use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use financelab::cli::{
    handle_backup_command, handle_category_command, handle_config_command,
    handle_export_command, handle_import_command, handle_report_command,
    handle_transaction_command, handle_year_command,
};
use financelab::config::{paths::LedgerPaths, settings::Settings};
use financelab::reports::BalanceReport;
use financelab::storage::LedgerStore;

/// Environment variable holding the log filter
const LOG_ENV: &str = "FINANCELAB_LOG";

#[derive(Parser)]
#[command(
    name = "financelab",
    version,
    about = "Personal ledger with baseline balance, monthly net worth and category comparison",
    long_about = "FinanceLab tracks a single balance from a known starting point. \
                  Categories decide whether a transaction adds to it, subtracts \
                  from it, or is only kept as a document."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the ledger with default categories and years
    Init,

    /// Show the current balance
    Balance,

    /// Show or change configuration
    #[command(subcommand)]
    Config(financelab::cli::ConfigCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(financelab::cli::CategoryCommands),

    /// Year registry commands
    #[command(subcommand)]
    Year(financelab::cli::YearCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(financelab::cli::TransactionCommands),

    /// Monthly reports
    #[command(subcommand)]
    Report(financelab::cli::ReportCommands),

    /// Export the full snapshot as JSON
    Export {
        /// Output file path
        path: PathBuf,
    },

    /// Replace the ledger with a JSON snapshot
    Import {
        /// Snapshot file path
        path: PathBuf,
    },

    /// Backup management commands
    #[command(subcommand)]
    Backup(financelab::cli::BackupCommands),
}

fn setup_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    let paths = LedgerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let store = LedgerStore::new(paths.clone())?;

    match cli.command {
        Some(Commands::Init) => {
            if store.is_initialized() {
                println!("FinanceLab is already initialized at: {}", paths.base_dir().display());
                return Ok(());
            }

            let ledger = store.load()?;
            store.save(&ledger)?;
            settings.save(&paths)?;

            println!("Initialized FinanceLab at: {}", paths.base_dir().display());
            println!();
            println!("Default categories:");
            for category in &ledger.config.categories {
                println!(
                    "  {} {} ({})",
                    category.flow_type.symbol(),
                    category.name,
                    category.flow_type
                );
            }
            println!();
            println!("Storage path: {}", ledger.config.storage_path);
            println!("Run 'financelab balance' to see the current balance.");
        }
        Some(Commands::Balance) => {
            let ledger = store.load()?;
            let report = BalanceReport::generate(&ledger);
            print!("{}", report.format_terminal(&settings.currency_symbol));
        }
        Some(Commands::Config(cmd)) => {
            handle_config_command(&store, &mut settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&store, cmd)?;
        }
        Some(Commands::Year(cmd)) => {
            handle_year_command(&store, &mut settings, cmd)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&store, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&store, &settings, cmd)?;
        }
        Some(Commands::Export { path }) => {
            handle_export_command(&store, &path)?;
        }
        Some(Commands::Import { path }) => {
            handle_import_command(&store, &path)?;
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&store, &settings, cmd)?;
        }
        None => {
            println!("FinanceLab - personal ledger");
            println!();
            println!("Run 'financelab --help' for usage information.");
        }
    }

    Ok(())
}
