use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use budgetbook::audit::AuditLogger;
use budgetbook::config::{BudgetPaths, Settings};
use budgetbook::menu;
use budgetbook::prompt::ConsolePrompter;
use budgetbook::storage::Ledger;

#[derive(Parser)]
#[command(
    name = "budgetbook",
    version,
    about = "Terminal-based personal budget ledger",
    long_about = "budgetbook is a terminal-based personal budget ledger. It keeps \
                  your transactions in a plain pipe-delimited text file and lets \
                  you create, list, update, and delete entries through an \
                  interactive menu."
)]
struct Cli {
    /// Path to the ledger file (defaults to budget.txt in the data directory)
    #[arg(short, long, env = "BUDGETBOOK_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory, default settings, and an empty ledger file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let ledger_path = cli.file.unwrap_or_else(|| paths.ledger_file());

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing budgetbook at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;

            if ledger_path.exists() {
                println!("Ledger file already exists: {}", ledger_path.display());
            } else {
                std::fs::write(&ledger_path, "").with_context(|| {
                    format!("Failed to create ledger file {}", ledger_path.display())
                })?;
                println!("Created empty ledger file: {}", ledger_path.display());
            }

            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            println!("budgetbook Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", ledger_path.display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Max transactions: {}", settings.max_transactions);
        }
        None => {
            let mut ledger = Ledger::load(&ledger_path, settings.max_transactions)
                .with_context(|| {
                    format!(
                        "Could not load the ledger from {}; run 'budgetbook init' or pass --file",
                        ledger_path.display()
                    )
                })?;

            let audit = AuditLogger::new(paths.audit_log());
            let mut prompter = ConsolePrompter::new();

            menu::run(&mut ledger, &ledger_path, &mut prompter, &audit)?;
        }
    }

    Ok(())
}
