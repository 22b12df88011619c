//! Main menu loop
//!
//! Thin dispatch layer between the terminal and the CRUD operations. The
//! loop re-displays the menu after every operation and keeps running until
//! the user quits or input ends.

use std::path::Path;

use crate::audit::AuditLogger;
use crate::error::BudgetResult;
use crate::models::validation;
use crate::ops::{
    create_transaction, delete_transaction, list_transactions, update_transaction,
};
use crate::prompt::Prompter;
use crate::storage::Ledger;

/// Run the interactive main menu until the user quits
///
/// Invalid tokens re-display the menu with an error line. Creating while
/// the ledger is full is a soft rejection; update and delete on an empty
/// ledger print a hint instead of entering the operation.
pub fn run<P: Prompter>(
    ledger: &mut Ledger,
    path: &Path,
    prompter: &mut P,
    audit: &AuditLogger,
) -> BudgetResult<()> {
    loop {
        print_main_menu();
        let choice = prompter.read_choice("Enter your selection: ")?;
        println!();

        if !validation::is_valid_main_menu_choice(&choice) {
            println!("Invalid option entered. Please try again.");
            continue;
        }

        match choice.as_str() {
            "1" => {
                if ledger.is_full() {
                    println!("The ledger already holds the maximum number of transactions.");
                    println!("No more transactions can be added.");
                } else {
                    create_transaction(ledger, path, prompter, audit)?;
                }
            }
            "2" => {
                list_transactions(ledger);
            }
            "3" => {
                if ledger.is_empty() {
                    println!("No transactions were found to edit.");
                    println!("Please create a transaction first.");
                } else {
                    update_transaction(ledger, path, prompter, audit)?;
                }
            }
            "4" => {
                if ledger.is_empty() {
                    println!("No transactions were found to delete.");
                    println!("Please create a transaction first.");
                } else {
                    delete_transaction(ledger, path, prompter, audit)?;
                }
            }
            _ => {
                println!("Saving and quitting.");
                return Ok(());
            }
        }
    }
}

fn print_main_menu() {
    println!();
    println!("================================");
    println!(" budgetbook - Main Menu");
    println!("================================");
    println!(" 1. Create a transaction");
    println!(" 2. List all transactions");
    println!(" 3. Update a transaction");
    println!(" 4. Delete a transaction");
    println!(" 5. Save and quit");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;
    use crate::prompt::ScriptedPrompter;
    use crate::storage::read_lines;
    use tempfile::TempDir;

    fn setup() -> (TempDir, std::path::PathBuf, AuditLogger) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("budget.txt");
        std::fs::write(&path, "").unwrap();
        let audit = AuditLogger::new(dir.path().join("audit.log"));
        (dir, path, audit)
    }

    #[test]
    fn test_quit_immediately() {
        let (_dir, path, audit) = setup();
        let mut ledger = Ledger::with_capacity(100);
        let mut prompter = ScriptedPrompter::new(&["5"]);

        run(&mut ledger, &path, &mut prompter, &audit).unwrap();
        assert!(prompter.is_drained());
    }

    #[test]
    fn test_invalid_token_redisplays_menu() {
        let (_dir, path, audit) = setup();
        let mut ledger = Ledger::with_capacity(100);
        let mut prompter = ScriptedPrompter::new(&["x", "9", "5"]);

        run(&mut ledger, &path, &mut prompter, &audit).unwrap();
        assert!(prompter.is_drained());
    }

    #[test]
    fn test_create_via_menu() {
        let (_dir, path, audit) = setup();
        let mut ledger = Ledger::with_capacity(100);
        let mut prompter =
            ScriptedPrompter::new(&["1", "01/01/2022", "50.00", "1", "Gift", "5"]);

        run(&mut ledger, &path, &mut prompter, &audit).unwrap();

        assert_eq!(ledger.count(), 1);
        assert_eq!(
            read_lines(&path).unwrap(),
            vec!["01/01/2022|50.00|1|Gift|".to_string()]
        );
    }

    #[test]
    fn test_create_at_capacity_is_soft_rejected() {
        let (_dir, path, audit) = setup();
        let mut ledger = Ledger::with_capacity(1);
        ledger
            .append(Transaction::new("01/01/2022", "1.00", "0", "Full"))
            .unwrap();

        // The menu rejects before create prompts for anything
        let mut prompter = ScriptedPrompter::new(&["1", "5"]);
        run(&mut ledger, &path, &mut prompter, &audit).unwrap();

        assert_eq!(ledger.count(), 1);
        assert!(prompter.is_drained());
    }

    #[test]
    fn test_update_on_empty_ledger_prints_hint() {
        let (_dir, path, audit) = setup();
        let mut ledger = Ledger::with_capacity(100);
        let mut prompter = ScriptedPrompter::new(&["3", "4", "5"]);

        run(&mut ledger, &path, &mut prompter, &audit).unwrap();
        assert!(prompter.is_drained());
    }

    #[test]
    fn test_closed_input_ends_the_loop_with_an_error() {
        let (_dir, path, audit) = setup();
        let mut ledger = Ledger::with_capacity(100);
        let mut prompter = ScriptedPrompter::new(&["2"]);

        assert!(run(&mut ledger, &path, &mut prompter, &audit).is_err());
    }
}
