//! Update operation

use std::path::Path;

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::BudgetResult;
use crate::models::validation;
use crate::prompt::Prompter;
use crate::storage::Ledger;

use super::{list_transactions, prompt_field, prompt_record_id, Field};

/// Interactively update one field of an existing transaction
///
/// Lists the ledger for reference, prompts for a record id, then for which
/// field to change via a submenu. Only the chosen field is re-validated;
/// the other three carry over unchanged. The record is replaced in memory
/// and the whole backing file rewritten. An unrecognized submenu token
/// re-prompts; it never falls through to a commit.
pub fn update_transaction<P: Prompter>(
    ledger: &mut Ledger,
    path: &Path,
    prompter: &mut P,
    audit: &AuditLogger,
) -> BudgetResult<usize> {
    list_transactions(ledger);

    let Some(id) = prompt_record_id(prompter, ledger.count(), "edit")? else {
        println!("\nTransaction has been successfully discarded.");
        return Ok(ledger.count());
    };

    let before = ledger.get(id)?.clone();

    let field = loop {
        print_update_menu();
        let choice = prompter.read_choice("Enter your selection: ")?;

        if !validation::is_valid_update_menu_choice(&choice) {
            println!("\nYou entered an invalid menu option. Please try again.");
            continue;
        }

        match choice.as_str() {
            "1" => break Field::Date,
            "2" => break Field::Amount,
            "3" => break Field::Kind,
            "4" => break Field::Description,
            _ => {
                println!("\nChanges were successfully discarded.");
                return Ok(ledger.count());
            }
        }
    };

    let Some(value) = prompt_field(prompter, field)? else {
        println!("\nTransaction has been successfully discarded.");
        return Ok(ledger.count());
    };

    let mut after = before.clone();
    match field {
        Field::Date => after.date = value,
        Field::Amount => after.amount = value,
        Field::Kind => after.kind = value,
        Field::Description => after.description = value,
    }

    ledger.replace_at(id, after.clone())?;
    ledger.rewrite_all(path)?;

    if let Err(e) = audit.log(&AuditEntry::update(id, &before, &after)) {
        eprintln!("Warning: failed to write audit log: {}", e);
    }

    println!("\nRecord {} successfully updated!", id);

    Ok(ledger.count())
}

fn print_update_menu() {
    println!();
    println!("Which field would you like to update?");
    println!(" 1. Date");
    println!(" 2. Amount");
    println!(" 3. Type");
    println!(" 4. Description");
    println!(" 5. Cancel");
    println!();
}
