//! Delete operation

use std::path::Path;

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::BudgetResult;
use crate::models::validation;
use crate::prompt::Prompter;
use crate::storage::Ledger;

use super::{list_transactions, prompt_record_id};

/// Interactively delete a transaction
///
/// Lists the ledger for reference, prompts for a record id (cancellable),
/// then loops on a yes/no confirmation until one of exactly y/Y/n/N is
/// entered. On yes the record is removed, subsequent ids shift down, and
/// the whole backing file is rewritten; on no, nothing changes.
pub fn delete_transaction<P: Prompter>(
    ledger: &mut Ledger,
    path: &Path,
    prompter: &mut P,
    audit: &AuditLogger,
) -> BudgetResult<usize> {
    list_transactions(ledger);

    let Some(id) = prompt_record_id(prompter, ledger.count(), "delete")? else {
        println!("\nTransaction has been successfully discarded.");
        return Ok(ledger.count());
    };

    let confirmation = loop {
        let input = prompter.read_choice(&format!(
            "\nAre you sure you want to delete record {} (Y/y or N/n): ",
            id
        ))?;

        if validation::is_confirmation_token(&input) {
            break input;
        }

        println!("\nYou entered an invalid option. Please try again.");
    };

    if !validation::is_affirmative(&confirmation) {
        println!("\nTransaction will not be deleted.");
        return Ok(ledger.count());
    }

    let removed = ledger.remove_at(id)?;
    ledger.rewrite_all(path)?;

    if let Err(e) = audit.log(&AuditEntry::delete(id, &removed)) {
        eprintln!("Warning: failed to write audit log: {}", e);
    }

    println!("\nRecord {} successfully deleted!", id);

    Ok(ledger.count())
}
