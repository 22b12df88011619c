//! Create operation

use std::path::Path;

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{BudgetError, BudgetResult};
use crate::models::Transaction;
use crate::prompt::Prompter;
use crate::storage::{codec, file_io, Ledger};

use super::{prompt_field, Field};

/// Interactively create a new transaction
///
/// Prompts for date, amount, type, and description in that order; each
/// prompt is independently cancellable and cancelling aborts the whole
/// create with nothing written. On success the encoded line is appended to
/// the backing file and the record to the in-memory ledger as one logical
/// unit. Returns the resulting count.
pub fn create_transaction<P: Prompter>(
    ledger: &mut Ledger,
    path: &Path,
    prompter: &mut P,
    audit: &AuditLogger,
) -> BudgetResult<usize> {
    // Checked before any prompting so a full ledger never costs the user
    // four answers
    if ledger.is_full() {
        return Err(BudgetError::CapacityExceeded {
            limit: ledger.capacity(),
        });
    }

    let Some(date) = prompt_field(prompter, Field::Date)? else {
        println!("\nTransaction has been successfully discarded.");
        return Ok(ledger.count());
    };

    let Some(amount) = prompt_field(prompter, Field::Amount)? else {
        println!("\nTransaction has been successfully discarded.");
        return Ok(ledger.count());
    };

    let Some(kind) = prompt_field(prompter, Field::Kind)? else {
        println!("\nTransaction has been successfully discarded.");
        return Ok(ledger.count());
    };

    let Some(description) = prompt_field(prompter, Field::Description)? else {
        println!("\nTransaction has been successfully discarded.");
        return Ok(ledger.count());
    };

    let txn = Transaction::new(date, amount, kind, description);

    // File append and memory append are one logical unit; the capacity
    // guard above makes the in-memory append infallible here
    file_io::append_line(path, &codec::encode(&txn))?;
    ledger.append(txn.clone())?;

    if let Err(e) = audit.log(&AuditEntry::create(ledger.count(), &txn)) {
        eprintln!("Warning: failed to write audit log: {}", e);
    }

    println!("\nRecord was successfully added.");

    Ok(ledger.count())
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn test_create_appends_to_file_and_memory() {
        let (_dir, path, audit) = setup();
        let mut ledger = Ledger::with_capacity(100);
        let mut prompter =
            ScriptedPrompter::new(&["01/01/2022", "50.00", "1", "Gift"]);

        let count =
            create_transaction(&mut ledger, &path, &mut prompter, &audit).unwrap();

        assert_eq!(count, 1);
        assert_eq!(ledger.count(), 1);
        assert_eq!(
            read_lines(&path).unwrap(),
            vec!["01/01/2022|50.00|1|Gift|".to_string()]
        );
        assert_eq!(audit.read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_create_retries_invalid_fields() {
        let (_dir, path, audit) = setup();
        let mut ledger = Ledger::with_capacity(100);
        let mut prompter = ScriptedPrompter::new(&[
            "bad date",
            "01/01/2022",
            "not-a-number",
            "50.00",
            "7",
            "1",
            "Gift",
        ]);

        let count =
            create_transaction(&mut ledger, &path, &mut prompter, &audit).unwrap();

        assert_eq!(count, 1);
        assert!(prompter.is_drained());
    }

    #[test]
    fn test_cancel_at_each_prompt_leaves_no_trace() {
        // Cancel at date, amount, kind, and description respectively
        let scripts: [&[&str]; 4] = [
            &["b"],
            &["01/01/2022", "b"],
            &["01/01/2022", "50.00", "b"],
            &["01/01/2022", "50.00", "1", "B"],
        ];

        for script in scripts {
            let (_dir, path, audit) = setup();
            let mut ledger = Ledger::with_capacity(100);
            let mut prompter = ScriptedPrompter::new(script);

            let count =
                create_transaction(&mut ledger, &path, &mut prompter, &audit).unwrap();

            assert_eq!(count, 0);
            assert_eq!(ledger.count(), 0);
            assert!(read_lines(&path).unwrap().is_empty());
            assert!(!audit.exists());
        }
    }

    #[test]
    fn test_create_at_capacity_is_rejected_before_prompting() {
        let (_dir, path, audit) = setup();
        let mut ledger = Ledger::with_capacity(1);
        ledger
            .append(Transaction::new("01/01/2022", "1.00", "0", "Full"))
            .unwrap();

        // No inputs scripted: the guard must fire before any prompt
        let mut prompter = ScriptedPrompter::new(&[]);
        let err =
            create_transaction(&mut ledger, &path, &mut prompter, &audit).unwrap_err();

        assert!(err.is_capacity_exceeded());
        assert_eq!(ledger.count(), 1);
    }
}
