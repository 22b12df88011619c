//! List operation

use crate::display::format_ledger_table;
use crate::storage::Ledger;

/// Print every transaction as a fixed-width table
///
/// Pure read; the header block renders even when the ledger is empty.
/// Returns the current count, like every other operation.
pub fn list_transactions(ledger: &Ledger) -> usize {
    print!("{}", format_ledger_table(ledger));
    ledger.count()
}
