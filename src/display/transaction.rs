//! Transaction display formatting
//!
//! Renders the ledger as a fixed-width table with columns Id, Date,
//! Amount, Type, and Description.

use crate::models::{Transaction, DESCRIPTION_LENGTH};
use crate::storage::Ledger;

/// Format one transaction as a table row with its 1-based display id
pub fn format_transaction_row(id: usize, txn: &Transaction) -> String {
    format!(
        "{:>6}  {:<10}  {:>10}  {:<4}  {:<width$}",
        id,
        txn.date,
        txn.amount,
        txn.kind,
        truncate(&txn.description, DESCRIPTION_LENGTH),
        width = DESCRIPTION_LENGTH
    )
}

/// Format the whole ledger as a table
///
/// The header block always renders; an empty ledger produces the header
/// and no data rows.
pub fn format_ledger_table(ledger: &Ledger) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:>6}  {:<10}  {:>10}  {:<4}  {:<width$}\n",
        "Id",
        "Date",
        "Amount",
        "Type",
        "Description",
        width = DESCRIPTION_LENGTH
    ));
    output.push_str(&format!(
        "{}  {}  {}  {}  {}\n",
        "-".repeat(6),
        "-".repeat(10),
        "-".repeat(10),
        "-".repeat(4),
        "-".repeat(DESCRIPTION_LENGTH)
    ));

    for (index, txn) in ledger.iter().enumerate() {
        output.push_str(&format_transaction_row(index + 1, txn));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}
