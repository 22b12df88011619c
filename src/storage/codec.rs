//! Record codec for the pipe-delimited ledger format
//!
//! One record per line, fields joined in the fixed order date, amount,
//! type, description, each followed by a trailing delimiter:
//!
//! ```text
//! 01/15/2022|100.00|1|Paycheck|
//! ```
//!
//! No escaping is performed. The validation predicates guarantee that no
//! field contains the delimiter or a newline; the codec trusts that.

use crate::models::Transaction;

/// Field separator within one record line
pub const DELIMITER: char = '|';

/// Encode a transaction as one record line (without the trailing newline)
pub fn encode(txn: &Transaction) -> String {
    format!(
        "{}{d}{}{d}{}{d}{}{d}",
        txn.date,
        txn.amount,
        txn.kind,
        txn.description,
        d = DELIMITER
    )
}

/// Decode one record line into a transaction
///
/// A field is everything up to the next delimiter or the end of input.
/// Lines with fewer than four delimited segments yield empty trailing
/// fields; no length validation happens here. Malformed persisted data is
/// accepted silently.
pub fn decode(line: &str) -> Transaction {
    let mut fields = line.split(DELIMITER);
    let mut next = || fields.next().unwrap_or("").to_string();

    let date = next();
    let amount = next();
    let kind = next();
    let description = next();

    Transaction {
        date,
        amount,
        kind,
        description,
    }
}
