//! Transaction model
//!
//! One budget entry: date, amount, type code, and description. All four
//! fields are stored as text, exactly as they appear in the ledger file;
//! the amount is never parsed into a numeric type for storage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of the date field (mm/dd/yyyy)
pub const DATE_LENGTH: usize = 10;

/// Maximum width of the amount field
pub const AMOUNT_LENGTH: usize = 10;

/// Width of the type field (a single character code)
pub const TYPE_LENGTH: usize = 1;

/// Maximum width of the description field
pub const DESCRIPTION_LENGTH: usize = 50;

/// Maximum length of one encoded record line: four fields, each followed
/// by its delimiter
pub const MAX_TRANSACTION_LENGTH: usize =
    DATE_LENGTH + AMOUNT_LENGTH + TYPE_LENGTH + DESCRIPTION_LENGTH + 4;

/// Type code for a debit entry
pub const DEBIT_CODE: &str = "0";

/// Type code for a credit entry
pub const CREDIT_CODE: &str = "1";

/// A single budget transaction
///
/// Invariant: no field contains the record delimiter (`|`) or a newline.
/// The validation predicates enforce this at every input boundary; the
/// codec trusts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date (mm/dd/yyyy)
    pub date: String,

    /// Amount as entered, e.g. "100.00"
    pub amount: String,

    /// Type code: "0" for debit, "1" for credit
    pub kind: String,

    /// Free-text description
    pub description: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: impl Into<String>,
        amount: impl Into<String>,
        kind: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            amount: amount.into(),
            kind: kind.into(),
            description: description.into(),
        }
    }

    /// Check if this is a debit entry
    pub fn is_debit(&self) -> bool {
        self.kind == DEBIT_CODE
    }

    /// Check if this is a credit entry
    pub fn is_credit(&self) -> bool {
        self.kind == CREDIT_CODE
    }

    /// Human-readable label for the type code
    pub fn kind_label(&self) -> &'static str {
        match self.kind.as_str() {
            DEBIT_CODE => "Debit",
            CREDIT_CODE => "Credit",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.amount, self.description)
    }
}
