//! Display formatting for terminal output
//!
//! Provides utilities for formatting the ledger for terminal display.

pub mod transaction;

pub use transaction::{format_ledger_table, format_transaction_row};
