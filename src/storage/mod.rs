//! Storage layer for budgetbook
//!
//! Provides the pipe-delimited record codec, line-oriented file plumbing
//! with temp-file rewrite, and the in-memory ledger store.

pub mod codec;
pub mod file_io;
pub mod ledger;

pub use codec::{decode, encode, DELIMITER};
pub use file_io::{append_line, read_lines};
pub use ledger::Ledger;
