//! Audit logging for budgetbook
//!
//! Records every committed create, update, and delete with before/after
//! record values in an append-only log.
//!
//! The log uses a line-delimited JSON format (JSONL): one complete JSON
//! object per line. A failure to write the audit log never aborts a
//! mutation that already committed to the ledger file.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
