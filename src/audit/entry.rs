//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Record was created
    Create,
    /// Record was updated
    Update,
    /// Record was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// The record id is the 1-based display id at the time of the operation;
/// it is not stable across deletes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Display id of the affected record at the time of the operation
    pub record_id: usize,

    /// The record before the operation (for updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Transaction>,

    /// The record after the operation (for creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Transaction>,
}

impl AuditEntry {
    /// Create a new audit entry for a create operation
    pub fn create(record_id: usize, after: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            record_id,
            before: None,
            after: Some(after.clone()),
        }
    }

    /// Create a new audit entry for an update operation
    pub fn update(record_id: usize, before: &Transaction, after: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            record_id,
            before: Some(before.clone()),
            after: Some(after.clone()),
        }
    }

    /// Create a new audit entry for a delete operation
    pub fn delete(record_id: usize, before: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            record_id,
            before: Some(before.clone()),
            after: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} record {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.record_id
        );

        if let Some(after) = &self.after {
            output.push_str(&format!(" -> {}", after));
        } else if let Some(before) = &self.before {
            output.push_str(&format!(" ({})", before));
        }

        output
    }
}
