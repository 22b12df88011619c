//! In-memory ledger store
//!
//! Owns the ordered collection of transactions for the current session and
//! keeps it synchronized with the backing file. The collection's own length
//! is the record count; ids handed to users are 1-based positions within it.

use std::path::Path;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Transaction;

use super::{codec, file_io};

/// The in-memory ordered collection of all transactions
///
/// Bounded by a configured capacity. The bound is a policy check on a
/// growable container, not a pre-sized array: update and delete rewrite the
/// whole backing file from memory, so any record beyond the bound would be
/// silently dropped by the next rewrite. Load refuses oversized files for
/// the same reason.
#[derive(Debug)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    capacity: usize,
}

impl Ledger {
    /// Create an empty ledger with the given capacity policy
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            transactions: Vec::new(),
            capacity,
        }
    }

    /// Load the ledger from the backing file
    ///
    /// Reads the file line by line; each line decodes to one transaction,
    /// appended in file order. A file with more lines than `capacity` is
    /// refused outright - a partial ledger would lose rows on the next
    /// rewrite.
    pub fn load<P: AsRef<Path>>(path: P, capacity: usize) -> BudgetResult<Self> {
        let lines = file_io::read_lines(path)?;

        if lines.len() > capacity {
            return Err(BudgetError::CapacityExceeded { limit: capacity });
        }

        let transactions = lines.iter().map(|line| codec::decode(line)).collect();

        Ok(Self {
            transactions,
            capacity,
        })
    }

    /// Number of transactions currently held
    pub fn count(&self) -> usize {
        self.transactions.len()
    }

    /// Check if the ledger holds no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Check if the ledger is at its capacity bound
    pub fn is_full(&self) -> bool {
        self.transactions.len() >= self.capacity
    }

    /// The configured capacity bound
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the transaction with the given 1-based id
    pub fn get(&self, id: usize) -> BudgetResult<&Transaction> {
        let index = self.index_for(id)?;
        Ok(&self.transactions[index])
    }

    /// Iterate over the transactions in ledger order
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    /// Append a transaction to the in-memory tail
    ///
    /// Rejected before any mutation when the ledger is full. The caller is
    /// responsible for the paired append to the backing file; create couples
    /// the two as a single logical unit.
    pub fn append(&mut self, txn: Transaction) -> BudgetResult<()> {
        if self.is_full() {
            return Err(BudgetError::CapacityExceeded {
                limit: self.capacity,
            });
        }
        self.transactions.push(txn);
        Ok(())
    }

    /// Replace the transaction with the given 1-based id
    pub fn replace_at(&mut self, id: usize, txn: Transaction) -> BudgetResult<()> {
        let index = self.index_for(id)?;
        self.transactions[index] = txn;
        Ok(())
    }

    /// Remove the transaction with the given 1-based id, returning it
    ///
    /// Subsequent entries shift down by one position; their display ids
    /// change accordingly.
    pub fn remove_at(&mut self, id: usize) -> BudgetResult<Transaction> {
        let index = self.index_for(id)?;
        Ok(self.transactions.remove(index))
    }

    /// Rewrite the backing file from the in-memory ledger
    ///
    /// Every transaction is encoded in ledger order into a temp file which
    /// then replaces the original. Sole persistence mechanism for update and
    /// delete; the on-disk file is always a complete snapshot.
    pub fn rewrite_all<P: AsRef<Path>>(&self, path: P) -> BudgetResult<()> {
        let lines: Vec<String> = self.transactions.iter().map(codec::encode).collect();
        file_io::swap_in_lines(path, &lines)
    }

    fn index_for(&self, id: usize) -> BudgetResult<usize> {
        if id == 0 || id > self.transactions.len() {
            return Err(BudgetError::IndexOutOfRange {
                id,
                count: self.transactions.len(),
            });
        }
        Ok(id - 1)
    }
}
