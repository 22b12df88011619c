//! Core data models for budgetbook
//!
//! This module contains the transaction record, its field bounds, and the
//! pure validation predicates applied at every prompt boundary.

pub mod transaction;
pub mod validation;

pub use transaction::{
    Transaction, AMOUNT_LENGTH, DATE_LENGTH, DESCRIPTION_LENGTH, MAX_TRANSACTION_LENGTH,
    TYPE_LENGTH,
};
