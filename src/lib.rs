//! budgetbook - Terminal-based personal budget ledger
//!
//! This library provides the core functionality for budgetbook, a
//! single-user budget ledger that stores transactions in a pipe-delimited
//! flat file and edits them through an interactive menu loop.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The transaction record and field validation
//! - `storage`: Record codec, line-file I/O, and the in-memory ledger
//! - `ops`: Interactive create/list/update/delete operations
//! - `prompt`: The prompting collaborator (console and scripted)
//! - `display`: Fixed-width table rendering
//! - `audit`: Append-only audit logging
//! - `menu`: The main menu dispatch loop

pub mod audit;
pub mod config;
pub mod display;
pub mod error;
pub mod menu;
pub mod models;
pub mod ops;
pub mod prompt;
pub mod storage;

pub use error::BudgetError;
