//! Prompting collaborator for the interactive operations
//!
//! The CRUD operations own their retry/cancel loops but read raw input
//! through the [`Prompter`] trait, so tests can script a whole session
//! without a terminal. The console implementation blocks on stdin at each
//! prompt boundary; that wait is the only form of suspension in the
//! program.

use std::io::{self, BufRead, Write};

use crate::error::{BudgetError, BudgetResult};

/// The reserved cancellation token ("b" to go back)
pub fn is_cancel(input: &str) -> bool {
    matches!(input, "b" | "B")
}

/// Reads raw field and menu input for the interactive operations
///
/// Each method prints its own prompt and returns the entered line with
/// surrounding whitespace trimmed. Returning an error means input is no
/// longer available (e.g. stdin closed); callers propagate it rather than
/// retrying.
pub trait Prompter {
    /// Prompt for a transaction date
    fn read_date(&mut self) -> BudgetResult<String>;

    /// Prompt for a transaction amount
    fn read_amount(&mut self) -> BudgetResult<String>;

    /// Prompt for a transaction type code
    fn read_kind(&mut self) -> BudgetResult<String>;

    /// Prompt for a transaction description
    fn read_description(&mut self) -> BudgetResult<String>;

    /// Prompt for a short token (menu choices, record ids, confirmations)
    fn read_choice(&mut self, prompt: &str) -> BudgetResult<String>;
}

/// Prompter backed by stdin/stdout
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl ConsolePrompter {
    /// Create a new console prompter
    pub fn new() -> Self {
        Self
    }

    fn read_line(&mut self, prompt: &str) -> BudgetResult<String> {
        print!("{}", prompt);
        io::stdout()
            .flush()
            .map_err(|e| BudgetError::Io(format!("Failed to flush stdout: {}", e)))?;

        let mut line = String::new();
        let bytes = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| BudgetError::Io(format!("Failed to read input: {}", e)))?;

        if bytes == 0 {
            return Err(BudgetError::Io("Input stream closed".into()));
        }

        Ok(line.trim().to_string())
    }
}

impl Prompter for ConsolePrompter {
    fn read_date(&mut self) -> BudgetResult<String> {
        self.read_line(
            "\nEnter the date of the transaction (mm/dd/yyyy). Enter \"b\" to go back: ",
        )
    }

    fn read_amount(&mut self) -> BudgetResult<String> {
        self.read_line("\nEnter the amount of the transaction. Enter \"b\" to go back: ")
    }

    fn read_kind(&mut self) -> BudgetResult<String> {
        self.read_line(
            "\nEnter the type of the transaction (0 for debit, 1 for credit). Enter \"b\" to go back: ",
        )
    }

    fn read_description(&mut self) -> BudgetResult<String> {
        self.read_line("\nEnter the description of the transaction. Enter \"b\" to go back: ")
    }

    fn read_choice(&mut self, prompt: &str) -> BudgetResult<String> {
        self.read_line(prompt)
    }
}

/// Prompter that replays a fixed input script (test double)
#[cfg(test)]
pub(crate) struct ScriptedPrompter {
    inputs: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn next(&mut self) -> BudgetResult<String> {
        self.inputs
            .pop_front()
            .ok_or_else(|| BudgetError::Io("Input script exhausted".into()))
    }

    pub fn is_drained(&self) -> bool {
        self.inputs.is_empty()
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn read_date(&mut self) -> BudgetResult<String> {
        self.next()
    }

    fn read_amount(&mut self) -> BudgetResult<String> {
        self.next()
    }

    fn read_kind(&mut self) -> BudgetResult<String> {
        self.next()
    }

    fn read_description(&mut self) -> BudgetResult<String> {
        self.next()
    }

    fn read_choice(&mut self, _prompt: &str) -> BudgetResult<String> {
        self.next()
    }
}
