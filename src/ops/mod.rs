//! Interactive CRUD operations
//!
//! Each operation runs the same state machine: prompt, validate, then
//! either cancel (no mutation, prior state untouched) or commit. Field
//! prompts retry without limit; the reserved cancel token aborts the whole
//! operation. Every operation returns the resulting transaction count so
//! the menu loop never has to re-query the store.

pub mod create;
pub mod delete;
pub mod list;
pub mod update;

pub use create::create_transaction;
pub use delete::delete_transaction;
pub use list::list_transactions;
pub use update::update_transaction;

use crate::error::BudgetResult;
use crate::models::validation;
use crate::prompt::{is_cancel, Prompter};

/// A single editable field of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Date,
    Amount,
    Kind,
    Description,
}

impl Field {
    fn read<P: Prompter>(self, prompter: &mut P) -> BudgetResult<String> {
        match self {
            Field::Date => prompter.read_date(),
            Field::Amount => prompter.read_amount(),
            Field::Kind => prompter.read_kind(),
            Field::Description => prompter.read_description(),
        }
    }

    fn is_valid(self, value: &str) -> bool {
        match self {
            Field::Date => validation::is_valid_date(value),
            Field::Amount => validation::is_valid_amount(value),
            Field::Kind => validation::is_valid_kind(value),
            Field::Description => validation::is_valid_description(value),
        }
    }

    fn invalid_message(self) -> &'static str {
        match self {
            Field::Date => "\nThe date you entered was invalid. Please try again.",
            Field::Amount => "\nThe amount you entered was invalid. Please try again.",
            Field::Kind => "\nThe type you entered was invalid. Please try again.",
            Field::Description => "\nThe description you entered was invalid. Please try again.",
        }
    }
}

/// Prompt for one field until it validates or the user cancels
///
/// `Ok(None)` means the user entered the cancel token; the caller aborts
/// the whole operation with no mutation.
pub(crate) fn prompt_field<P: Prompter>(
    prompter: &mut P,
    field: Field,
) -> BudgetResult<Option<String>> {
    loop {
        let input = field.read(prompter)?;

        if is_cancel(&input) {
            return Ok(None);
        }

        if field.is_valid(&input) {
            return Ok(Some(input));
        }

        println!("{}", field.invalid_message());
    }
}

/// Prompt for a record id in [1, count] until valid or cancelled
pub(crate) fn prompt_record_id<P: Prompter>(
    prompter: &mut P,
    count: usize,
    action: &str,
) -> BudgetResult<Option<usize>> {
    loop {
        let input = prompter.read_choice(&format!(
            "\nType the ID of the transaction you would like to {}. Enter \"b\" to go back: ",
            action
        ))?;

        if is_cancel(&input) {
            return Ok(None);
        }

        match input.parse::<usize>() {
            Ok(id) if (1..=count).contains(&id) => return Ok(Some(id)),
            _ => println!("\nThe id you entered is invalid. Please try again."),
        }
    }
}
