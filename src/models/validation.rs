//! Field validation predicates
//!
//! Pure functions applied to raw prompt input before anything touches the
//! ledger. A value that passes its predicate is guaranteed free of the
//! record delimiter and newlines, so the codec can join fields blindly.

use chrono::NaiveDate;

use super::transaction::{AMOUNT_LENGTH, DATE_LENGTH, DESCRIPTION_LENGTH};

/// Validate a date string: exactly `mm/dd/yyyy`, and a real calendar date
pub fn is_valid_date(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() != DATE_LENGTH {
        return false;
    }
    if bytes[2] != b'/' || bytes[5] != b'/' {
        return false;
    }
    for (i, b) in bytes.iter().enumerate() {
        if i != 2 && i != 5 && !b.is_ascii_digit() {
            return false;
        }
    }

    // Fixed-width fields are guaranteed numeric at this point
    let month: u32 = input[0..2].parse().unwrap_or(0);
    let day: u32 = input[3..5].parse().unwrap_or(0);
    let year: i32 = input[6..10].parse().unwrap_or(0);

    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// Validate an amount string: an optional leading minus sign, digits, and
/// at most one decimal point with one or two digits after it
pub fn is_valid_amount(input: &str) -> bool {
    if input.is_empty() || input.len() > AMOUNT_LENGTH {
        return false;
    }

    let unsigned = input.strip_prefix('-').unwrap_or(input);
    if unsigned.is_empty() {
        return false;
    }

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (unsigned, None),
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    match fraction {
        None => true,
        Some(f) => {
            (1..=2).contains(&f.len()) && f.bytes().all(|b| b.is_ascii_digit())
        }
    }
}

/// Validate a type code: "0" (debit) or "1" (credit)
pub fn is_valid_kind(input: &str) -> bool {
    input == "0" || input == "1"
}

/// Validate a description: non-empty, bounded, and free of the record
/// delimiter and line breaks
pub fn is_valid_description(input: &str) -> bool {
    !input.is_empty()
        && input.len() <= DESCRIPTION_LENGTH
        && !input.contains('|')
        && !input.contains('\n')
        && !input.contains('\r')
}

/// Validate a main-menu choice: "1" through "5"
pub fn is_valid_main_menu_choice(input: &str) -> bool {
    matches!(input, "1" | "2" | "3" | "4" | "5")
}

/// Validate an update-submenu choice: "1" through "5"
pub fn is_valid_update_menu_choice(input: &str) -> bool {
    matches!(input, "1" | "2" | "3" | "4" | "5")
}

/// Check for one of the four accepted confirmation tokens
pub fn is_confirmation_token(input: &str) -> bool {
    matches!(input, "y" | "Y" | "n" | "N")
}

/// Check for an affirmative confirmation
pub fn is_affirmative(input: &str) -> bool {
    matches!(input, "y" | "Y")
}
