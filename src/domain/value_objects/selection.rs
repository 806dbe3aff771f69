//! Selection value object - a validated 1-based list choice
//!
//! Users pick drafts and projects by typing the number shown next to them.

use crate::error::{LazydraftError, LazydraftResult};

/// A choice that is known to be inside `[1, len]` of the list it was parsed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection(usize);

impl Selection {
    /// Parse user input against a list of `len` items.
    ///
    /// Surrounding whitespace is ignored. `0`, negative numbers, numbers past
    /// the end and non-numeric input are all `InvalidChoice`.
    pub fn parse(input: &str, len: usize) -> LazydraftResult<Self> {
        let trimmed = input.trim();
        let invalid = || LazydraftError::InvalidChoice {
            input: trimmed.to_string(),
        };

        let number: i64 = trimmed.parse().map_err(|_| invalid())?;
        if number < 1 || number as u64 > len as u64 {
            return Err(invalid());
        }
        Ok(Selection(number as usize))
    }

    /// 1-based number as typed by the user
    pub fn number(&self) -> usize {
        self.0
    }

    /// 0-based index into the list
    pub fn index(&self) -> usize {
        self.0 - 1
    }
}
