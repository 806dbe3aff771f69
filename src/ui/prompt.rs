//! Reading a choice from the user
//!
//! A value given on the command line wins. Otherwise a terminal gets a
//! dialoguer prompt and piped stdin is read one line at a time.

use std::io::{self, BufRead};

use dialoguer::{Confirm, Input};
use is_terminal::IsTerminal;

use lazydraft::LazydraftError;

/// The choice passed as an argument, or one read from the user.
pub fn read_choice(given: Option<String>, prompt: &str) -> Result<String, LazydraftError> {
    if let Some(value) = given {
        return Ok(value);
    }

    if io::stdin().is_terminal() {
        return Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| LazydraftError::Prompt {
                message: e.to_string(),
            });
    }

    eprintln!("{}: ", prompt);
    read_line(&mut io::stdin().lock())
}

/// Ask a yes/no question, defaulting to no.
pub fn confirm(prompt: &str) -> Result<bool, LazydraftError> {
    if io::stdin().is_terminal() {
        return Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| LazydraftError::Prompt {
                message: e.to_string(),
            });
    }

    eprintln!("{} [y/N]: ", prompt);
    let answer = read_line(&mut io::stdin().lock())?;
    Ok(is_yes(&answer))
}

fn read_line(reader: &mut impl BufRead) -> Result<String, LazydraftError> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| LazydraftError::Prompt {
            message: e.to_string(),
        })?;
    Ok(line.trim().to_string())
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
