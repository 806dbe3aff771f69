//! Terminal input and output for the CLI

pub mod output;
pub mod prompt;
