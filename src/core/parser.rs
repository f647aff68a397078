// Turns a raw utterance into a command keyword plus its arguments
//
// No quoting, no escaping: whitespace splits everything.

use crate::error::{AssistantError, Result};

/// A normalized command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// First token, lower-cased
    pub command: String,
    /// Remaining tokens in order; empty when none were given
    pub args: Vec<String>,
}

impl ParsedCommand {
    /// Arguments joined back with single spaces
    pub fn rest(&self) -> String {
        self.args.join(" ")
    }
}

/// Parse one line of input.
///
/// Blank input is the only failure (`AssistantError::EmptyInput`).
pub fn parse(input: &str) -> Result<ParsedCommand> {
    let lowered = input.trim().to_lowercase();
    let mut tokens = lowered.split_whitespace().map(str::to_string);

    let command = tokens.next().ok_or(AssistantError::EmptyInput)?;

    Ok(ParsedCommand {
        command,
        args: tokens.collect(),
    })
}
