//! Free-text input with a retry-until-non-empty policy
//!
//! The email address and team slug prompts share this loop: keep asking
//! until the user provides a non-empty value. The only condition that stops
//! the loop is a non-interactive terminal, which is surfaced immediately so
//! the caller can point at the non-interactive login form instead.

use crate::error::PromptError;
use crate::prompter::Prompter;

/// What to do after one read attempt.
#[derive(Debug)]
enum ReadOutcome {
    /// Non-empty value accepted, trimmed.
    Accept(String),
    /// Empty value or transient failure; prompt again. `separator` asks for
    /// a blank line first (failed reads only, so empty submissions re-prompt
    /// in place).
    Retry { separator: bool },
    /// Non-interactive terminal; stop without retrying.
    Abort,
}

fn classify_attempt(attempt: Result<String, PromptError>) -> ReadOutcome {
    match attempt {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                ReadOutcome::Retry { separator: false }
            } else {
                ReadOutcome::Accept(trimmed.to_string())
            }
        }
        Err(PromptError::NonInteractive) => ReadOutcome::Abort,
        Err(_) => ReadOutcome::Retry { separator: true },
    }
}

/// Prompt until the user provides a non-empty value.
///
/// Transient failures retry without limit; a non-interactive terminal aborts
/// on the first attempt.
pub(crate) fn read_required<P: Prompter>(
    prompter: &mut P,
    message: &str,
) -> Result<String, PromptError> {
    loop {
        match classify_attempt(prompter.input(message)) {
            ReadOutcome::Accept(value) => return Ok(value),
            ReadOutcome::Retry { separator } => {
                if separator {
                    prompter.blank_line();
                }
            }
            ReadOutcome::Abort => return Err(PromptError::NonInteractive),
        }
    }
}
