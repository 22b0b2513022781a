//! Terminal prompt backends
//!
//! [`Prompter`] is the seam between the menu logic and the terminal, so the
//! dispatch code can be driven by a scripted backend in tests. The
//! production backend renders dialoguer prompts on stderr, matching the rest
//! of the Stratus CLI output.

use std::io;

use console::{Term, user_attended_stderr};
use dialoguer::{Input, Select};

use crate::error::PromptError;

/// Terminal interaction used by [`crate::LoginPrompt`].
pub trait Prompter {
    /// Render a single-select menu and return the index of the chosen item.
    ///
    /// Blocks until the user confirms a selection; there is no default
    /// preselection.
    fn select(&mut self, title: &str, labels: &[String]) -> Result<usize, PromptError>;

    /// Read one line of free-text input. May return an empty string; the
    /// retry policy lives with the caller.
    fn input(&mut self, message: &str) -> Result<String, PromptError>;

    /// Print a blank line for visual separation after a failed read.
    fn blank_line(&mut self);
}

/// Production backend rendering dialoguer prompts on stderr.
pub struct TermPrompter {
    term: Term,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold dialoguer's error into the prompt taxonomy: Ctrl-C surfaces as a
/// cancellation, everything else stays an I/O failure.
fn map_dialoguer(err: dialoguer::Error) -> PromptError {
    match err {
        dialoguer::Error::IO(io_err) if io_err.kind() == io::ErrorKind::Interrupted => {
            PromptError::Cancelled
        }
        dialoguer::Error::IO(io_err) => PromptError::Io(io_err),
    }
}

impl Prompter for TermPrompter {
    fn select(&mut self, title: &str, labels: &[String]) -> Result<usize, PromptError> {
        if !user_attended_stderr() {
            return Err(PromptError::NonInteractive);
        }

        Select::new()
            .with_prompt(title)
            .items(labels)
            .interact_on(&self.term)
            .map_err(map_dialoguer)
    }

    fn input(&mut self, message: &str) -> Result<String, PromptError> {
        if !user_attended_stderr() {
            return Err(PromptError::NonInteractive);
        }

        Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .map_err(map_dialoguer)
    }

    fn blank_line(&mut self) {
        let _ = self.term.write_line("");
    }
}
