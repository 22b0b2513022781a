//! Error taxonomy for the login menu
//!
//! Two layers: [`PromptError`] is what a [`crate::Prompter`] backend reports,
//! [`LoginError`] is what [`crate::LoginPrompt::run`] surfaces to the caller.
//! Flow failures are forwarded unchanged so outer layers don't double-report.

use std::io;

use thiserror::Error;

/// Failures reported by a prompt backend.
#[derive(Debug, Error)]
pub enum PromptError {
    /// No terminal is attached; interactive prompts cannot run at all.
    #[error("interactive prompts are not supported in this terminal")]
    NonInteractive,

    /// The user aborted the prompt (Ctrl-C).
    #[error("prompt cancelled")]
    Cancelled,

    /// Any other terminal I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Failures surfaced by [`crate::LoginPrompt::run`].
///
/// `E` is the error type of the caller's [`crate::LoginHandlers`]
/// implementation, forwarded without wrapping.
#[derive(Debug, Error)]
pub enum LoginError<E> {
    /// Interactive prompts are unavailable. The message names the explicit
    /// non-interactive login form so scripts and CI have a way out.
    #[error("Interactive mode not supported: run `{command}` instead")]
    NonInteractive {
        /// Full remediation command, e.g. `stratus login you@domain.com`.
        command: String,
    },

    /// The user aborted the method menu.
    #[error("login cancelled")]
    Cancelled,

    /// Terminal I/O failed while rendering the menu.
    #[error(transparent)]
    Io(io::Error),

    /// The selected login flow failed.
    #[error(transparent)]
    Handler(E),
}
