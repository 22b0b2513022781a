//! The login-method menu
//!
//! Renders the method menu, collects any supplementary input the chosen flow
//! needs, and hands off to exactly one [`LoginHandlers`] method. The flow's
//! outcome is returned unchanged.

use tracing::debug;

use crate::error::{LoginError, PromptError};
use crate::handlers::LoginHandlers;
use crate::input::read_required;
use crate::method::{LoginMethod, SamlError, offered_methods};
use crate::prompter::Prompter;

/// Default menu title.
pub const DEFAULT_TITLE: &str = "Log in to Stratus";

/// Default login command named by the non-interactive error.
pub const DEFAULT_LOGIN_COMMAND: &str = "stratus login";

/// Interactive login-method menu.
///
/// One [`run`](LoginPrompt::run) call renders the menu once, blocks for a
/// selection, and dispatches. Nothing persists across calls.
pub struct LoginPrompt<P> {
    prompter: P,
    title: String,
    login_command: String,
}

impl<P: Prompter> LoginPrompt<P> {
    pub fn new(prompter: P) -> Self {
        Self {
            prompter,
            title: DEFAULT_TITLE.to_string(),
            login_command: DEFAULT_LOGIN_COMMAND.to_string(),
        }
    }

    /// Override the menu title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Override the command named when interactive prompts are unavailable,
    /// e.g. for a renamed or wrapped binary.
    pub fn with_login_command(mut self, command: impl Into<String>) -> Self {
        self.login_command = command.into();
        self
    }

    /// Run the menu once and dispatch to the selected login flow.
    ///
    /// `saml_error` is a prior SAML failure from an earlier attempt, if any;
    /// when it carries a team id the SSO flow reuses it as the slug without
    /// prompting. `sso_user_id` marks an in-progress SAML profile link and
    /// is forwarded to whichever flow the user picks.
    ///
    /// Menu cancellation (Ctrl-C) propagates as [`LoginError::Cancelled`]
    /// before any flow is invoked.
    pub async fn run<C, H>(
        &mut self,
        client: &mut C,
        handlers: &mut H,
        saml_error: Option<&SamlError>,
        sso_user_id: Option<&str>,
    ) -> Result<H::Output, LoginError<H::Error>>
    where
        H: LoginHandlers<C>,
    {
        let methods = offered_methods(saml_error, sso_user_id);
        let labels: Vec<String> = methods.iter().map(|m| m.label().to_string()).collect();

        let index = self
            .prompter
            .select(&self.title, &labels)
            .map_err(|e| self.lift(e))?;
        let method = methods[index];
        debug!(method = method.short(), "login method selected");

        match method {
            LoginMethod::GitHub => handlers
                .github(client, sso_user_id)
                .await
                .map_err(LoginError::Handler),
            LoginMethod::GitLab => handlers
                .gitlab(client, sso_user_id)
                .await
                .map_err(LoginError::Handler),
            LoginMethod::Bitbucket => handlers
                .bitbucket(client, sso_user_id)
                .await
                .map_err(LoginError::Handler),
            LoginMethod::Email => {
                let email = self.read_required("Enter your email address")?;
                handlers
                    .email(client, &email, sso_user_id)
                    .await
                    .map_err(LoginError::Handler)
            }
            LoginMethod::Sso => {
                // A teamless SAML error suppresses the SSO choice entirely,
                // so a prior error reaching this branch always has the slug.
                let slug = match saml_error.and_then(|e| e.team_id.clone()) {
                    Some(team_id) => team_id,
                    None => self.read_required("Enter your Team slug")?,
                };
                handlers
                    .sso(client, &slug, sso_user_id)
                    .await
                    .map_err(LoginError::Handler)
            }
        }
    }

    fn read_required<E>(&mut self, message: &str) -> Result<String, LoginError<E>> {
        read_required(&mut self.prompter, message).map_err(|e| self.lift(e))
    }

    fn lift<E>(&self, err: PromptError) -> LoginError<E> {
        match err {
            PromptError::NonInteractive => LoginError::NonInteractive {
                command: format!("{} you@domain.com", self.login_command),
            },
            PromptError::Cancelled => LoginError::Cancelled,
            PromptError::Io(io_err) => LoginError::Io(io_err),
        }
    }
}
