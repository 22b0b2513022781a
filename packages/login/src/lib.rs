//! Interactive login-method menu for the Stratus CLI
//!
//! Renders the "Log in to Stratus" menu, collects any supplementary input a
//! flow needs (an email address or a team slug), and dispatches to exactly
//! one of the caller's login flows. The flows themselves (OAuth, email link,
//! SAML) stay with the caller behind the [`LoginHandlers`] trait; this crate
//! only routes.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! # struct Session;
//! # struct Flows;
//! # impl stratus_login::LoginHandlers<Session> for Flows {
//! #     type Output = i32;
//! #     type Error = std::io::Error;
//! #     async fn github(&mut self, _: &mut Session, _: Option<&str>) -> Result<i32, Self::Error> { Ok(0) }
//! #     async fn gitlab(&mut self, _: &mut Session, _: Option<&str>) -> Result<i32, Self::Error> { Ok(0) }
//! #     async fn bitbucket(&mut self, _: &mut Session, _: Option<&str>) -> Result<i32, Self::Error> { Ok(0) }
//! #     async fn email(&mut self, _: &mut Session, _: &str, _: Option<&str>) -> Result<i32, Self::Error> { Ok(0) }
//! #     async fn sso(&mut self, _: &mut Session, _: &str, _: Option<&str>) -> Result<i32, Self::Error> { Ok(0) }
//! # }
//! use stratus_login::{LoginPrompt, TermPrompter};
//!
//! let mut session = Session;
//! let mut flows = Flows;
//! let mut prompt = LoginPrompt::new(TermPrompter::new());
//! let _outcome = prompt.run(&mut session, &mut flows, None, None).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod handlers;
mod input;
mod method;
mod prompt;
mod prompter;

pub use error::{LoginError, PromptError};
pub use handlers::LoginHandlers;
pub use method::{LoginMethod, SamlError};
pub use prompt::{DEFAULT_LOGIN_COMMAND, DEFAULT_TITLE, LoginPrompt};
pub use prompter::{Prompter, TermPrompter};
