//! The delegated login flows
//!
//! [`LoginHandlers`] is the contract between the menu and the actual
//! authentication flows. Each method runs one external flow to completion
//! and yields its outcome; the menu invokes exactly one of them per run.

/// The login flows the menu can dispatch to.
///
/// `C` is the caller's session handle, forwarded verbatim. Implementations
/// own all network and credential side effects; the menu only routes. The
/// `Output` and `Error` types are opaque here and returned to the caller
/// unchanged.
#[allow(async_fn_in_trait)]
pub trait LoginHandlers<C> {
    /// Outcome produced by every flow.
    type Output;

    /// Flow failure, forwarded to the caller unchanged.
    type Error: std::error::Error;

    /// GitHub OAuth/device flow.
    async fn github(
        &mut self,
        client: &mut C,
        sso_user_id: Option<&str>,
    ) -> Result<Self::Output, Self::Error>;

    /// GitLab OAuth/device flow.
    async fn gitlab(
        &mut self,
        client: &mut C,
        sso_user_id: Option<&str>,
    ) -> Result<Self::Output, Self::Error>;

    /// Bitbucket OAuth/device flow.
    async fn bitbucket(
        &mut self,
        client: &mut C,
        sso_user_id: Option<&str>,
    ) -> Result<Self::Output, Self::Error>;

    /// Passwordless email flow. `email` is never empty.
    async fn email(
        &mut self,
        client: &mut C,
        email: &str,
        sso_user_id: Option<&str>,
    ) -> Result<Self::Output, Self::Error>;

    /// SAML single sign-on for `team_slug`. The slug is never empty.
    async fn sso(
        &mut self,
        client: &mut C,
        team_slug: &str,
        sso_user_id: Option<&str>,
    ) -> Result<Self::Output, Self::Error>;
}
