//! Login methods and the SSO suppression rule
//!
//! The menu offers a fixed, ordered set of methods with SSO last, so the
//! suppression rule can drop it without reshuffling the list.

/// An authentication method offered by the login menu, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginMethod {
    GitHub,
    GitLab,
    Bitbucket,
    Email,
    Sso,
}

impl LoginMethod {
    /// Full menu, in render order. SSO is last by contract.
    pub const MENU: [LoginMethod; 5] = [
        LoginMethod::GitHub,
        LoginMethod::GitLab,
        LoginMethod::Bitbucket,
        LoginMethod::Email,
        LoginMethod::Sso,
    ];

    /// Label shown in the menu.
    pub fn label(self) -> &'static str {
        match self {
            LoginMethod::GitHub => "Continue with GitHub",
            LoginMethod::GitLab => "Continue with GitLab",
            LoginMethod::Bitbucket => "Continue with Bitbucket",
            LoginMethod::Email => "Continue with Email",
            LoginMethod::Sso => "Continue with SAML Single Sign-On",
        }
    }

    /// Short identifier used in log events.
    pub fn short(self) -> &'static str {
        match self {
            LoginMethod::GitHub => "github",
            LoginMethod::GitLab => "gitlab",
            LoginMethod::Bitbucket => "bitbucket",
            LoginMethod::Email => "email",
            LoginMethod::Sso => "sso",
        }
    }
}

/// A previous SAML failure handed down by the caller.
///
/// When `team_id` is set, the SSO flow reuses it as the team slug without
/// prompting. When it is absent the failure belonged to a user or team
/// without SAML, and the SSO choice is withheld entirely.
#[derive(Debug, Clone, Default)]
pub struct SamlError {
    pub team_id: Option<String>,
}

/// Build the method list offered for one invocation.
///
/// SSO is dropped when the caller is already resolving a SAML profile link
/// (`sso_user_id` set), or when a prior SAML failure carries no team.
pub(crate) fn offered_methods(
    saml_error: Option<&SamlError>,
    sso_user_id: Option<&str>,
) -> Vec<LoginMethod> {
    let mut methods = LoginMethod::MENU.to_vec();

    let teamless_error = saml_error.is_some_and(|e| e.team_id.is_none());
    if sso_user_id.is_some() || teamless_error {
        methods.pop();
    }

    methods
}
