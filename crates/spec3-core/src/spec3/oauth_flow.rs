//! OAuth flow entity.

use super::{map::Map, refable::Refable};
use crate::builder_macros::{build_fn, fixed_fields, from, set_value};

/// Configuration details for a supported OAuth flow, or a reference to one.
pub type OAuthFlow = Refable<OAuthFlowProps>;

fixed_fields! {
    #[derive(Debug, Clone, Default)]
    OAuthFlowPropsBuilder;

    /// Fixed fields of an OAuth flow.
    ///
    /// Which URLs are meaningful depends on the flow kind; the codec writes whatever is
    /// non-empty and never validates them.
    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct OAuthFlowProps as "OAuthFlow" {
        /// The authorization URL (`authorizationUrl`).
        pub authorization_url: String => "authorizationUrl",

        /// The token URL (`tokenUrl`).
        pub token_url: String => "tokenUrl",

        /// The URL for obtaining refresh tokens (`refreshUrl`).
        pub refresh_url: String => "refreshUrl",

        /// Available scopes, keyed by scope name, with a short description each.
        pub scopes: Map<String, String> => "scopes",
    }
}

impl OAuthFlowPropsBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the authorization URL.
    pub fn authorization_url(mut self, authorization_url: impl Into<String>) -> Self {
        set_value!(self authorization_url authorization_url.into())
    }

    /// Sets the token URL.
    pub fn token_url(mut self, token_url: impl Into<String>) -> Self {
        set_value!(self token_url token_url.into())
    }

    /// Sets the refresh URL.
    pub fn refresh_url(mut self, refresh_url: impl Into<String>) -> Self {
        set_value!(self refresh_url refresh_url.into())
    }

    /// Replaces all scopes.
    pub fn scopes(mut self, scopes: Map<String, String>) -> Self {
        set_value!(self scopes scopes)
    }

    /// Adds a single scope.
    pub fn scope(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.scopes.insert(name.into(), description.into());
        self
    }
}

impl From<OAuthFlowProps> for OAuthFlow {
    fn from(props: OAuthFlowProps) -> Self {
        Refable::inline(props)
    }
}

impl From<OAuthFlowPropsBuilder> for OAuthFlow {
    fn from(builder: OAuthFlowPropsBuilder) -> Self {
        Refable::inline(builder.build())
    }
}

/// The OAuth flow names used as keys of a security scheme's `flows`.
///
/// Decoding accepts any key; this enumeration only names the standard ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OAuthFlowKind {
    /// `implicit`
    Implicit,
    /// `password`
    Password,
    /// `clientCredentials`
    ClientCredentials,
    /// `authorizationCode`
    AuthorizationCode,
}

impl OAuthFlowKind {
    /// Returns the encoded flow name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthFlowKind::Implicit => "implicit",
            OAuthFlowKind::Password => "password",
            OAuthFlowKind::ClientCredentials => "clientCredentials",
            OAuthFlowKind::AuthorizationCode => "authorizationCode",
        }
    }
}

impl From<OAuthFlowKind> for String {
    fn from(kind: OAuthFlowKind) -> Self {
        kind.as_str().to_owned()
    }
}
