//! Security scheme entity.

use super::{
    map::Map,
    oauth_flow::{OAuthFlow, OAuthFlowKind},
    refable::Refable,
};
use crate::builder_macros::{build_fn, fixed_fields, from, set_value};

/// A security scheme that can be used by the operations, or a reference to one.
pub type SecurityScheme = Refable<SecuritySchemeProps>;

fixed_fields! {
    #[derive(Debug, Clone, Default)]
    SecuritySchemePropsBuilder;

    /// Fixed fields of a security scheme.
    ///
    /// Every field is omitted from the encoded object when empty. Field values are never
    /// validated here: `type` may hold anything, and a `flows` map on an `http` scheme is
    /// encoded as-is.
    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct SecuritySchemeProps as "SecurityScheme" {
        /// The type of the security scheme (`http`, `oauth2`, `apiKey`, `openIdConnect`).
        pub scheme_type: String => "type",

        /// The HTTP authorization scheme, e.g. `basic` or `bearer`.
        pub scheme: String => "scheme",

        /// A hint to the client about how the bearer token is formatted, e.g. `JWT`.
        pub bearer_format: String => "bearerFormat",

        /// Configuration for the supported OAuth flows, keyed by flow name.
        pub flows: Map<String, OAuthFlow> => "flows",

        /// OpenID Connect URL to discover OAuth2 configuration values.
        pub open_id_connect_url: String => "openIdConnectUrl",

        /// A short description for the security scheme.
        pub description: String => "description",

        /// The name of the header, query or cookie parameter (`apiKey` schemes).
        pub name: String => "name",

        /// The location of the API key: `query`, `header` or `cookie` (`in`).
        pub location: String => "in",
    }
}

impl SecuritySchemePropsBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scheme type.
    pub fn scheme_type(mut self, scheme_type: impl Into<String>) -> Self {
        set_value!(self scheme_type scheme_type.into())
    }

    /// Sets the HTTP authorization scheme.
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        set_value!(self scheme scheme.into())
    }

    /// Sets the bearer format.
    pub fn bearer_format(mut self, bearer_format: impl Into<String>) -> Self {
        set_value!(self bearer_format bearer_format.into())
    }

    /// Replaces all flows.
    pub fn flows(mut self, flows: Map<String, OAuthFlow>) -> Self {
        set_value!(self flows flows)
    }

    /// Adds a single flow.
    pub fn flow(mut self, kind: OAuthFlowKind, flow: impl Into<OAuthFlow>) -> Self {
        self.flows.insert(kind.into(), flow.into());
        self
    }

    /// Sets the OpenID Connect URL.
    pub fn open_id_connect_url(mut self, open_id_connect_url: impl Into<String>) -> Self {
        set_value!(self open_id_connect_url open_id_connect_url.into())
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        set_value!(self description description.into())
    }

    /// Sets the parameter name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        set_value!(self name name.into())
    }

    /// Sets the API key location.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        set_value!(self location location.into())
    }
}

impl From<SecuritySchemeProps> for SecurityScheme {
    fn from(props: SecuritySchemeProps) -> Self {
        Refable::inline(props)
    }
}

impl From<SecuritySchemePropsBuilder> for SecurityScheme {
    fn from(builder: SecuritySchemePropsBuilder) -> Self {
        Refable::inline(builder.build())
    }
}

/// The standard security scheme types.
///
/// Convenience names for [`SecuritySchemeProps::scheme_type`]; the codec accepts any string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecuritySchemeType {
    /// `http`
    Http,
    /// `oauth2`
    OAuth2,
    /// `apiKey`
    ApiKey,
    /// `openIdConnect`
    OpenIdConnect,
}

impl SecuritySchemeType {
    /// Returns the encoded type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SecuritySchemeType::Http => "http",
            SecuritySchemeType::OAuth2 => "oauth2",
            SecuritySchemeType::ApiKey => "apiKey",
            SecuritySchemeType::OpenIdConnect => "openIdConnect",
        }
    }
}

impl From<SecuritySchemeType> for String {
    fn from(scheme_type: SecuritySchemeType) -> Self {
        scheme_type.as_str().to_owned()
    }
}
