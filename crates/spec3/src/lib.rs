//! # spec3
//!
//! OpenAPI v3 security scheme object model with a deterministic JSON codec.
//!
//! This crate provides the main API, re-exporting all types from the `spec3-core` crate
//! together with the encode/decode entry points.
//!
//! ```
//! use spec3::{OAuthFlowKind, OAuthFlowProps, SecurityScheme, SecuritySchemeProps};
//!
//! let scheme: SecurityScheme = SecuritySchemeProps::builder()
//!     .scheme_type("oauth2")
//!     .flow(
//!         OAuthFlowKind::Implicit,
//!         OAuthFlowProps::builder()
//!             .authorization_url("https://example.com/api/oauth/dialog")
//!             .scope("write:pets", "modify pets in your account")
//!             .scope("read:pets", "read your pets"),
//!     )
//!     .into();
//!
//! assert_eq!(
//!     spec3::to_string(&scheme).unwrap(),
//!     r#"{"type":"oauth2","flows":{"implicit":{"authorizationUrl":"https://example.com/api/oauth/dialog","scopes":{"read:pets":"read your pets","write:pets":"modify pets in your account"}}}}"#,
//! );
//! ```

// Re-export the codec module for access to the traits and the `ObjectWriter`
pub use spec3_core::codec;
// Re-export the spec3 module for access to builders and internal types
pub use spec3_core::spec3;
// Re-export all main types at the crate root for convenience
pub use spec3_core::{
    Components, ComponentsProps, Decode, DecodeOptions, Encode, Error, Extensible, Extensions,
    FixedFields, InvalidKeyReason, Map, OAuthFlow, OAuthFlowKind, OAuthFlowProps, OpenApi, Ref,
    RefPolicy, Refable, SecurityScheme, SecuritySchemeProps, SecuritySchemeType,
};
// Re-export the entry points at the crate root
pub use spec3_core::codec::{
    from_slice, from_str, from_str_with, from_value, from_value_with, to_string,
    to_string_pretty, to_value, to_vec,
};
