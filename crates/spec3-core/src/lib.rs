//! # spec3-core
//!
//! Core types and codec for spec3 - the security slice of the OpenAPI v3 specification.
//!
//! This crate provides the object model for security schemes, OAuth flows and the components
//! container, and a deterministic JSON codec for it: every object is either a `$ref` pointer
//! or an inline definition with fixed fields and `x-` extensions merged into one flat object,
//! and every key-value collection is written sorted by key.

mod builder_macros;
pub mod codec;
pub mod error;
pub mod spec3;

// Re-export main types at the crate root for convenience
pub use codec::{Decode, DecodeOptions, Encode, RefPolicy};
pub use error::{Error, InvalidKeyReason};
pub use spec3::{
    Components, ComponentsProps, Extensible, Extensions, FixedFields, Map, OAuthFlow,
    OAuthFlowKind, OAuthFlowProps, OpenApi, Ref, Refable, SecurityScheme, SecuritySchemeProps,
    SecuritySchemeType,
};
