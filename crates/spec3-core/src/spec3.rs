//! OpenAPI v3 object model.
//!
//! This module provides the security slice of an OpenAPI v3 document: security schemes, OAuth
//! flows and the components container holding them, plus the document root. Every object is
//! either a `$ref` pointer or an inline definition whose fixed fields and `x-` extensions are
//! merged into one flat JSON object.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
use serde_json::Value;

use crate::{
    codec::{Decode, DecodeOptions, Encode, ObjectWriter, expect_object},
    error::Error,
};

pub mod components;
pub mod extensions;
pub mod map;
pub mod oauth_flow;
pub mod refable;
pub mod reference;
pub mod security_scheme;

pub use self::{
    components::{Components, ComponentsProps, ComponentsPropsBuilder},
    extensions::Extensions,
    map::{Map, Sorted},
    oauth_flow::{OAuthFlow, OAuthFlowKind, OAuthFlowProps, OAuthFlowPropsBuilder},
    refable::{Extensible, FixedFields, Refable},
    reference::{REF_KEY, Ref},
    security_scheme::{
        SecurityScheme, SecuritySchemeProps, SecuritySchemePropsBuilder, SecuritySchemeType,
    },
};

/// The root object of an OpenAPI document.
///
/// Only the `components` section is modeled.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenApi {
    /// The OpenAPI version (`"3.0.0"` for documents created here).
    pub openapi: String,

    /// Reusable component definitions. Omitted when empty.
    pub components: Components,
}

impl OpenApi {
    /// The version written by [`OpenApi::new`].
    pub const VERSION: &'static str = "3.0.0";

    /// Creates a new document with empty components.
    pub fn new() -> Self {
        Self {
            openapi: Self::VERSION.to_string(),
            components: Components::default(),
        }
    }

    /// Sets the components.
    pub fn components(mut self, components: impl Into<Components>) -> Self {
        self.components = components.into();
        self
    }
}

impl Default for OpenApi {
    fn default() -> Self {
        Self::new()
    }
}

impl Encode for OpenApi {
    fn encode(&self) -> Result<Value, Error> {
        let mut writer = ObjectWriter::new();
        writer
            .field("openapi", &self.openapi)?
            .field("components", &self.components)?;
        Ok(writer.finish())
    }
}

impl Decode for OpenApi {
    fn decode(value: Value, options: &DecodeOptions) -> Result<Self, Error> {
        let mut document = OpenApi {
            openapi: String::new(),
            components: Components::default(),
        };
        for (key, value) in expect_object(value)? {
            match key.as_str() {
                "openapi" => {
                    document.openapi = Decode::decode(value, options).map_err(|err| err.at(&key))?
                }
                "components" => {
                    document.components =
                        Decode::decode(value, options).map_err(|err| err.at(&key))?
                }
                _ => tracing::trace!(%key, "dropping unmodeled document key"),
            }
        }
        Ok(document)
    }
}

impl Serialize for OpenApi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.encode()
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OpenApi {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::decode(value, &DecodeOptions::default()).map_err(de::Error::custom)
    }
}
