//! Extension support for the specification objects.
//!
//! Extensions allow vendor-specific properties (`x-something`) to be added to any inline object.
//! They are merged flat into the owning object on encode, after its fixed fields.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
use serde_json::Value;

use super::map::{Map, canonical};
use crate::{
    codec::{Decode, DecodeOptions, Encode, expect_object},
    error::{Error, InvalidKeyReason},
};

/// A bag of extension properties.
///
/// Keys always start with [`Extensions::PREFIX`]; values can be any JSON value. An empty bag
/// encodes to nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Extensions {
    entries: Map<String, Value>,
}

impl Extensions {
    /// The reserved prefix every extension key starts with.
    pub const PREFIX: &'static str = "x-";

    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` is in the reserved extension namespace.
    pub fn is_extension_key(key: &str) -> bool {
        key.starts_with(Self::PREFIX)
    }

    /// Inserts an extension, returning the value it replaced.
    ///
    /// Fails with [`Error::InvalidKey`] if `key` does not start with `x-`.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, Error> {
        let key = key.into();
        if !Self::is_extension_key(&key) {
            return Err(Error::invalid_key(key, InvalidKeyReason::MissingPrefix));
        }
        Ok(self.entries.insert(key, value.into()))
    }

    /// Inserts an extension and returns the bag, for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Self, Error> {
        self.set(key, value)?;
        Ok(self)
    }

    /// Returns the value of an extension.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Whether the bag holds `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of extensions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag holds no extensions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the extensions in storage order (see [`Map`]).
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Returns the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    /// Fails with [`Error::InvalidKey`] if any extension key is also one of `fields`.
    pub fn check_collisions(&self, fields: &[&str]) -> Result<(), Error> {
        match canonical::entries(&self.entries)
            .into_iter()
            .find(|(key, _)| fields.contains(&key.as_str()))
        {
            Some((key, _)) => Err(Error::invalid_key(
                key.as_str(),
                InvalidKeyReason::CollidesWithField,
            )),
            None => Ok(()),
        }
    }

    /// Inserts a decoded entry whose key the caller already checked against the prefix.
    ///
    /// Nested object keys are stored sorted, so the input key order is not retained.
    pub(crate) fn insert_unchecked(&mut self, key: String, value: Value) {
        debug_assert!(Self::is_extension_key(&key));
        self.entries.insert(key, canonical::sort_value(value));
    }

    /// Returns every extension sorted by key, with nested object keys sorted too.
    pub(crate) fn sorted_entries(&self) -> impl Iterator<Item = (String, Value)> {
        canonical::entries(&self.entries)
            .into_iter()
            .map(|(key, value)| (key.clone(), canonical::sort_value(value.clone())))
    }
}

impl TryFrom<Map<String, Value>> for Extensions {
    type Error = Error;

    fn try_from(entries: Map<String, Value>) -> Result<Self, Self::Error> {
        if let Some(key) = entries.keys().find(|key| !Self::is_extension_key(key)) {
            return Err(Error::invalid_key(
                key.as_str(),
                InvalidKeyReason::MissingPrefix,
            ));
        }
        Ok(Self { entries })
    }
}

impl Encode for Extensions {
    fn encode(&self) -> Result<Value, Error> {
        Ok(Value::Object(self.sorted_entries().collect()))
    }

    fn skip_encoding(&self) -> bool {
        self.is_empty()
    }
}

impl Decode for Extensions {
    fn decode(value: Value, _options: &DecodeOptions) -> Result<Self, Error> {
        let mut extensions = Self::new();
        for (key, value) in expect_object(value)? {
            if Self::is_extension_key(&key) {
                extensions.insert_unchecked(key, value);
            } else {
                tracing::trace!(%key, "dropping non-extension key");
            }
        }
        Ok(extensions)
    }
}

impl Serialize for Extensions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.encode()
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Extensions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::decode(value, &DecodeOptions::default()).map_err(de::Error::custom)
    }
}
