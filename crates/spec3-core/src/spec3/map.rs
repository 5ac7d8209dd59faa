//! Map type and the canonical (sorted-by-key) map codec.
//!
//! The in-memory map carries no ordering guarantee. The concrete type depends on the
//! `preserve_order` feature:
//! - When `preserve_order` is enabled: `IndexMap` (iteration follows insertion order)
//! - When disabled (default): `HashMap` (no iteration order)
//!
//! Either way, encoding sorts entries by key using byte-wise string comparison, so two maps
//! holding the same entries always encode to the same bytes.

use serde::Serialize;
use serde_json::Value;

use crate::{
    codec::{Decode, DecodeOptions, Encode, expect_object},
    error::Error,
};

cfg_if::cfg_if! {
    if #[cfg(feature = "preserve_order")] {
        pub use indexmap::IndexMap as Map;
    } else {
        pub use std::collections::HashMap as Map;
    }
}

/// Canonical ordering helpers.
pub mod canonical {
    use serde::{Serialize, Serializer};
    use serde_json::Value;

    use super::Map;

    /// Returns the entries of `map` sorted by key.
    pub fn entries<V>(map: &Map<String, V>) -> Vec<(&String, &V)> {
        let mut entries: Vec<_> = map.iter().collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }

    /// Returns `value` with the keys of every object, at any depth, sorted.
    ///
    /// Array element order is kept.
    pub fn sort_value(value: Value) -> Value {
        match value {
            Value::Object(object) => {
                let mut entries: Vec<_> = object.into_iter().collect();
                entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
                Value::Object(
                    entries
                        .into_iter()
                        .map(|(key, value)| (key, sort_value(value)))
                        .collect(),
                )
            }
            Value::Array(items) => Value::Array(items.into_iter().map(sort_value).collect()),
            other => other,
        }
    }

    /// Serializes `map` with its entries sorted by key.
    ///
    /// Meant for `#[serde(serialize_with = "spec3_core::spec3::map::canonical::serialize")]` on
    /// caller-defined structs holding a [`Map`].
    pub fn serialize<S, V>(map: &Map<String, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        V: Serialize,
    {
        serializer.collect_map(entries(map))
    }
}

/// A serializable, sorted-by-key view over a [`Map`].
#[derive(Debug, Clone, Copy)]
pub struct Sorted<'a, V>(pub &'a Map<String, V>);

impl<V: Serialize> Serialize for Sorted<'_, V> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        canonical::serialize(self.0, serializer)
    }
}

impl<T: Encode> Encode for Map<String, T> {
    fn encode(&self) -> Result<Value, Error> {
        let mut object = serde_json::Map::with_capacity(self.len());
        for (key, value) in canonical::entries(self) {
            let encoded = value.encode().map_err(|err| err.at(key))?;
            object.insert(key.clone(), encoded);
        }
        Ok(Value::Object(object))
    }

    fn skip_encoding(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Decode> Decode for Map<String, T> {
    fn decode(value: Value, options: &DecodeOptions) -> Result<Self, Error> {
        let object = expect_object(value)?;
        let mut map = Map::with_capacity(object.len());
        for (key, value) in object {
            let decoded = T::decode(value, options).map_err(|err| err.at(&key))?;
            map.insert(key, decoded);
        }
        Ok(map)
    }
}
