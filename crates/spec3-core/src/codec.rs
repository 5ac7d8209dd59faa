//! Encode and decode entry points.
//!
//! Every modeled object converts to and from a [`serde_json::Value`] through the [`Encode`]
//! and [`Decode`] traits. Encoding is deterministic: fixed fields come out in their declared
//! order, and every key-value collection comes out sorted by key. Decoding takes a
//! [`DecodeOptions`] that decides how a `$ref` sitting next to inline fields is treated.
//!
//! The `serde` implementations of the model types go through the same traits, using the
//! default options, so `serde_json::to_string` and friends produce identical output.

use serde_json::Value;

use crate::{error::Error, spec3::map::canonical};

/// Converts a value into its encoded JSON form.
pub trait Encode {
    /// Encodes `self` into a JSON value.
    fn encode(&self) -> Result<Value, Error>;

    /// Whether a field holding this value is left out of its parent object.
    ///
    /// Empty strings, empty maps and empty objects are omitted.
    fn skip_encoding(&self) -> bool {
        false
    }
}

/// Reconstructs a value from its encoded JSON form.
pub trait Decode: Sized {
    /// Decodes a JSON value.
    fn decode(value: Value, options: &DecodeOptions) -> Result<Self, Error>;
}

/// How the decoder treats an object carrying both `$ref` and inline fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RefPolicy {
    /// Keep the reference and ignore every other key.
    #[default]
    Lenient,
    /// Fail with [`Error::AmbiguousObject`] when a fixed field sits next to `$ref`.
    Strict,
}

/// Decoder configuration.
///
/// Can be loaded from any serde format; missing keys take their default.
///
/// ```
/// use spec3_core::codec::{DecodeOptions, RefPolicy};
///
/// let options: DecodeOptions = serde_json::from_str(r#"{"refPolicy":"strict"}"#).unwrap();
/// assert_eq!(options, DecodeOptions::new().ref_policy(RefPolicy::Strict));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecodeOptions {
    /// Treatment of `$ref` objects that also carry inline fields.
    pub ref_policy: RefPolicy,
}

impl DecodeOptions {
    /// Creates the default, lenient options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that reject `$ref` objects carrying fixed fields.
    pub fn strict() -> Self {
        Self::new().ref_policy(RefPolicy::Strict)
    }

    /// Sets the reference policy.
    pub fn ref_policy(mut self, ref_policy: RefPolicy) -> Self {
        self.ref_policy = ref_policy;
        self
    }

    /// Whether `$ref` objects with fixed fields are rejected.
    pub fn is_strict(&self) -> bool {
        self.ref_policy == RefPolicy::Strict
    }
}

/// Accumulates the fields of an encoded object in insertion order.
#[derive(Debug, Default)]
pub struct ObjectWriter {
    object: serde_json::Map<String, Value>,
}

impl ObjectWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Writes `name: value` unless the value is omitted by its encoding rule.
    pub fn field<T: Encode + ?Sized>(&mut self, name: &str, value: &T) -> Result<&mut Self, Error> {
        if !value.skip_encoding() {
            let encoded = value.encode().map_err(|err| err.at(name))?;
            self.object.insert(name.to_owned(), encoded);
        }
        Ok(self)
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.object.insert(key.into(), value);
    }

    pub(crate) fn finish(self) -> Value {
        Value::Object(self.object)
    }
}

pub(crate) fn expect_object(value: Value) -> Result<serde_json::Map<String, Value>, Error> {
    match value {
        Value::Object(object) => Ok(object),
        other => Err(Error::malformed("an object", &other)),
    }
}

impl Encode for String {
    fn encode(&self) -> Result<Value, Error> {
        Ok(Value::String(self.clone()))
    }

    fn skip_encoding(&self) -> bool {
        self.is_empty()
    }
}

impl Decode for String {
    fn decode(value: Value, _options: &DecodeOptions) -> Result<Self, Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(Error::malformed("a string", &other)),
        }
    }
}

impl Encode for Value {
    fn encode(&self) -> Result<Value, Error> {
        Ok(canonical::sort_value(self.clone()))
    }
}

impl Decode for Value {
    fn decode(value: Value, _options: &DecodeOptions) -> Result<Self, Error> {
        Ok(value)
    }
}

/// Encodes a value into a JSON value.
pub fn to_value<T: Encode + ?Sized>(value: &T) -> Result<Value, Error> {
    value.encode()
}

/// Encodes a value into compact JSON text.
pub fn to_string<T: Encode + ?Sized>(value: &T) -> Result<String, Error> {
    Ok(serde_json::to_string(&value.encode()?)?)
}

/// Encodes a value into indented JSON text.
pub fn to_string_pretty<T: Encode + ?Sized>(value: &T) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(&value.encode()?)?)
}

/// Encodes a value into compact JSON bytes.
pub fn to_vec<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>, Error> {
    Ok(serde_json::to_vec(&value.encode()?)?)
}

/// Decodes a JSON value with the default options.
pub fn from_value<T: Decode>(value: Value) -> Result<T, Error> {
    from_value_with(value, &DecodeOptions::default())
}

/// Decodes a JSON value with the given options.
pub fn from_value_with<T: Decode>(value: Value, options: &DecodeOptions) -> Result<T, Error> {
    T::decode(value, options)
}

/// Decodes JSON text with the default options.
pub fn from_str<T: Decode>(s: &str) -> Result<T, Error> {
    from_str_with(s, &DecodeOptions::default())
}

/// Decodes JSON text with the given options.
pub fn from_str_with<T: Decode>(s: &str, options: &DecodeOptions) -> Result<T, Error> {
    let value: Value = serde_json::from_str(s)?;
    T::decode(value, options)
}

/// Decodes JSON bytes with the default options.
pub fn from_slice<T: Decode>(bytes: &[u8]) -> Result<T, Error> {
    let value: Value = serde_json::from_slice(bytes)?;
    T::decode(value, &DecodeOptions::default())
}
