//! Composite objects: reference-or-inline, fixed fields and extensions.
//!
//! An inline object is an [`Extensible`]: a fixed-field record plus an extension bag, merged
//! into one flat encoded object. A [`Refable`] is either a reference or such an inline object.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
use serde_json::Value;

use super::{
    extensions::Extensions,
    reference::{REF_KEY, Ref},
};
use crate::{
    codec::{Decode, DecodeOptions, Encode, ObjectWriter, expect_object},
    error::Error,
};

/// The statically known fields of one object kind.
pub trait FixedFields: Default + PartialEq {
    /// Object kind name, used in log events.
    const KIND: &'static str;

    /// Encoded field names, in declared order.
    const FIELDS: &'static [&'static str];

    /// Writes every non-omitted field, in declared order.
    fn encode_fields(&self, writer: &mut ObjectWriter) -> Result<(), Error>;

    /// Decodes the field `name`, which is always one of [`FixedFields::FIELDS`].
    fn decode_field(
        &mut self,
        name: &str,
        value: Value,
        options: &DecodeOptions,
    ) -> Result<(), Error>;
}

/// An inline object: fixed fields plus vendor extensions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Extensible<P> {
    /// The fixed fields.
    pub props: P,

    /// Extension properties.
    pub extensions: Extensions,
}

impl<P> Extensible<P> {
    /// Creates an inline object without extensions.
    pub fn new(props: P) -> Self {
        Self {
            props,
            extensions: Extensions::new(),
        }
    }

    /// Sets the extensions.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = extensions;
        self
    }
}

impl<P: FixedFields> Extensible<P> {
    pub(crate) fn decode_object(
        object: serde_json::Map<String, Value>,
        options: &DecodeOptions,
    ) -> Result<Self, Error> {
        let mut props = P::default();
        let mut extensions = Extensions::new();
        for (key, value) in object {
            if P::FIELDS.contains(&key.as_str()) {
                props
                    .decode_field(&key, value, options)
                    .map_err(|err| err.at(&key))?;
            } else if Extensions::is_extension_key(&key) {
                extensions.insert_unchecked(key, value);
            } else {
                tracing::trace!(kind = P::KIND, %key, "dropping unknown key");
            }
        }
        Ok(Self { props, extensions })
    }
}

impl<P> From<P> for Extensible<P> {
    fn from(props: P) -> Self {
        Self::new(props)
    }
}

impl<P: FixedFields> Encode for Extensible<P> {
    fn encode(&self) -> Result<Value, Error> {
        self.extensions.check_collisions(P::FIELDS)?;

        let mut writer = ObjectWriter::new();
        self.props.encode_fields(&mut writer)?;
        for (key, value) in self.extensions.sorted_entries() {
            writer.insert(key, value);
        }
        Ok(writer.finish())
    }

    fn skip_encoding(&self) -> bool {
        self.extensions.is_empty() && self.props == P::default()
    }
}

impl<P: FixedFields> Decode for Extensible<P> {
    fn decode(value: Value, options: &DecodeOptions) -> Result<Self, Error> {
        Self::decode_object(expect_object(value)?, options)
    }
}

/// Either a reference to a definition held elsewhere, or an inline definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Refable<P> {
    /// A reference. When set, it is the only thing encoded.
    ///
    /// An unset (empty) reference encodes to `{}` and therefore decodes back as
    /// `Refable::default()`, not as `Refable::Ref`. [`Refable::new_ref`] never builds one.
    Ref(Ref),
    /// An inline definition.
    Inline(Extensible<P>),
}

impl<P: Default> Refable<P> {
    /// Creates a new reference.
    ///
    /// An empty path is no reference at all and yields an empty inline definition, the value
    /// it would decode to.
    pub fn new_ref(ref_path: impl Into<String>) -> Self {
        let reference = Ref::new(ref_path);
        if reference.is_set() {
            Refable::Ref(reference)
        } else {
            Self::default()
        }
    }
}

impl<P> Refable<P> {

    /// Creates a new inline definition without extensions.
    pub fn inline(props: P) -> Self {
        Refable::Inline(Extensible::new(props))
    }

    /// Whether this is a reference that points somewhere.
    pub fn is_ref(&self) -> bool {
        matches!(self, Refable::Ref(reference) if reference.is_set())
    }

    /// Returns the reference, if any.
    pub fn reference(&self) -> Option<&Ref> {
        match self {
            Refable::Ref(reference) => Some(reference),
            Refable::Inline(_) => None,
        }
    }

    /// Returns the fixed fields of an inline definition.
    pub fn props(&self) -> Option<&P> {
        match self {
            Refable::Ref(_) => None,
            Refable::Inline(inline) => Some(&inline.props),
        }
    }

    /// Returns the extensions of an inline definition.
    pub fn extensions(&self) -> Option<&Extensions> {
        match self {
            Refable::Ref(_) => None,
            Refable::Inline(inline) => Some(&inline.extensions),
        }
    }

    /// Returns the extensions of an inline definition for modification.
    pub fn extensions_mut(&mut self) -> Option<&mut Extensions> {
        match self {
            Refable::Ref(_) => None,
            Refable::Inline(inline) => Some(&mut inline.extensions),
        }
    }
}

impl<P: Default> Default for Refable<P> {
    fn default() -> Self {
        Refable::Inline(Extensible::new(P::default()))
    }
}

impl<P> From<Ref> for Refable<P> {
    fn from(reference: Ref) -> Self {
        Refable::Ref(reference)
    }
}

impl<P> From<Extensible<P>> for Refable<P> {
    fn from(inline: Extensible<P>) -> Self {
        Refable::Inline(inline)
    }
}

impl<P: FixedFields> Encode for Refable<P> {
    fn encode(&self) -> Result<Value, Error> {
        match self {
            Refable::Ref(reference) if reference.is_set() => {
                let mut writer = ObjectWriter::new();
                writer.insert(REF_KEY, Value::String(reference.ref_path.clone()));
                Ok(writer.finish())
            }
            // An unset reference carries no inline data either
            Refable::Ref(_) => Ok(ObjectWriter::new().finish()),
            Refable::Inline(inline) => inline.encode(),
        }
    }
}

impl<P: FixedFields> Decode for Refable<P> {
    fn decode(value: Value, options: &DecodeOptions) -> Result<Self, Error> {
        let mut object = expect_object(value)?;
        match object.remove(REF_KEY) {
            Some(Value::String(ref_path)) if !ref_path.is_empty() => {
                if let Some(field) = object.keys().find(|key| P::FIELDS.contains(&key.as_str())) {
                    if options.is_strict() {
                        return Err(Error::ambiguous(field.as_str()));
                    }
                }
                if !object.is_empty() {
                    tracing::debug!(
                        kind = P::KIND,
                        %ref_path,
                        ignored = object.len(),
                        "ignoring keys next to $ref"
                    );
                }
                Ok(Refable::Ref(Ref::new(ref_path)))
            }
            Some(Value::String(_)) => {
                tracing::trace!(kind = P::KIND, "dropping empty $ref");
                Extensible::decode_object(object, options).map(Refable::Inline)
            }
            Some(other) => Err(Error::malformed("a string", &other).at(REF_KEY)),
            None => Extensible::decode_object(object, options).map(Refable::Inline),
        }
    }
}

macro_rules! serde_via_codec {
    ($ty:ident) => {
        impl<P: FixedFields> Serialize for $ty<P> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.encode()
                    .map_err(ser::Error::custom)?
                    .serialize(serializer)
            }
        }

        impl<'de, P: FixedFields> Deserialize<'de> for $ty<P> {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = Value::deserialize(deserializer)?;
                Self::decode(value, &DecodeOptions::default()).map_err(de::Error::custom)
            }
        }
    };
}

serde_via_codec!(Extensible);
serde_via_codec!(Refable);
