//! Error types returned by the encode and decode entry points.

use serde_json::Value;

/// Errors produced while encoding or decoding specification objects.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An extension key failed the `x-` prefix check, or collides with a fixed field name.
    #[error("invalid extension key `{key}`: {reason}")]
    InvalidKey {
        /// The offending key.
        key: String,
        /// Why the key was rejected.
        reason: InvalidKeyReason,
    },

    /// A value does not have the shape its field expects.
    #[error("malformed value at `{path}`: {message}")]
    MalformedValue {
        /// Dotted path to the value, rooted at `$`.
        path: String,
        /// What was expected and what was found.
        message: String,
    },

    /// A `$ref` object also carries fixed fields (strict decoding only).
    #[error("ambiguous object at `{path}`: `$ref` appears together with field `{field}`")]
    AmbiguousObject {
        /// Dotted path to the object, rooted at `$`.
        path: String,
        /// The first fixed field found next to `$ref`.
        field: String,
    },

    /// The input text is not valid JSON, or the output could not be written.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The reason an extension key was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidKeyReason {
    /// The key does not start with the reserved `x-` prefix.
    #[error("extension keys must start with `x-`")]
    MissingPrefix,
    /// The key is also the name of a fixed field of the owning object.
    #[error("the key is also a fixed field name")]
    CollidesWithField,
}

impl Error {
    pub(crate) fn invalid_key(key: impl Into<String>, reason: InvalidKeyReason) -> Self {
        Error::InvalidKey {
            key: key.into(),
            reason,
        }
    }

    /// A value of the wrong JSON type was found where `expected` was required.
    pub(crate) fn malformed(expected: &str, found: &Value) -> Self {
        Error::MalformedValue {
            path: ROOT.to_owned(),
            message: format!("expected {expected}, found {}", kind_of(found)),
        }
    }

    pub(crate) fn ambiguous(field: impl Into<String>) -> Self {
        Error::AmbiguousObject {
            path: ROOT.to_owned(),
            field: field.into(),
        }
    }

    /// Prefixes the error path with `segment`.
    ///
    /// Decoders call this while unwinding, so the outermost segment ends up first.
    pub(crate) fn at(mut self, segment: &str) -> Self {
        if let Error::MalformedValue { path, .. } | Error::AmbiguousObject { path, .. } = &mut self {
            path.insert_str(ROOT.len(), &format!(".{segment}"));
        }
        self
    }
}

const ROOT: &str = "$";

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
