//! Reference wrapper pointing to another definition.

use std::fmt;

/// The key under which a reference is encoded.
pub const REF_KEY: &str = "$ref";

/// A pointer to a definition held elsewhere (e.g. `#/components/securitySchemes/basic`).
///
/// An empty path means "no reference": the owning object is encoded with its inline fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct Ref {
    /// The reference path to the definition.
    #[serde(rename = "$ref")]
    pub ref_path: String,
}

impl Ref {
    /// Creates a new reference.
    pub fn new(ref_path: impl Into<String>) -> Self {
        Self {
            ref_path: ref_path.into(),
        }
    }

    /// Whether the reference points anywhere.
    pub fn is_set(&self) -> bool {
        !self.ref_path.is_empty()
    }

    /// Returns the reference path.
    pub fn as_str(&self) -> &str {
        &self.ref_path
    }
}

impl fmt::Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ref_path)
    }
}
