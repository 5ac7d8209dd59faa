//! Components container for reusable definitions.

use super::{SecurityScheme, map::Map, refable::Extensible};
use crate::builder_macros::{build_fn, fixed_fields, from, set_value};

/// Reusable component definitions, with extensions.
pub type Components = Extensible<ComponentsProps>;

fixed_fields! {
    #[derive(Debug, Clone, Default)]
    ComponentsPropsBuilder;

    /// The named collections held by [`Components`].
    ///
    /// Collections can be referenced from elsewhere in the document through `$ref` pointers such
    /// as `#/components/securitySchemes/basic`.
    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct ComponentsProps as "Components" {
        /// Reusable security scheme definitions.
        pub security_schemes: Map<String, SecurityScheme> => "securitySchemes",
    }
}

impl ComponentsPropsBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all security schemes.
    pub fn security_schemes(mut self, security_schemes: Map<String, SecurityScheme>) -> Self {
        set_value!(self security_schemes security_schemes)
    }

    /// Adds a single security scheme.
    pub fn security_scheme(
        mut self,
        name: impl Into<String>,
        security_scheme: impl Into<SecurityScheme>,
    ) -> Self {
        self.security_schemes
            .insert(name.into(), security_scheme.into());
        self
    }
}

impl From<ComponentsPropsBuilder> for Components {
    fn from(builder: ComponentsPropsBuilder) -> Self {
        Extensible::new(builder.build())
    }
}
