//! Declaration macros for the fixed-field records.
//!
//! Each record is declared once through [`fixed_fields!`]: the Rust field, its type and its
//! encoded name sit on one line, and the macro derives from that table the struct, its
//! builder, and the [`FixedFields`](crate::spec3::refable::FixedFields) impl. The encoded
//! field list, the encoder and the decoder therefore always agree.

/// Constructs a build function for a builder type.
///
/// Generates a `build()` method that consumes the builder and returns
/// the final struct with all fields transferred.
macro_rules! build_fn {
    ( $vis:vis $name:ident $( $field:ident ),+ ) => {
        #[doc = concat!("Constructs a new [`", stringify!($name),"`] taking all fields values from this object.")]
        $vis fn build(self) -> $name {
            $name {
                $(
                    $field: self.$field,
                )*
            }
        }
    };
}

pub(crate) use build_fn;

/// Sets a field value in a builder using method chaining.
///
/// Returns `self` to enable fluent API.
macro_rules! set_value {
    ( $self:ident $field:ident $value:expr ) => {{
        $self.$field = $value;
        $self
    }};
}

pub(crate) use set_value;

/// Generates `From` implementations between builder and target type.
macro_rules! from {
    ( $builder_name:ident $type_name:ident $( $field:ident ),+ ) => {
        impl From<$builder_name> for $type_name {
            fn from(value: $builder_name) -> Self {
                value.build()
            }
        }

        impl From<$type_name> for $builder_name {
            fn from(value: $type_name) -> Self {
                Self {
                    $( $field: value.$field, )*
                }
            }
        }
    };
}

pub(crate) use from;

/// Declares a fixed-field record from a single field table.
///
/// Generates:
/// 1. The record struct, with its attributes and documented fields
/// 2. A builder struct with the same fields, plus `build()` and `From` conversions both ways
/// 3. A `builder()` constructor on the record
/// 4. The `FixedFields` impl: `KIND`, `FIELDS` in table order, and the encoder and decoder,
///    both dispatching on the encoded names of the table
///
/// The builder must provide its own `new()` and setters.
///
/// # Example
///
/// ```ignore
/// fixed_fields! {
///     #[derive(Debug, Default)]
///     OAuthFlowPropsBuilder;
///
///     #[derive(Debug, Clone, PartialEq, Default)]
///     pub struct OAuthFlowProps as "OAuthFlow" {
///         pub token_url: String => "tokenUrl",
///         pub scopes: Map<String, String> => "scopes",
///     }
/// }
/// ```
macro_rules! fixed_fields {
    (
        $( #[$builder_meta:meta] )* $builder_name:ident;
        $( #[$meta:meta] )* $vis:vis struct $name:ident as $kind:literal {
            $( $( #[$field_meta:meta] )* $field_vis:vis $field:ident: $field_ty:ty => $wire:literal, )*
        }
    ) => {
        $( #[$meta] )*
        $vis struct $name {
            $( $( #[$field_meta] )* $field_vis $field: $field_ty, )*
        }

        impl $name {
            #[doc = concat!("Construct a new ", stringify!($builder_name), ".")]
            #[doc = ""]
            #[doc = concat!("This is effectively same as calling [`", stringify!($builder_name), "::new`]")]
            $vis fn builder() -> $builder_name {
                $builder_name::new()
            }
        }

        $( #[$builder_meta] )*
        $vis struct $builder_name {
            $( $field_vis $field: $field_ty, )*
        }

        impl $builder_name {
            build_fn!($vis $name $( $field ),*);
        }

        from!($builder_name $name $( $field ),*);

        impl $crate::spec3::refable::FixedFields for $name {
            const KIND: &'static str = $kind;

            const FIELDS: &'static [&'static str] = &[ $( $wire ),* ];

            fn encode_fields(
                &self,
                writer: &mut $crate::codec::ObjectWriter,
            ) -> Result<(), $crate::error::Error> {
                $( writer.field($wire, &self.$field)?; )*
                Ok(())
            }

            fn decode_field(
                &mut self,
                name: &str,
                value: ::serde_json::Value,
                options: &$crate::codec::DecodeOptions,
            ) -> Result<(), $crate::error::Error> {
                match name {
                    $( $wire => self.$field = $crate::codec::Decode::decode(value, options)?, )*
                    _ => {}
                }
                Ok(())
            }
        }
    };
}

pub(crate) use fixed_fields;
