//! Errors raised by registration and text decoding.

use thiserror::Error;

/// Error from registering or decoding an enumeration value.
#[derive(Debug, Error)]
pub enum EnumError {
    /// The ordinal type cannot represent another value.
    ///
    /// Only [`try_register`](crate::DescriptorRegistry::try_register) returns
    /// this; `register` treats it as a mis-declaration and panics.
    #[error(
        "enum type `{type_name}` exceeded capacity: at most {capacity} values can be registered"
    )]
    CapacityExceeded {
        type_name: &'static str,
        capacity: u64,
    },

    /// The decoded name was never registered for the ordinal type.
    #[error("no value named {name:?} is registered for enum type `{type_name}`")]
    UnknownName {
        type_name: &'static str,
        name: String,
    },

    /// The input was not a quoted string token.
    #[error("malformed enum text token: {0}")]
    Parse(#[from] serde_json::Error),
}
