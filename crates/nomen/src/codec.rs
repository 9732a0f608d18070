//! Text interchange for handles.
//!
//! A handle is encoded as a JSON string holding its name, exactly like
//! serializing a `&str`. Decoding resolves the name through the global
//! registry so the decoded handle is the canonical one.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::{Enum, EnumError, Ordinal};

impl<T: Ordinal> Enum<T> {
    /// Encode as a quoted JSON string token, e.g. `"Guest"`.
    pub fn to_text(self) -> String {
        serde_json::Value::from(self.name()).to_string()
    }

    /// Decode a quoted JSON string token.
    ///
    /// Fails with [`EnumError::Parse`] if the input is not a single JSON
    /// string, and with [`EnumError::UnknownName`] if no value of `T` was
    /// registered under that name.
    pub fn from_text(text: impl AsRef<[u8]>) -> Result<Self, EnumError> {
        let name = decode_name(text.as_ref())?;
        Self::resolve(&name)
    }

    /// Resolve a decoded name to its canonical handle.
    fn resolve(name: &str) -> Result<Self, EnumError> {
        Self::from_name(name).ok_or_else(|| unknown_name(type_name::<T>(), name))
    }
}

/// Parse a quoted JSON string token into the name it holds.
pub fn decode_name(text: &[u8]) -> Result<String, EnumError> {
    Ok(serde_json::from_slice(text)?)
}

/// Error for a name that `type_name` does not recognize.
pub fn unknown_name(type_name: &'static str, name: &str) -> EnumError {
    tracing::debug!(enum_type = type_name, name, "unknown enum name");
    EnumError::UnknownName {
        type_name,
        name: name.to_owned(),
    }
}

impl<T: Ordinal> Serialize for Enum<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

struct EnumVisitor<T>(PhantomData<T>);

impl<T: Ordinal> Visitor<'_> for EnumVisitor<T> {
    type Value = Enum<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the name of a registered `{}` value", type_name::<T>())
    }

    fn visit_str<E: de::Error>(self, name: &str) -> Result<Self::Value, E> {
        Enum::resolve(name).map_err(E::custom)
    }
}

impl<'de, T: Ordinal> Deserialize<'de> for Enum<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(EnumVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests;
