//! Canonical record of one registered value.

use std::fmt;

use crate::Ordinal;

/// The `(ordinal, name)` record created once per registered value.
///
/// Descriptors are leaked on registration and never mutated, so every handle
/// to the same value points at the same `&'static Descriptor`.
pub struct Descriptor<T: Ordinal> {
    ordinal: T,
    name: Box<str>,
}

impl<T: Ordinal> Descriptor<T> {
    pub(crate) fn new(ordinal: T, name: &str) -> Self {
        Descriptor {
            ordinal,
            name: name.into(),
        }
    }

    /// Sequential ordinal assigned at registration.
    #[inline]
    pub fn ordinal(&self) -> T {
        self.ordinal
    }

    /// Name given at registration.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T: Ordinal> fmt::Debug for Descriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("ordinal", &self.ordinal)
            .field("name", &self.name)
            .finish()
    }
}

impl<T: Ordinal> fmt::Display for Descriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
