//! Enumeration handle.
//!
//! An [`Enum`] is a single `&'static` pointer to a canonical [`Descriptor`]
//! in the global registry. Identity is the pointer.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{Descriptor, DescriptorRegistry, EnumError, Ordinal};

/// Handle to one registered value of ordinal type `T`.
///
/// There is no `Default` and no way to build a handle from a bare ordinal
/// without a registry lookup, so every handle refers to a real value.
///
/// # Equality
/// Two handles are equal iff they reference the same descriptor. `Hash` and
/// `Ord` follow the ordinal, with the descriptor address as a tie-break so
/// they stay consistent with `Eq` across separate registries.
pub struct Enum<T: Ordinal> {
    descriptor: &'static Descriptor<T>,
}

impl<T: Ordinal> Enum<T> {
    /// Register `name` as the next value of `T` in the global registry.
    ///
    /// # Panics
    /// Panics if `T` is out of ordinals.
    /// Use [`try_register`](Self::try_register) for fallible registration.
    pub fn register(name: &str) -> Self {
        Enum {
            descriptor: DescriptorRegistry::global().register(name),
        }
    }

    /// Try to register `name` as the next value of `T` in the global registry.
    pub fn try_register(name: &str) -> Result<Self, EnumError> {
        DescriptorRegistry::global()
            .try_register(name)
            .map(Self::from)
    }

    /// The registered value of `T` with this ordinal.
    pub fn from_id(id: T) -> Option<Self> {
        DescriptorRegistry::global()
            .lookup_by_ordinal(id)
            .map(Self::from)
    }

    /// The registered value of `T` with this name.
    pub fn from_name(name: &str) -> Option<Self> {
        DescriptorRegistry::global()
            .lookup_by_name(name)
            .map(Self::from)
    }

    /// Ordinal of this value.
    ///
    /// Unwrapping drops the handle's identity: ordinals of different handle
    /// families over the same `T` compare equal.
    #[inline]
    pub fn id(self) -> T {
        self.descriptor.ordinal()
    }

    /// Name given at registration.
    #[inline]
    pub fn name(self) -> &'static str {
        self.descriptor.name()
    }

    /// The canonical descriptor this handle points at.
    #[inline]
    pub fn descriptor(self) -> &'static Descriptor<T> {
        self.descriptor
    }

    #[inline]
    fn addr(self) -> *const Descriptor<T> {
        self.descriptor
    }
}

/// Every registered value of `T`, in registration order.
pub fn enums_by_type<T: Ordinal>() -> Vec<Enum<T>> {
    DescriptorRegistry::global()
        .all::<T>()
        .into_iter()
        .map(Enum::from)
        .collect()
}

impl<T: Ordinal> From<&'static Descriptor<T>> for Enum<T> {
    #[inline]
    fn from(descriptor: &'static Descriptor<T>) -> Self {
        Enum { descriptor }
    }
}

impl<T: Ordinal> Clone for Enum<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Ordinal> Copy for Enum<T> {}

impl<T: Ordinal> PartialEq for Enum<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.descriptor, other.descriptor)
    }
}

impl<T: Ordinal> Eq for Enum<T> {}

impl<T: Ordinal> Hash for Enum<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl<T: Ordinal> Ord for Enum<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id()
            .cmp(&other.id())
            .then_with(|| self.addr().cmp(&other.addr()))
    }
}

impl<T: Ordinal> PartialOrd for Enum<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ordinal> fmt::Debug for Enum<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_name = std::any::type_name::<T>();
        let short = type_name.rsplit("::").next().unwrap_or(type_name);
        write!(f, "Enum<{short}>({}, {:?})", self.id().into_repr(), self.name())
    }
}

impl<T: Ordinal> fmt::Display for Enum<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
