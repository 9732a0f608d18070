//! Ordinal types backing an enumeration.
//!
//! A [`Primitive`] is one of the signed integer widths a registry can count
//! in. An [`Ordinal`] is the type-level key of one registry: either a bare
//! primitive or a nominal newtype declared with [`ordinal!`](crate::ordinal).

use std::fmt;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// Signed integer representation of an ordinal.
///
/// Ordinals are the non-negative values of the type, so a registry over a
/// `BITS`-wide primitive holds at most `2^(BITS - 1)` values.
pub trait Primitive:
    sealed::Sealed + Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Bit width of the integer type.
    const BITS: u32;

    /// Number of values a registry over this type can hold.
    const CAPACITY: u64 = 1 << (Self::BITS - 1);

    /// Convert a registry index, or `None` if it is out of range.
    fn from_index(index: usize) -> Option<Self>;

    /// Convert back to a registry index, or `None` for negative values.
    fn to_index(self) -> Option<usize>;
}

macro_rules! impl_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn from_index(index: usize) -> Option<Self> {
                    <$ty>::try_from(index).ok()
                }

                #[inline]
                fn to_index(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }

            impl Ordinal for $ty {
                type Repr = $ty;

                #[inline]
                fn from_repr(repr: $ty) -> Self {
                    repr
                }

                #[inline]
                fn into_repr(self) -> $ty {
                    self
                }
            }
        )*
    };
}

impl_primitive!(i8, i16, i32, i64);

/// Type-level key of an enumeration registry.
///
/// Every distinct `Ordinal` type gets its own registry, so ordinals of two
/// ordinal types never mix even when their representations match. The raw
/// integer is reachable through [`Ordinal::into_repr`] for storage.
pub trait Ordinal: Copy + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static {
    /// Integer representation; its width bounds the registry capacity.
    type Repr: Primitive;

    /// Wrap a raw ordinal.
    fn from_repr(repr: Self::Repr) -> Self;

    /// Unwrap to the raw ordinal.
    fn into_repr(self) -> Self::Repr;
}

/// Declare nominal ordinal types over signed integer representations.
///
/// ```
/// nomen::ordinal! {
///     /// Ordinal type for permissions.
///     pub struct Permission(i16);
/// }
///
/// use nomen::Ordinal;
/// assert_eq!(Permission::from_repr(2).into_repr(), 2);
/// assert_eq!(Permission(7).to_string(), "7");
/// ```
#[macro_export]
macro_rules! ordinal {
    ($(
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($field_vis:vis $repr:ty);
    )+) => {
        $(
            $(#[$meta])*
            #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
            #[repr(transparent)]
            $vis struct $name($field_vis $repr);

            impl $crate::Ordinal for $name {
                type Repr = $repr;

                #[inline]
                fn from_repr(repr: $repr) -> Self {
                    $name(repr)
                }

                #[inline]
                fn into_repr(self) -> $repr {
                    self.0
                }
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::std::fmt::Display::fmt(&self.0, f)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    crate::ordinal! {
        struct Level(i16);
    }

    #[test]
    fn test_primitive_capacity() {
        assert_eq!(<i8 as Primitive>::CAPACITY, 128);
        assert_eq!(<i16 as Primitive>::CAPACITY, 32_768);
        assert_eq!(<i32 as Primitive>::CAPACITY, 1 << 31);
        assert_eq!(<i64 as Primitive>::CAPACITY, 1 << 63);
    }

    #[test]
    fn test_from_index_bounds() {
        assert_eq!(i8::from_index(0), Some(0));
        assert_eq!(i8::from_index(127), Some(127));
        assert_eq!(i8::from_index(128), None);
        assert_eq!(i16::from_index(32_767), Some(32_767));
        assert_eq!(i16::from_index(32_768), None);
    }

    #[test]
    fn test_negative_has_no_index() {
        assert_eq!((-1i8).to_index(), None);
        assert_eq!(5i32.to_index(), Some(5));
    }

    #[test]
    fn test_newtype_ordinal() {
        let level = Level::from_repr(12);
        assert_eq!(level.into_repr(), 12);
        assert_eq!(level.to_string(), "12");
        assert!(Level(1) < Level(2));
    }
}
