//! Nominal enumeration families.
//!
//! [`family!`](crate::family) wraps [`Enum`](crate::Enum) in a newtype so that
//! unrelated enumerations cannot be mixed up, even when they share an ordinal
//! type. All values of a family are registered together, in declaration
//! order, the first time any of them is used. Families over a shared ordinal
//! type take their ordinal ranges in first-use order.

/// Declare a family of named values over an [`Ordinal`](crate::Ordinal) type.
///
/// Generates a `Copy` newtype over `Enum<T>` with one accessor per value and
/// forwards the handle API (`id`, `name`, `to_text`, `from_text`, ...).
/// Serde support is included and encodes values by name.
///
/// Lookups and decoding only ever return the family's own declared values.
/// A name or ordinal registered by another family over the same ordinal type
/// is unknown here.
///
/// # Ordering
/// The family registers on first use, not at program start. Ordinals follow
/// declaration order within one family, but when several families share an
/// ordinal type, the family touched first takes the lowest ordinals.
///
/// ```
/// nomen::ordinal! {
///     pub struct Permission(i8);
/// }
///
/// nomen::family! {
///     /// Access permissions.
///     pub struct PermissionEnum: Permission {
///         unknown => "Unknown",
///         read => "Read",
///         /// Implies read.
///         write => "Write",
///     }
/// }
///
/// let write = PermissionEnum::write();
/// assert_eq!(write.id(), Permission(2));
/// assert_eq!(write.to_string(), "Write");
/// assert_eq!(PermissionEnum::values().len(), 3);
///
/// let label = if write == PermissionEnum::read() {
///     "read-only"
/// } else if write == PermissionEnum::write() {
///     "read-write"
/// } else {
///     "none"
/// };
/// assert_eq!(label, "read-write");
/// ```
#[macro_export]
macro_rules! family {
    (
        $(#[$meta:meta])*
        $vis:vis struct $family:ident: $ordinal:ty {
            $( $(#[$value_meta:meta])* $accessor:ident => $name:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        $vis struct $family($crate::Enum<$ordinal>);

        const _: () = {
            // Position of each accessor in the declaration-ordered table.
            #[allow(dead_code, non_camel_case_types)]
            #[repr(usize)]
            enum Index {
                $( $accessor, )+
            }

            #[allow(dead_code)]
            impl $family {
                /// Declared values, registered on first use in declaration order.
                fn declared() -> &'static [$crate::Enum<$ordinal>] {
                    static DECLARED: $crate::__private::LazyLock<::std::vec::Vec<$crate::Enum<$ordinal>>> =
                        $crate::__private::LazyLock::new(|| {
                            ::std::vec![$( $crate::Enum::<$ordinal>::register($name) ),+]
                        });
                    &DECLARED
                }

                $(
                    $(#[$value_meta])*
                    #[doc = concat!("The `", $name, "` value.")]
                    pub fn $accessor() -> Self {
                        Self(Self::declared()[Index::$accessor as usize])
                    }
                )+

                /// Every declared value, in declaration order.
                pub fn values() -> ::std::vec::Vec<Self> {
                    Self::declared().iter().copied().map(Self).collect()
                }

                /// Ordinal of this value.
                #[inline]
                pub fn id(self) -> $ordinal {
                    self.0.id()
                }

                /// Name of this value.
                #[inline]
                pub fn name(self) -> &'static str {
                    self.0.name()
                }

                /// The underlying handle.
                #[inline]
                pub fn as_enum(self) -> $crate::Enum<$ordinal> {
                    self.0
                }

                /// The declared value with this ordinal.
                pub fn from_id(id: $ordinal) -> ::std::option::Option<Self> {
                    Self::declared()
                        .iter()
                        .copied()
                        .find(|value| value.id() == id)
                        .map(Self)
                }

                /// The declared value with this name.
                pub fn from_name(name: &str) -> ::std::option::Option<Self> {
                    Self::declared()
                        .iter()
                        .copied()
                        .find(|value| value.name() == name)
                        .map(Self)
                }

                /// Encode as a quoted JSON string token.
                pub fn to_text(self) -> ::std::string::String {
                    self.0.to_text()
                }

                /// Decode a quoted JSON string token naming a declared value.
                pub fn from_text(
                    text: impl ::std::convert::AsRef<[u8]>,
                ) -> ::std::result::Result<Self, $crate::EnumError> {
                    let name = $crate::__private::decode_name(text.as_ref())?;
                    Self::from_name(&name)
                        .ok_or_else(|| $crate::__private::unknown_name(stringify!($family), &name))
                }
            }
        };

        impl ::std::convert::From<$family> for $crate::Enum<$ordinal> {
            #[inline]
            fn from(value: $family) -> Self {
                value.0
            }
        }

        impl ::std::fmt::Debug for $family {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}::{}", stringify!($family), self.0.name())
            }
        }

        impl ::std::fmt::Display for $family {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl $crate::__private::serde::Serialize for $family {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $family {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let name = <::std::string::String as $crate::__private::serde::Deserialize<'de>>::deserialize(
                    deserializer,
                )?;
                Self::from_name(&name).ok_or_else(|| {
                    <D::Error as $crate::__private::serde::de::Error>::custom(
                        $crate::__private::unknown_name(stringify!($family), &name),
                    )
                })
            }
        }
    };
}
