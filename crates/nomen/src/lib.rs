//! Nomen - Named Enumerations
//!
//! Declares closed sets of named values (roles, permissions, ...) on top of
//! one generic registry instead of a hand-written enum plus `Display` mapping
//! per concept:
//! - [`Ordinal`] types key the registry and carry the integer ordinal
//! - [`DescriptorRegistry`] owns the canonical `(ordinal, name)` records
//! - [`Enum`] is the copyable handle referencing one record
//! - [`family!`] declares a nominal wrapper over [`Enum`] with named accessors
//!
//! # Design Philosophy
//!
//! - **Register Once**: every value is created exactly once and leaked, so
//!   handles are a single `&'static` pointer and compare by identity
//! - **Resolve, Never Rebuild**: decoding a name goes through the registry and
//!   hands back the canonical record, so round trips preserve equality
//! - **Nominal Families**: unrelated enumerations are distinct types even when
//!   they share an integer representation
//!
//! # Example
//!
//! ```
//! nomen::ordinal! {
//!     /// Ordinal type for account roles.
//!     pub struct Role(i8);
//! }
//!
//! nomen::family! {
//!     /// Account roles.
//!     pub struct RoleEnum: Role {
//!         unknown => "Unknown",
//!         admin => "Admin",
//!         user => "User",
//!         guest => "Guest",
//!     }
//! }
//!
//! let guest = RoleEnum::guest();
//! assert_eq!(guest.name(), "Guest");
//! assert_eq!(guest.id(), Role(3));
//!
//! let text = guest.to_text();
//! assert_eq!(text, "\"Guest\"");
//! assert_eq!(RoleEnum::from_text(&text).ok(), Some(guest));
//!
//! assert_eq!(nomen::enums_by_type::<Role>().len(), 4);
//! ```
//!
//! Families are not interchangeable, even over the same ordinal type:
//!
//! ```compile_fail
//! nomen::ordinal! {
//!     pub struct Role(i8);
//!     pub struct Permission(i8);
//! }
//! nomen::family! { pub struct RoleEnum: Role { admin => "Admin" } }
//! nomen::family! { pub struct PermissionEnum: Permission { read => "Read" } }
//!
//! fn accepts_role_only(_role: RoleEnum) {}
//!
//! accepts_role_only(PermissionEnum::read());
//! ```
//!
//! The same holds for the bare ordinals once unwrapped with `id()`:
//!
//! ```compile_fail
//! nomen::ordinal! {
//!     pub struct Role(i8);
//!     pub struct Permission(i8);
//! }
//! nomen::family! { pub struct RoleEnum: Role { admin => "Admin" } }
//! nomen::family! { pub struct PermissionEnum: Permission { read => "Read" } }
//!
//! fn accepts_role_id_only(_id: Role) {}
//!
//! accepts_role_id_only(PermissionEnum::read().id());
//! ```
//!
//! Two families declared over one ordinal type are still distinct:
//!
//! ```compile_fail
//! nomen::ordinal! { pub struct Role(i8); }
//! nomen::family! { pub struct RoleEnum: Role { admin => "Admin" } }
//! nomen::family! { pub struct StaffRoleEnum: Role { manager => "Manager" } }
//!
//! fn accepts_role_only(_role: RoleEnum) {}
//!
//! accepts_role_only(StaffRoleEnum::manager());
//! ```

mod codec;
mod descriptor;
mod error;
mod family;
mod handle;
mod ordinal;
mod registry;

pub use descriptor::Descriptor;
pub use error::EnumError;
pub use handle::{enums_by_type, Enum};
pub use ordinal::{Ordinal, Primitive};
pub use registry::DescriptorRegistry;

/// Re-exports used by the declaration macros.
#[doc(hidden)]
pub mod __private {
    pub use crate::codec::{decode_name, unknown_name};
    pub use serde;
    pub use std::sync::LazyLock;
}
