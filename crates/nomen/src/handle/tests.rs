#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;
use std::collections::{BTreeSet, HashSet};

crate::ordinal! {
    struct Role(i8);
    struct Permission(i8);
    struct Listed(i16);
    struct Counted(i16);
    struct Dispatch(i32);
    struct Unused(i8);
    struct Tiny(i8);
}

#[test]
fn test_register_and_accessors() {
    let unknown = Enum::<Role>::register("Unknown");
    let admin = Enum::<Role>::register("Admin");

    assert_eq!(unknown.id(), Role(0));
    assert_eq!(admin.id(), Role(1));
    assert_eq!(admin.name(), "Admin");
    assert_eq!(admin.to_string(), "Admin");
    assert_eq!(format!("{admin:?}"), "Enum<Role>(1, \"Admin\")");
    assert!(std::ptr::eq(admin.descriptor(), Enum::<Role>::from_id(Role(1)).unwrap().descriptor()));
}

#[test]
fn test_equality_is_identity() {
    let read = Enum::<Permission>::register("Read");
    let again = Enum::<Permission>::from_name("Read").unwrap();
    let write = Enum::<Permission>::register("Write");

    assert_eq!(read, again);
    assert_ne!(read, write);

    // Same ordinal and name in another registry is still another value
    let registry = DescriptorRegistry::new();
    let foreign = Enum::from(registry.register::<Permission>("Read"));
    assert_eq!(foreign.id(), read.id());
    assert_ne!(foreign, read);
    assert_ne!(foreign.cmp(&read), Ordering::Equal);
}

#[test]
fn test_hash_and_ord_agree_with_eq() {
    let values: Vec<Enum<Listed>> = ["A", "B", "C"]
        .into_iter()
        .map(Enum::<Listed>::register)
        .collect();

    let hashed: HashSet<_> = values.iter().chain(values.iter()).copied().collect();
    assert_eq!(hashed.len(), 3);

    let ordered: BTreeSet<_> = values.iter().rev().copied().collect();
    assert_eq!(ordered.into_iter().collect::<Vec<_>>(), values);
}

#[test]
fn test_enums_by_type_lists_registrations() {
    let declared: Vec<Enum<Counted>> = ["Unknown", "Admin", "User", "Guest"]
        .into_iter()
        .map(Enum::<Counted>::register)
        .collect();

    let listed = enums_by_type::<Counted>();
    assert_eq!(listed.len(), 4);
    assert_eq!(listed, declared);

    assert!(enums_by_type::<Unused>().is_empty());
    assert!(Enum::<Unused>::from_id(Unused(0)).is_none());
    assert!(Enum::<Unused>::from_name("Anything").is_none());
}

#[test]
fn test_dispatch_by_value() {
    let unknown = Enum::<Dispatch>::register("Unknown");
    let admin = Enum::<Dispatch>::register("Admin");
    let user = Enum::<Dispatch>::register("User");
    let guest = Enum::<Dispatch>::register("Guest");

    let branch = |role: Enum<Dispatch>| match role {
        r if r == unknown => 0,
        r if r == admin => 1,
        r if r == user => 2,
        r if r == guest => 3,
        _ => -1,
    };

    for (expected, role) in [unknown, admin, user, guest].into_iter().enumerate() {
        assert_eq!(branch(role), i32::try_from(expected).unwrap());
    }
    for role in enums_by_type::<Dispatch>() {
        assert_ne!(branch(role), -1);
    }

    // Dispatch on the bare ordinal
    assert!(matches!(admin.id(), Dispatch(1)));
}

#[test]
fn test_try_register_reports_overflow() {
    for i in 0..128 {
        Enum::<Tiny>::try_register(&format!("Tiny{i}")).unwrap();
    }

    let err = Enum::<Tiny>::try_register("Tiny128").unwrap_err();
    assert!(matches!(err, EnumError::CapacityExceeded { capacity: 128, .. }));
    assert_eq!(enums_by_type::<Tiny>().len(), 128);
}
