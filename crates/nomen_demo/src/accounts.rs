//! Account roles and permissions.

nomen::ordinal! {
    /// Ordinal type for account roles.
    pub struct Role(i8);
    /// Ordinal type for permissions.
    pub struct Permission(i8);
}

nomen::family! {
    /// Role of an account.
    pub struct RoleEnum: Role {
        unknown => "Unknown",
        admin => "Admin",
        user => "User",
        guest => "Guest",
    }
}

nomen::family! {
    /// Permission granted to a role.
    pub struct PermissionEnum: Permission {
        unknown => "Unknown",
        read => "Read",
        write => "Write",
        delete => "Delete",
    }
}

/// Register every family so decoding sees all names.
pub fn declare() {
    let roles = RoleEnum::values().len();
    let permissions = PermissionEnum::values().len();
    tracing::debug!(roles, permissions, "declared account enumerations");
}

/// Permissions granted to `role`.
pub fn grants(role: RoleEnum) -> Vec<PermissionEnum> {
    match role {
        r if r == RoleEnum::admin() => vec![
            PermissionEnum::read(),
            PermissionEnum::write(),
            PermissionEnum::delete(),
        ],
        r if r == RoleEnum::user() => vec![PermissionEnum::read(), PermissionEnum::write()],
        r if r == RoleEnum::guest() => vec![PermissionEnum::read()],
        _ => Vec::new(),
    }
}
