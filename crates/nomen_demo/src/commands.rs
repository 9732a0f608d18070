//! Command implementations for the demo CLI.
//!
//! Commands return their output lines so `main` owns all printing.

use std::fmt;
use std::str::FromStr;

use nomen::{enums_by_type, Enum, EnumError, Ordinal};
use thiserror::Error;

use crate::accounts::{self, Permission, Role, RoleEnum};

/// Error from running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown family `{0}` (expected `role` or `permission`)")]
    UnknownFamily(String),

    #[error("invalid ordinal `{raw}` for family `{family}`")]
    InvalidOrdinal { family: Family, raw: String },

    #[error("family `{family}` has no value with ordinal {raw}")]
    NoSuchOrdinal { family: Family, raw: String },

    #[error(transparent)]
    Enum(#[from] EnumError),
}

/// Families known to the demo.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Family {
    Role,
    Permission,
}

impl Family {
    pub const ALL: [Family; 2] = [Family::Role, Family::Permission];

    pub fn as_str(self) -> &'static str {
        match self {
            Family::Role => "role",
            Family::Permission => "permission",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Family::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| CommandError::UnknownFamily(s.to_owned()))
    }
}

/// `list`: every registered value, as `<family> <ordinal> <name>`.
pub fn list() -> Vec<String> {
    let mut lines = Vec::new();
    for family in Family::ALL {
        match family {
            Family::Role => list_type::<Role>(family, &mut lines),
            Family::Permission => list_type::<Permission>(family, &mut lines),
        }
    }
    lines
}

fn list_type<T: Ordinal>(family: Family, lines: &mut Vec<String>) {
    for value in enums_by_type::<T>() {
        lines.push(format!("{family} {} {}", value.id().into_repr(), value.name()));
    }
}

/// `decode <family> <token>`: ordinal of a JSON string token.
pub fn decode(family: Family, token: &str) -> Result<String, CommandError> {
    match family {
        Family::Role => decode_type::<Role>(token),
        Family::Permission => decode_type::<Permission>(token),
    }
}

fn decode_type<T: Ordinal>(token: &str) -> Result<String, CommandError> {
    let value = Enum::<T>::from_text(token)?;
    Ok(value.id().into_repr().to_string())
}

/// `encode <family> <ordinal>`: JSON string token for an ordinal.
pub fn encode(family: Family, raw: &str) -> Result<String, CommandError> {
    match family {
        Family::Role => encode_type::<Role>(family, raw),
        Family::Permission => encode_type::<Permission>(family, raw),
    }
}

fn encode_type<T>(family: Family, raw: &str) -> Result<String, CommandError>
where
    T: Ordinal,
    T::Repr: FromStr,
{
    let repr = raw
        .trim()
        .parse::<T::Repr>()
        .map_err(|_| CommandError::InvalidOrdinal {
            family,
            raw: raw.to_owned(),
        })?;
    let value = Enum::from_id(T::from_repr(repr)).ok_or_else(|| CommandError::NoSuchOrdinal {
        family,
        raw: raw.to_owned(),
    })?;
    Ok(value.to_text())
}

/// `grants <role-token>`: names of the permissions a role holds.
pub fn grants(token: &str) -> Result<Vec<String>, CommandError> {
    let role = RoleEnum::from_text(token)?;
    let permissions = accounts::grants(role);
    tracing::debug!(%role, count = permissions.len(), "resolved grants");
    Ok(permissions
        .into_iter()
        .map(|permission| permission.name().to_owned())
        .collect())
}
