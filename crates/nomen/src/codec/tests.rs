#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

crate::ordinal! {
    struct Role(i8);
    struct Other(i8);
}

crate::family! {
    struct RoleEnum: Role {
        unknown => "Unknown",
        admin => "Admin",
        user => "User",
        guest => "Guest",
    }
}

#[test]
fn test_to_text_is_quoted_name() {
    let text = RoleEnum::guest().to_text();
    assert_eq!(text, "\"Guest\"");
    assert_eq!(text.len(), 7);
}

#[test]
fn test_round_trip_preserves_identity() {
    for role in RoleEnum::values() {
        let decoded = RoleEnum::from_text(role.to_text()).unwrap();
        assert_eq!(decoded, role);
        assert_eq!(decoded.id(), role.id());
        assert_eq!(decoded.name(), role.name());
        assert!(std::ptr::eq(
            decoded.as_enum().descriptor(),
            role.as_enum().descriptor()
        ));
    }
}

#[test]
fn test_unknown_name() {
    RoleEnum::values();

    let err = RoleEnum::from_text("\"Root\"").unwrap_err();
    match err {
        EnumError::UnknownName { name, type_name } => {
            assert_eq!(name, "Root");
            assert_eq!(type_name, "RoleEnum");
        }
        other => panic!("expected UnknownName, got {other:?}"),
    }

    // Case matters
    assert!(matches!(
        RoleEnum::from_text("\"guest\""),
        Err(EnumError::UnknownName { .. })
    ));
}

#[test]
fn test_name_of_another_type_is_unknown() {
    RoleEnum::values();
    Enum::<Other>::register("Other");

    assert!(matches!(
        Enum::<Other>::from_text("\"Admin\""),
        Err(EnumError::UnknownName { .. })
    ));
    assert!(matches!(
        RoleEnum::from_text("\"Other\""),
        Err(EnumError::UnknownName { .. })
    ));
}

#[test]
fn test_malformed_tokens() {
    for text in ["Guest", "\"Guest", "42", "null", "[\"Guest\"]", "", "\"Guest\" \"User\""] {
        assert!(
            matches!(RoleEnum::from_text(text), Err(EnumError::Parse(_))),
            "expected parse error for {text:?}"
        );
    }
}

#[test]
fn test_surrounding_whitespace_is_accepted() {
    assert_eq!(RoleEnum::from_text(" \"User\"\n").unwrap(), RoleEnum::user());
}

#[test]
fn test_escaped_names_round_trip() {
    let quoted = Enum::<Other>::register("say \"hi\"\\ünï");
    let text = quoted.to_text();
    assert_eq!(text, "\"say \\\"hi\\\"\\\\ünï\"");
    assert_eq!(Enum::<Other>::from_text(&text).unwrap(), quoted);
}

#[test]
fn test_serde_inside_structures() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Account {
        login: String,
        role: RoleEnum,
        history: Vec<Enum<Role>>,
    }

    let account = Account {
        login: "ada".to_owned(),
        role: RoleEnum::admin(),
        history: vec![RoleEnum::guest().into(), RoleEnum::user().into()],
    };

    let json = serde_json::to_string(&account).unwrap();
    assert_eq!(
        json,
        r#"{"login":"ada","role":"Admin","history":["Guest","User"]}"#
    );
    assert_eq!(serde_json::from_str::<Account>(&json).unwrap(), account);

    let err = serde_json::from_str::<Account>(r#"{"login":"ada","role":"Root","history":[]}"#)
        .unwrap_err();
    assert!(err.to_string().contains("no value named \"Root\""));
}
