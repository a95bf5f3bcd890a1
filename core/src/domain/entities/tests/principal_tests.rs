//! Unit tests for the principal entity

use crate::domain::entities::principal::Principal;

#[test]
fn test_demo_principal() {
    let principal = Principal::demo();

    assert_eq!(principal.subject, "Max Den");
    assert_eq!(principal.role, "Customer");
    assert_eq!(principal.data_access.as_deref(), Some("Full"));
    assert_eq!(principal.email.as_deref(), Some("max.den@example.com"));
}

#[test]
fn test_role_match_is_exact() {
    let principal = Principal::new("u1", "Customer");

    assert!(principal.has_role("Customer"));
    assert!(!principal.has_role("customer"));
    assert!(!principal.has_role("Admin"));
}

#[test]
fn test_into_claims() {
    let claims = Principal::new("u1", "Worker")
        .with_email("u1@example.com")
        .into_claims();

    assert_eq!(claims.sub, "u1");
    assert_eq!(claims.role, "Worker");
    assert_eq!(claims.data_access, None);
    assert_eq!(claims.email.as_deref(), Some("u1@example.com"));
    assert!(claims.extra.is_empty());
}

#[test]
fn test_principal_deserializes_with_optional_fields_missing() {
    let principal: Principal =
        serde_json::from_str(r#"{ "subject": "u2", "role": "Customer" }"#).unwrap();

    assert_eq!(principal, Principal::new("u2", "Customer"));
}
