//! Unit tests for the directory authenticator

use std::io::Write;

use crate::domain::entities::principal::Principal;
use crate::errors::{AuthError, DomainError};
use crate::services::auth::{Authenticator, Credentials, DirectoryAuthenticator};

fn directory() -> DirectoryAuthenticator {
    DirectoryAuthenticator::new([
        Principal::demo(),
        Principal::new("w1", "Worker").with_data_access("Limited"),
    ])
}

#[tokio::test]
async fn test_authenticate_known_principal() {
    let principal = directory()
        .authenticate(&Credentials::new("Max Den", "Customer"))
        .await
        .unwrap();

    assert_eq!(principal, Principal::demo());
}

#[tokio::test]
async fn test_unknown_subject_and_wrong_role_fail_identically() {
    let directory = directory();

    let unknown = directory
        .authenticate(&Credentials::new("nobody", "Customer"))
        .await;
    let wrong_role = directory
        .authenticate(&Credentials::new("w1", "Customer"))
        .await;

    assert!(matches!(unknown, Err(DomainError::Auth(AuthError::AuthenticationFailed))));
    assert!(matches!(wrong_role, Err(DomainError::Auth(AuthError::AuthenticationFailed))));
}

#[tokio::test]
async fn test_empty_directory_rejects_everyone() {
    let directory = DirectoryAuthenticator::empty();
    assert!(directory.is_empty());

    let result = directory
        .authenticate(&Credentials::new("Max Den", "Customer"))
        .await;
    assert!(result.is_err());
}

#[test]
fn test_from_json() {
    let directory = DirectoryAuthenticator::from_json(
        r#"[
            { "subject": "u1", "role": "Customer", "data_access": "Full", "email": "u1@example.com" },
            { "subject": "u2", "role": "Worker" }
        ]"#,
    )
    .unwrap();

    assert_eq!(directory.len(), 2);
}

#[test]
fn test_from_json_rejects_duplicates_and_garbage() {
    let duplicate = DirectoryAuthenticator::from_json(
        r#"[{ "subject": "u1", "role": "Customer" }, { "subject": "u1", "role": "Worker" }]"#,
    );
    assert!(matches!(duplicate, Err(DomainError::Configuration { .. })));

    let empty_subject = DirectoryAuthenticator::from_json(r#"[{ "subject": " ", "role": "Customer" }]"#);
    assert!(matches!(empty_subject, Err(DomainError::Configuration { .. })));

    let garbage = DirectoryAuthenticator::from_json("{ not json");
    assert!(matches!(garbage, Err(DomainError::Configuration { .. })));
}

#[test]
fn test_from_file() {
    let path = std::env::temp_dir().join(format!("authgate-principals-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(br#"[{ "subject": "u1", "role": "Customer" }]"#).unwrap();
    drop(file);

    let directory = DirectoryAuthenticator::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(directory.len(), 1);

    let missing = DirectoryAuthenticator::from_file(&path);
    assert!(matches!(missing, Err(DomainError::Configuration { .. })));
}
