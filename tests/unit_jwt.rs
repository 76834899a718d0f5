use axum::http::StatusCode;
use quadro::config::jwt::JwtConfig;
use quadro::modules::auth::model::{Role, UserDisplay};
use quadro::utils::jwt::{create_access_token, verify_token};

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: Some("test_secret_key_for_testing_purposes".to_string()),
        token_expiry: 86400,
    }
}

fn test_display() -> UserDisplay {
    UserDisplay {
        name: "Maria Souza".to_string(),
        phone: Some("+55 11 99999-0000".to_string()),
        picture: None,
    }
}

#[test]
fn test_create_access_token_success() {
    let jwt_config = get_test_jwt_config();

    let result = create_access_token(42, Role::Teacher, test_display(), &jwt_config);

    assert!(result.is_ok());
    assert!(!result.unwrap().is_empty());
}

#[test]
fn test_token_round_trip() {
    let jwt_config = get_test_jwt_config();

    let token = create_access_token(7, Role::Admin, test_display(), &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, 7);
    assert_eq!(claims.role, Role::Admin);
    assert_eq!(claims.user, test_display());
}

#[test]
fn test_token_round_trip_all_roles() {
    let jwt_config = get_test_jwt_config();

    for role in [Role::Admin, Role::Teacher, Role::Student] {
        let token = create_access_token(1, role, test_display(), &jwt_config).unwrap();
        let claims = verify_token(&token, &jwt_config).unwrap();
        assert_eq!(claims.role, role);
    }
}

#[test]
fn test_token_expiry_is_set() {
    let jwt_config = get_test_jwt_config();

    let token = create_access_token(1, Role::Student, test_display(), &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert!(claims.exp > claims.iat);
    assert_eq!(claims.exp - claims.iat, jwt_config.token_expiry as usize);
}

#[test]
fn test_expired_token_rejected() {
    let mut jwt_config = get_test_jwt_config();
    jwt_config.token_expiry = -3600; // already expired at issuance

    let token = create_access_token(1, Role::Student, test_display(), &jwt_config).unwrap();
    let result = verify_token(&token, &jwt_config);

    assert!(result.is_err());
    assert_eq!(result.unwrap_err().status, StatusCode::UNAUTHORIZED);
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = get_test_jwt_config();
    let token = create_access_token(1, Role::Admin, test_display(), &jwt_config).unwrap();

    let wrong_jwt_config = JwtConfig {
        secret: Some("different_secret_key".to_string()),
        token_expiry: 86400,
    };

    assert!(verify_token(&token, &wrong_jwt_config).is_err());
}

#[test]
fn test_tampered_token_rejected() {
    let jwt_config = get_test_jwt_config();
    let token = create_access_token(1, Role::Student, test_display(), &jwt_config).unwrap();

    // Flip a character in the payload segment.
    let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
    let payload = &mut parts[1];
    let flipped = if payload.ends_with('A') { "B" } else { "A" };
    payload.replace_range(payload.len() - 1.., flipped);
    let tampered = parts.join(".");

    assert!(verify_token(&tampered, &jwt_config).is_err());
}

#[test]
fn test_verify_token_malformed() {
    let jwt_config = get_test_jwt_config();
    let malformed_tokens = vec![
        "",
        "not.enough",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
        "header.payload.",
    ];

    for token in malformed_tokens {
        assert!(verify_token(token, &jwt_config).is_err());
    }
}

#[test]
fn test_missing_secret_is_configuration_error() {
    let jwt_config = JwtConfig {
        secret: None,
        token_expiry: 86400,
    };

    let issue = create_access_token(1, Role::Admin, test_display(), &jwt_config);
    assert!(issue.is_err());
    assert_eq!(
        issue.unwrap_err().status,
        StatusCode::INTERNAL_SERVER_ERROR
    );

    let verify = verify_token("whatever.token.value", &jwt_config);
    assert!(verify.is_err());
    assert_eq!(
        verify.unwrap_err().status,
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_different_subjects_produce_different_tokens() {
    let jwt_config = get_test_jwt_config();

    let token1 = create_access_token(1, Role::Student, test_display(), &jwt_config).unwrap();
    let token2 = create_access_token(2, Role::Student, test_display(), &jwt_config).unwrap();

    assert_ne!(token1, token2);
    assert_eq!(verify_token(&token1, &jwt_config).unwrap().sub, 1);
    assert_eq!(verify_token(&token2, &jwt_config).unwrap().sub, 2);
}
