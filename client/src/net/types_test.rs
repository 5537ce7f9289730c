use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_email_and_id() {
    let user: User = serde_json::from_value(serde_json::json!({ "id": "u1", "email": "a@b.com" })).unwrap();
    assert_eq!(user, User { id: Some("u1".to_owned()), email: "a@b.com".to_owned() });
}

#[test]
fn user_accepts_underscore_id_alias() {
    let user: User = serde_json::from_value(serde_json::json!({ "_id": "64f0", "email": "a@b.com" })).unwrap();
    assert_eq!(user.id.as_deref(), Some("64f0"));
}

#[test]
fn user_ignores_unknown_fields_and_missing_id() {
    let user: User =
        serde_json::from_value(serde_json::json!({ "email": "a@b.com", "createdAt": "2024-01-01", "__v": 0 }))
            .unwrap();
    assert_eq!(user.id, None);
    assert_eq!(user.email, "a@b.com");
}

#[test]
fn user_requires_email() {
    assert!(serde_json::from_value::<User>(serde_json::json!({ "id": "u1" })).is_err());
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_serialize_as_email_and_password() {
    let body = serde_json::to_value(Credentials::new("a@b.com", "hunter2")).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.com", "password": "hunter2" }));
}

#[test]
fn credentials_debug_redacts_password() {
    let rendered = format!("{:?}", Credentials::new("a@b.com", "hunter2"));
    assert!(rendered.contains("a@b.com"));
    assert!(!rendered.contains("hunter2"));
}

// =============================================================
// Responses
// =============================================================

#[test]
fn auth_response_reads_camel_case_token() {
    let resp: AuthResponse = serde_json::from_value(serde_json::json!({
        "user": { "id": "u1", "email": "a@b.com" },
        "accessToken": "tok"
    }))
    .unwrap();
    assert_eq!(resp.access_token, "tok");
    assert_eq!(resp.user.email, "a@b.com");
}

#[test]
fn auth_response_without_user_is_rejected() {
    assert!(serde_json::from_value::<AuthResponse>(serde_json::json!({ "accessToken": "tok" })).is_err());
}

#[test]
fn refresh_response_reads_camel_case_token() {
    let resp: RefreshResponse = serde_json::from_value(serde_json::json!({ "accessToken": "tok" })).unwrap();
    assert_eq!(resp.access_token, "tok");
}

#[test]
fn refresh_response_rejects_snake_case_token() {
    assert!(serde_json::from_value::<RefreshResponse>(serde_json::json!({ "access_token": "tok" })).is_err());
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn api_error_status_names_path_and_code() {
    let err = ApiError::Status { path: "/login", status: 401 };
    assert_eq!(err.to_string(), "/login failed: 401");
}

#[test]
fn api_error_network_wraps_message() {
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "request failed: offline");
}
