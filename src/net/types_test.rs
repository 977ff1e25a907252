use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> SessionUser {
    SessionUser {
        id: "u-1".to_owned(),
        email: "alice@example.com".to_owned(),
        name: "Alice".to_owned(),
        role: "user".to_owned(),
        profile_image_url: Some("/user.png".to_owned()),
        user_type: "individual".to_owned(),
    }
}

// =============================================================
// SessionUser serde
// =============================================================

#[test]
fn session_user_round_trips() {
    let user = make_user();
    let json = serde_json::to_string(&user).unwrap();
    let back: SessionUser = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
}

#[test]
fn session_user_missing_user_type_defaults_to_individual() {
    let json = r#"{
        "id": "u-1",
        "email": "alice@example.com",
        "name": "Alice",
        "role": "user"
    }"#;
    let user: SessionUser = serde_json::from_str(json).unwrap();
    assert_eq!(user.user_type, "individual");
    assert_eq!(user.profile_image_url, None);
}

#[test]
fn session_user_guest_type_preserved() {
    let json = r#"{
        "id": "u-2",
        "email": "guest-abc@guest.local",
        "name": "Guest",
        "role": "user",
        "user_type": "guest"
    }"#;
    let user: SessionUser = serde_json::from_str(json).unwrap();
    assert_eq!(user.user_type, "guest");
}

// =============================================================
// Request payloads
// =============================================================

#[test]
fn signin_request_serializes_expected_fields() {
    let req = SigninRequest {
        email: "alice@example.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["email"], "alice@example.com");
    assert_eq!(value["password"], "hunter2");
}

#[test]
fn signup_request_serializes_expected_fields() {
    let req = SignupRequest {
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["name"], "Alice");
    assert_eq!(value["email"], "alice@example.com");
    assert_eq!(value["password"], "hunter2");
}
