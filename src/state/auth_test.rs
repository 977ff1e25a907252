use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_has_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn auth_state_holds_user() {
    let state = AuthState {
        user: Some(SessionUser {
            id: "u-1".to_owned(),
            email: "alice@example.com".to_owned(),
            name: "Alice".to_owned(),
            role: "user".to_owned(),
            profile_image_url: None,
            user_type: "individual".to_owned(),
        }),
        loading: false,
    };
    assert_eq!(state.user.unwrap().name, "Alice");
}
