use super::*;

// =============================================================
// initial_form
// =============================================================

#[test]
fn signup_param_opens_signup_form() {
    assert_eq!(initial_form(Some("signup")), AuthForm::Signup);
}

#[test]
fn missing_param_opens_signin_form() {
    assert_eq!(initial_form(None), AuthForm::Signin);
}

#[test]
fn unknown_param_opens_signin_form() {
    assert_eq!(initial_form(Some("signin")), AuthForm::Signin);
    assert_eq!(initial_form(Some("register")), AuthForm::Signin);
    assert_eq!(initial_form(Some("")), AuthForm::Signin);
}

#[test]
fn auth_form_default_is_signin() {
    assert_eq!(AuthForm::default(), AuthForm::Signin);
}
