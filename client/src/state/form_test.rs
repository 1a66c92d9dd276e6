use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn login_form_default_is_empty() {
    let form = LoginForm::default();
    assert!(form.email.is_empty());
    assert!(form.password.is_empty());
}

#[test]
fn registration_form_default_is_empty() {
    let form = RegistrationForm::default();
    for field in RegistrationForm::FIELDS {
        assert_eq!(form.value(*field), "");
    }
}

// =============================================================
// value / set_value
// =============================================================

#[test]
fn login_set_value_targets_single_field() {
    let mut form = LoginForm::default();
    form.set_value(LoginField::Password, "secret1".to_owned());
    assert_eq!(form.value(LoginField::Password), "secret1");
    assert_eq!(form.value(LoginField::Email), "");
}

#[test]
fn registration_set_value_targets_single_field() {
    let mut form = RegistrationForm::default();
    form.set_value(RegistrationField::ConfirmPassword, "abc".to_owned());
    assert_eq!(form.confirm_password, "abc");
    assert!(form.password.is_empty());
    assert!(form.name.is_empty());
}

// =============================================================
// Field metadata
// =============================================================

#[test]
fn registration_field_ids_match_markup_names() {
    let ids: Vec<_> = RegistrationForm::FIELDS.iter().map(|f| f.id()).collect();
    assert_eq!(ids, ["name", "email", "password", "confirmPassword"]);
}

#[test]
fn login_field_ids_match_markup_names() {
    let ids: Vec<_> = LoginForm::FIELDS.iter().map(|f| f.id()).collect();
    assert_eq!(ids, ["email", "password"]);
}

#[test]
fn password_inputs_are_masked() {
    assert_eq!(LoginField::Password.input_type(), "password");
    assert_eq!(RegistrationField::Password.input_type(), "password");
    assert_eq!(RegistrationField::ConfirmPassword.input_type(), "password");
    assert_eq!(RegistrationField::Name.input_type(), "text");
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn login_success_resets_form() {
    assert_eq!(LoginForm::ON_SUCCESS, SuccessAction::ResetForm);
    assert_eq!(LoginForm::SUCCESS_MESSAGE, "Login successful! Redirecting...");
}

#[test]
fn registration_success_navigates_to_login() {
    assert_eq!(RegistrationForm::ON_SUCCESS, SuccessAction::Navigate(AppRoute::Login));
    assert_eq!(
        RegistrationForm::SUCCESS_MESSAGE,
        "Registration successful! Redirecting to login..."
    );
}
