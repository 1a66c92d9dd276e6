use super::*;
use crate::routes::AppRoute;
use crate::state::form::{LoginField, LoginForm, RegistrationField, RegistrationForm};
use crate::util::validation::{EMAIL_REQUIRED, PASSWORD_REQUIRED, PASSWORD_TOO_SHORT};

fn filled_login() -> FormFlow<LoginForm> {
    let mut flow = FormFlow::<LoginForm>::default();
    flow.edit(LoginField::Email, "a@b.com".to_owned());
    flow.edit(LoginField::Password, "123456".to_owned());
    flow
}

fn filled_registration() -> FormFlow<RegistrationForm> {
    let mut flow = FormFlow::<RegistrationForm>::default();
    flow.edit(RegistrationField::Name, "Ada".to_owned());
    flow.edit(RegistrationField::Email, "ada@example.com".to_owned());
    flow.edit(RegistrationField::Password, "engine1".to_owned());
    flow.edit(RegistrationField::ConfirmPassword, "engine1".to_owned());
    flow
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_flow_is_editing_with_empty_values() {
    let flow = FormFlow::<LoginForm>::default();
    assert_eq!(flow.phase(), FlowPhase::Editing);
    assert_eq!(flow.value(LoginField::Email), "");
    assert!(flow.errors.is_empty());
    assert_eq!(flow.success, None);
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_empty_login_shows_errors() {
    let mut flow = FormFlow::<LoginForm>::default();
    assert_eq!(flow.submit(), None);
    assert_eq!(flow.phase(), FlowPhase::ShowingErrors);
    assert_eq!(flow.error(LoginField::Email), Some(EMAIL_REQUIRED));
    assert_eq!(flow.error(LoginField::Password), Some(PASSWORD_REQUIRED));
}

#[test]
fn submit_valid_login_shows_success_message() {
    let mut flow = filled_login();
    assert!(flow.submit().is_some());
    assert_eq!(flow.phase(), FlowPhase::ShowingSuccess);
    assert_eq!(flow.success, Some("Login successful! Redirecting..."));
    assert!(flow.errors.is_empty());
}

#[test]
fn failed_submit_clears_success_message() {
    let mut flow = filled_login();
    flow.submit();
    flow.edit(LoginField::Password, "123".to_owned());
    assert_eq!(flow.submit(), None);
    assert_eq!(flow.success, None);
    assert_eq!(flow.error(LoginField::Password), Some(PASSWORD_TOO_SHORT));
}

#[test]
fn submit_replaces_error_map_wholesale() {
    let mut flow = FormFlow::<LoginForm>::default();
    flow.submit();
    flow.edit(LoginField::Email, "a@b.com".to_owned());
    flow.submit();
    assert_eq!(flow.error(LoginField::Email), None);
    assert_eq!(flow.error(LoginField::Password), Some(PASSWORD_REQUIRED));
}

// =============================================================
// edit
// =============================================================

#[test]
fn edit_clears_only_that_fields_error() {
    let mut flow = FormFlow::<LoginForm>::default();
    flow.submit();
    flow.edit(LoginField::Email, "x".to_owned());
    assert_eq!(flow.error(LoginField::Email), None);
    assert_eq!(flow.error(LoginField::Password), Some(PASSWORD_REQUIRED));
    assert_eq!(flow.phase(), FlowPhase::ShowingErrors);
}

#[test]
fn clearing_last_error_returns_to_editing() {
    let mut flow = FormFlow::<LoginForm>::default();
    flow.edit(LoginField::Email, "a@b.com".to_owned());
    flow.submit();
    flow.edit(LoginField::Password, "1".to_owned());
    assert_eq!(flow.phase(), FlowPhase::Editing);
}

#[test]
fn edit_without_error_keeps_other_errors() {
    let mut flow = FormFlow::<RegistrationForm>::default();
    flow.edit(RegistrationField::Name, "Ada".to_owned());
    flow.submit();
    let before = flow.errors.clone();
    flow.edit(RegistrationField::Name, "Adah".to_owned());
    assert_eq!(flow.errors, before);
}

// =============================================================
// complete
// =============================================================

#[test]
fn complete_resets_login_form() {
    let mut flow = filled_login();
    let ticket = flow.submit().unwrap();
    assert_eq!(flow.complete(ticket), SuccessAction::ResetForm);
    assert_eq!(flow.values, LoginForm::default());
    assert_eq!(flow.success, None);
    assert_eq!(flow.phase(), FlowPhase::Editing);
}

#[test]
fn complete_registration_requests_navigation_to_login() {
    let mut flow = filled_registration();
    let ticket = flow.submit().unwrap();
    assert_eq!(flow.complete(ticket), SuccessAction::Navigate(AppRoute::Login));
    // Values are left alone; the page unmounts on navigation.
    assert_eq!(flow.value(RegistrationField::Name), "Ada");
}

#[test]
fn failed_resubmit_does_not_cancel_registration_redirect() {
    let mut flow = filled_registration();
    let ticket = flow.submit().unwrap();
    flow.edit(RegistrationField::Name, String::new());
    assert!(flow.submit().is_none());
    assert_eq!(flow.complete(ticket), SuccessAction::Navigate(AppRoute::Login));
}

#[test]
fn failed_resubmit_still_resets_login_values_but_keeps_errors() {
    let mut flow = filled_login();
    let ticket = flow.submit().unwrap();
    flow.edit(LoginField::Email, String::new());
    flow.submit();
    assert_eq!(flow.complete(ticket), SuccessAction::ResetForm);
    assert_eq!(flow.values, LoginForm::default());
    assert_eq!(flow.error(LoginField::Email), Some(EMAIL_REQUIRED));
}

#[test]
fn first_timer_of_double_submit_resets_form() {
    let mut flow = filled_login();
    let first = flow.submit().unwrap();
    let second = flow.submit().unwrap();
    assert_eq!(flow.complete(first), SuccessAction::ResetForm);
    assert_eq!(flow.values, LoginForm::default());
    assert_eq!(flow.success, None);
    assert_eq!(flow.complete(second), SuccessAction::ResetForm);
    assert_eq!(flow.phase(), FlowPhase::Editing);
}

#[test]
fn edits_during_success_are_cleared_by_reset() {
    let mut flow = filled_login();
    let ticket = flow.submit().unwrap();
    flow.edit(LoginField::Email, "other@b.com".to_owned());
    assert_eq!(flow.complete(ticket), SuccessAction::ResetForm);
    assert_eq!(flow.value(LoginField::Email), "");
}

#[test]
fn default_flow_matches_fresh_form() {
    let flow = FormFlow::<RegistrationForm>::default();
    assert_eq!(flow.values, RegistrationForm::default());
    assert!(flow.errors.is_empty());
    assert_eq!(flow.success, None);
}
