//! Field validation for the login and registration forms.
//!
//! Pure functions: every call recomputes the full `ErrorMap` from the form
//! values. Each field is checked independently and only the first failing
//! rule for a field is reported.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::state::form::{ErrorMap, LoginField, LoginForm, RegistrationField, RegistrationForm};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_NAME_LEN: usize = 2;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const CONFIRM_REQUIRED: &str = "Please confirm your password";
pub const PASSWORDS_MISMATCH: &str = "Passwords do not match";

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

/// Loose `local@domain.tld` shape check. No RFC 5322 parsing, no length limits.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value))
}

fn check_email(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !is_valid_email(value) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

fn check_password(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some(PASSWORD_REQUIRED)
    } else if value.chars().count() < MIN_PASSWORD_LEN {
        Some(PASSWORD_TOO_SHORT)
    } else {
        None
    }
}

fn check_name(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(NAME_REQUIRED)
    } else if trimmed.chars().count() < MIN_NAME_LEN {
        Some(NAME_TOO_SHORT)
    } else {
        None
    }
}

fn check_confirmation(password: &str, confirm: &str) -> Option<&'static str> {
    if confirm.is_empty() {
        Some(CONFIRM_REQUIRED)
    } else if confirm != password {
        Some(PASSWORDS_MISMATCH)
    } else {
        None
    }
}

/// Validate the login form.
pub fn validate_login_form(form: &LoginForm) -> ErrorMap<LoginField> {
    [
        (LoginField::Email, check_email(&form.email)),
        (LoginField::Password, check_password(&form.password)),
    ]
    .into_iter()
    .filter_map(|(field, message)| message.map(|m| (field, m)))
    .collect()
}

/// Validate the registration form: login rules plus name and confirmation.
pub fn validate_registration_form(form: &RegistrationForm) -> ErrorMap<RegistrationField> {
    [
        (RegistrationField::Name, check_name(&form.name)),
        (RegistrationField::Email, check_email(&form.email)),
        (RegistrationField::Password, check_password(&form.password)),
        (
            RegistrationField::ConfirmPassword,
            check_confirmation(&form.password, &form.confirm_password),
        ),
    ]
    .into_iter()
    .filter_map(|(field, message)| message.map(|m| (field, m)))
    .collect()
}
