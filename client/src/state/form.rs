//! Form field values and the per-form field sets.
//!
//! DESIGN
//! ======
//! Each form is a plain struct of strings keyed by a small `Copy` field enum.
//! The enum doubles as the `ErrorMap` key and carries the markup attributes
//! (`id`, label, placeholder) so pages render fields from one table.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::routes::AppRoute;
use crate::util::validation;

/// Field → message for every field currently failing validation.
///
/// Passing fields are absent; an empty map means the form is valid.
pub type ErrorMap<F> = BTreeMap<F, &'static str>;

/// What a successful submission does once its delay elapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuccessAction {
    /// Clear every field and the success message.
    ResetForm,
    /// Leave the page.
    Navigate(AppRoute),
}

/// Markup attributes for one input.
pub trait FieldMeta: Copy + Ord + Debug + Send + Sync + 'static {
    /// `id` and `name` attribute.
    fn id(self) -> &'static str;
    fn label(self) -> &'static str;
    fn placeholder(self) -> &'static str;
    /// `type` attribute of the input.
    fn input_type(self) -> &'static str;
}

/// A form's values plus the rules and outcome attached to it.
pub trait FormModel: Clone + Default + Debug + PartialEq + Send + Sync + 'static {
    type Field: FieldMeta;

    /// Fields in render order.
    const FIELDS: &'static [Self::Field];
    const SUCCESS_MESSAGE: &'static str;
    const ON_SUCCESS: SuccessAction;

    fn value(&self, field: Self::Field) -> &str;
    fn set_value(&mut self, field: Self::Field, value: String);
    fn validate(&self) -> ErrorMap<Self::Field>;
}

// =============================================================================
// LOGIN
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoginField {
    Email,
    Password,
}

impl FieldMeta for LoginField {
    fn id(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Email => "Email Address",
            Self::Password => "Password",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Self::Email => "Enter your email",
            Self::Password => "Enter your password",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl FormModel for LoginForm {
    type Field = LoginField;

    const FIELDS: &'static [LoginField] = &[LoginField::Email, LoginField::Password];
    const SUCCESS_MESSAGE: &'static str = "Login successful! Redirecting...";
    const ON_SUCCESS: SuccessAction = SuccessAction::ResetForm;

    fn value(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    fn set_value(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
        }
    }

    fn validate(&self) -> ErrorMap<LoginField> {
        validation::validate_login_form(self)
    }
}

// =============================================================================
// REGISTRATION
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RegistrationField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldMeta for RegistrationField {
    fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Enter your full name",
            Self::Email => "Enter your email",
            Self::Password => "Enter your password",
            Self::ConfirmPassword => "Confirm your password",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            Self::Name => "text",
            Self::Email => "email",
            Self::Password | Self::ConfirmPassword => "password",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormModel for RegistrationForm {
    type Field = RegistrationField;

    const FIELDS: &'static [RegistrationField] = &[
        RegistrationField::Name,
        RegistrationField::Email,
        RegistrationField::Password,
        RegistrationField::ConfirmPassword,
    ];
    const SUCCESS_MESSAGE: &'static str = "Registration successful! Redirecting to login...";
    const ON_SUCCESS: SuccessAction = SuccessAction::Navigate(AppRoute::Login);

    fn value(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Name => &self.name,
            RegistrationField::Email => &self.email,
            RegistrationField::Password => &self.password,
            RegistrationField::ConfirmPassword => &self.confirm_password,
        }
    }

    fn set_value(&mut self, field: RegistrationField, value: String) {
        match field {
            RegistrationField::Name => self.name = value,
            RegistrationField::Email => self.email = value,
            RegistrationField::Password => self.password = value,
            RegistrationField::ConfirmPassword => self.confirm_password = value,
        }
    }

    fn validate(&self) -> ErrorMap<RegistrationField> {
        validation::validate_registration_form(self)
    }
}
