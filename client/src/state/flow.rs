//! Edit/submit/success state machine shared by the login and registration pages.
//!
//! DESIGN
//! ======
//! `FormFlow` is plain data held in a `RwSignal` by each page. Pages translate
//! DOM events into `edit` / `submit` calls and run the returned
//! `SuccessTicket` through a delayed action; when the delay fires they call
//! `complete` and act on the returned `SuccessAction`.
//!
//! A scheduled follow-up always runs once its delay elapses, even if the user
//! resubmits in between. The only cancellation is the page unmounting (see
//! `util::delay`).

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use std::time::Duration;

use super::form::{ErrorMap, FormModel, SuccessAction};

/// How long the success message stays up before the follow-up action runs.
pub const SUCCESS_DELAY: Duration = Duration::from_millis(2000);

/// Observable phase of a form page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowPhase {
    #[default]
    Editing,
    /// Last submit failed; at least one field error is still shown.
    ShowingErrors,
    /// Last submit passed; waiting for the delayed action.
    ShowingSuccess,
}

/// Handle for the delayed action scheduled by a successful submit.
///
/// Consumed by `FormFlow::complete`, so each ticket completes once.
#[derive(Debug, PartialEq, Eq)]
pub struct SuccessTicket {
    _private: (),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormFlow<M: FormModel> {
    pub values: M,
    pub errors: ErrorMap<M::Field>,
    pub success: Option<&'static str>,
}

impl<M: FormModel> Default for FormFlow<M> {
    fn default() -> Self {
        Self { values: M::default(), errors: ErrorMap::new(), success: None }
    }
}

impl<M: FormModel> FormFlow<M> {
    pub fn phase(&self) -> FlowPhase {
        if self.success.is_some() {
            FlowPhase::ShowingSuccess
        } else if !self.errors.is_empty() {
            FlowPhase::ShowingErrors
        } else {
            FlowPhase::Editing
        }
    }

    pub fn value(&self, field: M::Field) -> &str {
        self.values.value(field)
    }

    pub fn error(&self, field: M::Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Record a keystroke. Clears only this field's error; other errors stay.
    pub fn edit(&mut self, field: M::Field, value: String) {
        self.values.set_value(field, value);
        self.errors.remove(&field);
    }

    /// Validate the current values.
    ///
    /// On success shows the form's success message and returns the ticket for
    /// the delayed follow-up. On failure stores the new error map and hides
    /// any previous success message.
    pub fn submit(&mut self) -> Option<SuccessTicket> {
        let errors = self.values.validate();
        if errors.is_empty() {
            self.errors.clear();
            self.success = Some(M::SUCCESS_MESSAGE);
            Some(SuccessTicket { _private: () })
        } else {
            self.errors = errors;
            self.success = None;
            None
        }
    }

    /// Finish a delayed success.
    ///
    /// `ResetForm` clears the values and the success message here; errors from
    /// a later failed submit are left as they are. `Navigate` is returned for
    /// the page to perform, leaving this state untouched since the page is
    /// going away.
    pub fn complete(&mut self, ticket: SuccessTicket) -> SuccessAction {
        let SuccessTicket { _private: () } = ticket;
        if M::ON_SUCCESS == SuccessAction::ResetForm {
            self.values = M::default();
            self.success = None;
        }
        M::ON_SUCCESS
    }
}
