//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome from a page's `FormFlow` signal and write
//! edits back through it.

pub mod form_field;
pub mod success_alert;
