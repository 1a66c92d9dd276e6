//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `form` holds field values and per-form metadata; `flow` drives the
//! edit/submit/success lifecycle on top of it. Both are plain data so the
//! pages only wrap them in signals.

pub mod flow;
pub mod form;
