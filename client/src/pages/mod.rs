//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form flow and delayed success action, and delegates
//! field rendering to `components`.

pub mod login;
pub mod register;
