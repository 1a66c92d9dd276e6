//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the response logic so route handlers stay focused on
//! protocol translation.

pub mod greeting;
