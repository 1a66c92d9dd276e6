//! Route table for the two form screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` builds its router from these segments (with `/` redirecting to
//! `AppRoute::Login`), pages link to each other through `AppRoute::path`, and
//! the registration success action navigates with it. No guards: every route
//! is public.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// A screen reachable by path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Register,
}

impl AppRoute {
    /// Absolute path used for links and navigation.
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
        }
    }

    /// Path segment as the router expects it (no leading slash).
    pub fn segment(self) -> &'static str {
        &self.path()[1..]
    }
}
