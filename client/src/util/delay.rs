//! One-shot delayed actions tied to a page's lifetime.
//!
//! A page creates one `DelayGuard` at setup. Actions scheduled through it are
//! dropped instead of run if the page has been unmounted by the time the
//! timer fires. Requires a browser environment; SSR never fires timers.

#[cfg(test)]
#[path = "delay_test.rs"]
mod delay_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::prelude::on_cleanup;

/// Cancellation flag shared between a page and its pending timers.
#[derive(Clone, Debug)]
pub struct DelayGuard {
    alive: Arc<AtomicBool>,
}

impl Default for DelayGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayGuard {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Create a guard cancelled by the current owner's cleanup.
    pub fn install() -> Self {
        let guard = Self::new();
        let on_unmount = guard.clone();
        on_cleanup(move || on_unmount.cancel());
        guard
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Run `action` now if the guard is still alive; otherwise drop it.
    ///
    /// Returns whether the action ran.
    pub fn fire_if_alive<F>(&self, action: F) -> bool
    where
        F: FnOnce(),
    {
        if self.is_alive() {
            action();
            true
        } else {
            #[cfg(feature = "hydrate")]
            log::debug!("delayed action dropped: page unmounted");
            false
        }
    }

    /// Run `action` once after `delay`, unless cancelled first.
    pub fn run_after<F>(&self, delay: Duration, action: F)
    where
        F: FnOnce() + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let guard = self.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                guard.fire_if_alive(action);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay, action);
        }
    }
}
