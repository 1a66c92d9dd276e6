//! Registration page: name, email, password and confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the login page with the extended field set. A valid submit shows
//! the success banner and navigates to `/login` after `SUCCESS_DELAY`; the
//! delayed navigation is dropped if the user leaves first.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormFields;
use crate::components::success_alert::SuccessAlert;
use crate::routes::AppRoute;
use crate::state::flow::{FormFlow, SUCCESS_DELAY};
use crate::state::form::{RegistrationForm, SuccessAction};
use crate::util::delay::DelayGuard;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let flow = RwSignal::new(FormFlow::<RegistrationForm>::default());
    let delay = DelayGuard::install();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(ticket) = flow.try_update(FormFlow::submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        flow.with_untracked(|f| {
            log::info!("registration attempt for {} <{}>", f.values.name, f.values.email);
        });

        let navigate = navigate.clone();
        delay.run_after(SUCCESS_DELAY, move || {
            if let Some(SuccessAction::Navigate(route)) = flow.try_update(|f| f.complete(ticket)) {
                navigate(route.path(), NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="registration-container">
            <div class="registration-card">
                <div class="registration-header">
                    <h2>"Create Account"</h2>
                    <p class="text-muted">"Join our banking platform"</p>
                </div>
                <SuccessAlert flow=flow/>
                <form on:submit=on_submit novalidate=true>
                    <FormFields flow=flow/>
                    <button type="submit" class="btn btn-primary w-100 mb-3">
                        "Register"
                    </button>
                    <div class="text-center">
                        <p class="mb-0">
                            "Already have an account? "
                            <a href=AppRoute::Login.path() class="text-decoration-none">
                                "Sign in here"
                            </a>
                        </p>
                    </div>
                </form>
            </div>
        </div>
    }
}
