//! Login page: email + password with local validation.
//!
//! A valid submit shows the success banner and, after `SUCCESS_DELAY`, clears
//! the form. Nothing is sent anywhere.

use leptos::prelude::*;

use crate::components::form_field::FormFields;
use crate::components::success_alert::SuccessAlert;
use crate::routes::AppRoute;
use crate::state::flow::{FormFlow, SUCCESS_DELAY};
use crate::state::form::LoginForm;
use crate::util::delay::DelayGuard;

#[component]
pub fn LoginPage() -> impl IntoView {
    let flow = RwSignal::new(FormFlow::<LoginForm>::default());
    let delay = DelayGuard::install();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(ticket) = flow.try_update(FormFlow::submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        log::info!("login attempt for {}", flow.with_untracked(|f| f.values.email.clone()));

        delay.run_after(SUCCESS_DELAY, move || {
            flow.update(|f| {
                f.complete(ticket);
            });
        });
    };

    view! {
        <div class="login-container">
            <div class="login-card">
                <div class="login-header">
                    <h2>"Banking App"</h2>
                    <p class="text-muted">"Sign in to your account"</p>
                </div>
                <SuccessAlert flow=flow/>
                <form on:submit=on_submit novalidate=true>
                    <FormFields flow=flow/>
                    <button type="submit" class="btn btn-primary w-100 mb-3">
                        "Sign In"
                    </button>
                    <div class="text-center">
                        <p class="mb-0">
                            "Don't have an account? "
                            <a href=AppRoute::Register.path() class="text-decoration-none">
                                "Register here"
                            </a>
                        </p>
                    </div>
                </form>
            </div>
        </div>
    }
}
