//! Success banner shown between a valid submit and its delayed follow-up.

use leptos::prelude::*;

use crate::state::flow::{FlowPhase, FormFlow};
use crate::state::form::FormModel;

#[component]
pub fn SuccessAlert<M: FormModel>(flow: RwSignal<FormFlow<M>>) -> impl IntoView {
    let message = move || flow.with(|f| f.success);
    let showing = move || flow.with(|f| f.phase() == FlowPhase::ShowingSuccess);

    view! {
        <Show when=showing>
            <div class="alert alert-success" role="alert">
                {move || message().unwrap_or_default()}
            </div>
        </Show>
    }
}
