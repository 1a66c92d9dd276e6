//! Labelled input bound to one field of a form flow.

use leptos::prelude::*;

use crate::state::flow::FormFlow;
use crate::state::form::{FieldMeta, FormModel};

/// Input with label and inline validation message.
///
/// Typing writes through `FormFlow::edit`, which also clears this field's
/// error. The `is-invalid` class is applied while an error is present.
#[component]
pub fn FormField<M: FormModel>(flow: RwSignal<FormFlow<M>>, field: M::Field) -> impl IntoView {
    let error = move || flow.with(|f| f.error(field));
    let input_class = move || {
        if error().is_some() {
            "form-control is-invalid"
        } else {
            "form-control"
        }
    };

    view! {
        <div class="mb-3">
            <label for=field.id() class="form-label">
                {field.label()}
            </label>
            <input
                type=field.input_type()
                class=input_class
                id=field.id()
                name=field.id()
                placeholder=field.placeholder()
                prop:value=move || flow.with(|f| f.value(field).to_owned())
                on:input=move |ev| flow.update(|f| f.edit(field, event_target_value(&ev)))
            />
            <Show when=move || error().is_some()>
                <div class="invalid-feedback">{move || error().unwrap_or_default()}</div>
            </Show>
        </div>
    }
}

/// Every field of `M` in render order.
#[component]
pub fn FormFields<M: FormModel>(flow: RwSignal<FormFlow<M>>) -> impl IntoView {
    M::FIELDS
        .iter()
        .map(|&field| view! { <FormField flow=flow field=field/> })
        .collect_view()
}
