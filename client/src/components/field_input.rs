//! Labelled registration input with inline error text and success check.

use leptos::prelude::*;
use registration::{Field, ShakeTarget};

use crate::state::registration::RegistrationUi;

/// One registration input.
///
/// Password-type inputs get a show/hide toggle. The error paragraph stays
/// mounted so screen readers can resolve `aria-describedby`.
#[component]
pub fn FieldInput(
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    ui: RwSignal<RegistrationUi>,
    on_input: Callback<(Field, String)>,
) -> impl IntoView {
    let secret = input_type == "password";
    let revealed = RwSignal::new(false);

    let current_type = move || if secret && revealed.get() { "text" } else { input_type };
    let error = move || ui.with(|ui| ui.field(field).error);
    let indicator = move || ui.with(|ui| ui.field(field).indicator);
    let shaking = move || ui.with(|ui| ui.is_shaking(ShakeTarget::Field(field)));

    view! {
        <div class="form-group">
            <label class="input-label" for=field.id()>{label}</label>
            <div class="input-wrap">
                <input
                    id=field.id()
                    name=field.id()
                    class="input-field"
                    class:shake=shaking
                    class:invalid=move || error().is_some()
                    type=current_type
                    placeholder=placeholder
                    autocomplete="off"
                    aria-describedby=field.error_id()
                    on:input=move |ev| on_input.run((field, event_target_value(&ev)))
                />
                <Show when=move || secret>
                    <button
                        type="button"
                        class="password-toggle"
                        on:click=move |_| revealed.update(|r| *r = !*r)
                    >
                        {move || if revealed.get() { "Hide" } else { "Show" }}
                    </button>
                </Show>
                <Show when=indicator>
                    <div class="success-indicator">
                        <div class="success-checkmark"></div>
                    </div>
                </Show>
            </div>
            <p id=field.error_id() class="error-message" class:show=move || error().is_some()>
                {move || error().unwrap_or_default()}
            </p>
        </div>
    }
}
