//! Transient failure notice pinned to the top-right corner.

use leptos::prelude::*;

use crate::state::registration::RegistrationUi;

#[component]
pub fn NoticeToast(ui: RwSignal<RegistrationUi>) -> impl IntoView {
    let message = move || ui.with(|ui| ui.notice().map(str::to_owned));

    view! {
        <Show when=move || message().is_some()>
            <div class="notice-toast animate-slide-in-right" role="alert">
                <span>{move || message().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
