//! Landing-page demo that sends free text to the analyzer and renders one
//! bar per category.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requests go through the server's `/api/analyze` proxy (see
//! `crate::net::api::analyze_text`). Render state lives in
//! [`DemoState`].

use leptos::prelude::*;

use crate::state::demo::{DemoState, DemoStatus};

#[component]
pub fn AnalysisDemo() -> impl IntoView {
    let input = RwSignal::new(String::new());
    let demo = RwSignal::new(DemoState::default());

    let on_analyze = move |_| {
        let value = input.get_untracked();
        let Some(text) = demo.try_update(|d| d.begin(&value)).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let started = js_sys::Date::now();
            let result = crate::net::api::analyze_text(&text).await;
            let elapsed = js_sys::Date::now() - started;
            if let Err(e) = &result {
                log::error!("text analysis failed: {e}");
            }
            let _ = demo.try_update(|d| d.finish(result, elapsed));
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = text;
    };

    let analyzing = move || demo.with(|d| d.status == DemoStatus::Analyzing);
    let summary = move || demo.with(|d| d.report().map(|r| (r.toxicity_text(), r.band)));

    view! {
        <section id="demo" class="demo-section">
            <h2 class="demo-title">"Try it"</h2>
            <textarea
                id="demo-input"
                class="demo-input"
                rows="4"
                placeholder="Type a message to check..."
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            ></textarea>
            <button id="analyze-btn" class="analyze-btn" on:click=on_analyze disabled=analyzing>
                {move || if analyzing() { "Analyzing..." } else { "Analyze" }}
            </button>

            <Show when=move || demo.with(DemoState::is_visible)>
                <div id="demo-result" class="demo-result">
                    <div class="flex justify-between items-center">
                        <span id="result-status" class=move || demo.with(DemoState::status_class)>
                            {move || demo.with(DemoState::status_text)}
                        </span>
                        <span id="processing-time" class="text-sm text-slate-400">
                            {move || demo.with(DemoState::processing_text)}
                        </span>
                    </div>
                    {move || {
                        summary()
                            .map(|(text, band)| {
                                view! {
                                    <div class="toxicity-summary">
                                        <span>"Toxicity"</span>
                                        <span class=band.color_class()>{text}</span>
                                        <span class="band-label">{band.label()}</span>
                                    </div>
                                }
                            })
                    }}
                    <div id="demo-labels-container">
                        {move || {
                            demo.with(DemoState::categories)
                                .into_iter()
                                .map(|category| {
                                    let width = format!("{}%", category.percent);
                                    let bar_class = format!(
                                        "h-4 rounded-full transition-all duration-1000 {}",
                                        category.band().color_class()
                                    );
                                    view! {
                                        <div class="label-bar mt-4">
                                            <div class="flex justify-between text-sm font-medium text-slate-200 mb-1">
                                                <span>{category.display_label()}</span>
                                                <span>{category.percent_text()}</span>
                                            </div>
                                            <div class="w-full bg-slate-600 rounded-full h-4">
                                                <div class=bar_class style:width=width></div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </Show>
        </section>
    }
}
