//! Landing page: product pitch, the live analysis demo, and a link to
//! registration.

use leptos::prelude::*;

use crate::components::analysis_demo::AnalysisDemo;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <main class="landing-page">
            <section class="hero">
                <h1 class="hero-title">"SafeText"</h1>
                <p class="hero-subtitle">
                    "Catch toxic, insulting and threatening messages before they reach your community."
                </p>
                <div class="hero-actions">
                    <a href="/register" class="cta-primary">"Create an account"</a>
                    <a href="#demo" class="cta-secondary">"Try the demo"</a>
                </div>
            </section>
            <AnalysisDemo/>
        </main>
    }
}
