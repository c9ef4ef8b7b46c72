//! Registration page: four validated inputs, a strength meter, and the
//! submit/confirmation flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! DOM events go into a `FormEmitter`; one `RegistrationForm::run` loop,
//! spawned when the page mounts, consumes them and decides every transition.
//! Its effects land in [`RegistrationUi`] through [`SignalView`], and queued
//! expiries become browser timers.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use registration::{Field, FormView, ShakeTarget, Strength, SubmissionState};

use crate::components::field_input::FieldInput;
use crate::components::notice_toast::NoticeToast;
#[cfg(feature = "hydrate")]
use crate::state::registration::Expiry;
use crate::state::registration::RegistrationUi;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ui = RwSignal::new(RegistrationUi::default());
    let (emitter, events) = registration::events::channel();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let mut form = registration::RegistrationForm::new();
        let mut view = SignalView { ui };
        form.run(events, &crate::net::api::ApiRegistrar, &mut view).await;
    });
    #[cfg(not(feature = "hydrate"))]
    drop(events);

    let emitter = StoredValue::new(emitter);

    let on_input = Callback::new(move |(field, value): (Field, String)| {
        emitter.with_value(|emitter| emitter.input(field, value));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        emitter.with_value(registration::FormEmitter::submit);
    };

    let submitting = move || ui.with(RegistrationUi::is_submitting);
    let registered = move || ui.with(RegistrationUi::is_registered);

    view! {
        <div class="register-page">
            <NoticeToast ui=ui/>
            <div class="register-card">
                <Show when=move || !registered() fallback=|| view! { <Confirmation/> }>
                    <h1 class="register-title">"Create your account"</h1>
                    <p class="register-subtitle">"Join SafeText in under a minute."</p>
                    <form id="registrationForm" class="registration-form" novalidate=true on:submit=on_submit>
                        <FieldInput
                            field=Field::Username
                            label="Username"
                            input_type="text"
                            placeholder="your_name"
                            ui=ui
                            on_input=on_input
                        />
                        <FieldInput
                            field=Field::Email
                            label="Email"
                            input_type="email"
                            placeholder="you@example.com"
                            ui=ui
                            on_input=on_input
                        />
                        <FieldInput
                            field=Field::Password
                            label="Password"
                            input_type="password"
                            placeholder="At least 8 characters"
                            ui=ui
                            on_input=on_input
                        />
                        <div id="password-strength" class=move || strength_class(ui.with(RegistrationUi::strength))>
                            <div class="strength-bar"></div>
                        </div>
                        <FieldInput
                            field=Field::ConfirmPassword
                            label="Confirm password"
                            input_type="password"
                            placeholder="Repeat your password"
                            ui=ui
                            on_input=on_input
                        />
                        <button
                            id="submitBtn"
                            type="submit"
                            class="submit-btn"
                            class:loading=submitting
                            class:shake=move || ui.with(|ui| ui.is_shaking(ShakeTarget::Submit))
                            disabled=submitting
                        >
                            <span class="btn-text">"Create Account"</span>
                            <span class="btn-loader"></span>
                        </button>
                    </form>
                    <p class="register-footer">
                        "Changed your mind? "
                        <a href="/">"Back to home"</a>
                    </p>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn Confirmation() -> impl IntoView {
    view! {
        <div class="success-message animate-fade-in">
            <div class="success-icon"></div>
            <h2>"Welcome to SafeText!"</h2>
            <p>"Your account has been created successfully."</p>
            <button
                type="button"
                class="submit-btn"
                on:click=move |_| {
                    #[cfg(feature = "hydrate")]
                    {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }
                }
            >
                "Continue to Dashboard"
            </button>
        </div>
    }
}

/// [`FormView`] over the page signal. Effects that queue timers are
/// followed by [`schedule_expiries`].
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
struct SignalView {
    ui: RwSignal<RegistrationUi>,
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
impl SignalView {
    fn apply(&self, effect: impl FnOnce(&mut RegistrationUi)) {
        let _ = self.ui.try_update(effect);
    }
}

impl FormView for SignalView {
    fn field_invalid(&mut self, field: Field, message: &str) {
        self.apply(|ui| ui.field_invalid(field, message));
    }

    fn field_valid(&mut self, field: Field) {
        self.apply(|ui| ui.field_valid(field));
    }

    fn password_strength(&mut self, strength: Strength) {
        self.apply(|ui| ui.password_strength(strength));
    }

    fn shake(&mut self, target: ShakeTarget) {
        self.apply(|ui| ui.shake(target));
        schedule_expiries(self.ui);
    }

    fn submission_changed(&mut self, state: SubmissionState) {
        self.apply(|ui| ui.submission_changed(state));
    }

    fn notify_failure(&mut self, message: &str) {
        self.apply(|ui| ui.notify_failure(message));
        schedule_expiries(self.ui);
    }
}

/// CSS classes for the strength meter; hidden until a password is typed.
fn strength_class(strength: Option<Strength>) -> String {
    match strength {
        Some(strength) => format!("password-strength show {}", strength.as_str()),
        None => "password-strength".to_owned(),
    }
}

/// Arm one timer per queued effect and clear it when the timer fires.
fn schedule_expiries(ui: RwSignal<RegistrationUi>) {
    let expiries = ui.try_update(RegistrationUi::take_expiries).unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        for expiry in expiries {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(Expiry::duration(expiry)).await;
                let _ = ui.try_update(|ui| ui.expire(expiry));
            });
        }
    }

    #[cfg(not(feature = "hydrate"))]
    drop(expiries);
}
