//! Registration form state machine.
//!
//! DESIGN
//! ======
//! `RegistrationForm` owns the four [`FieldState`]s and the
//! [`SubmissionState`]. It is constructed once per page and never reaches
//! into the document: every visible effect is a call on the injected
//! [`FormView`], and the account is created through an injected
//! [`Registrar`].
//!
//! Two ways to drive it:
//! - step-wise, with [`RegistrationForm::begin_submit`] and
//!   [`RegistrationForm::finish_submit`] around a caller-spawned request;
//! - as an event loop, with [`RegistrationForm::run`] over a
//!   [`crate::events::FormEvents`] stream.
//!
//! LIFECYCLE
//! =========
//! `Idle -> Validating -> (Idle | Submitting) -> (Success | Failed -> Idle)`.
//! `Success` is terminal for the page session.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use futures::future::{self, Either};
use futures::{Stream, StreamExt};

use crate::error::SubmissionError;
use crate::events::FormEvent;
use crate::field::{Field, FieldState, Fields};
use crate::registrar::{Registrar, Registration};
use crate::timing::FAILURE_NOTICE;
use crate::validate::{self, Strength};

/// Where the form is in its submission lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}

impl SubmissionState {
    /// Whether the submit control should be disabled.
    #[must_use]
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Element that gets the shake animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShakeTarget {
    Field(Field),
    Submit,
}

/// Rendering surface for the form's side effects.
pub trait FormView {
    /// Show `message` under `field` and drop its success indicator.
    fn field_invalid(&mut self, field: Field, message: &str);

    /// Hide the error under `field` and show a single success indicator.
    fn field_valid(&mut self, field: Field);

    /// Update the password strength meter.
    fn password_strength(&mut self, strength: Strength);

    /// Run the fixed-duration shake animation on `target`.
    fn shake(&mut self, target: ShakeTarget);

    /// The submission state changed. `Submitting` means disabled + loading;
    /// `Success` means the confirmation view replaces the form.
    fn submission_changed(&mut self, state: SubmissionState);

    /// Show a transient, auto-dismissing notification.
    fn notify_failure(&mut self, message: &str);
}

/// Result of [`RegistrationForm::begin_submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStep {
    /// A registration is already in flight or has succeeded.
    Ignored,
    /// At least one field is invalid; nothing was sent.
    Rejected,
    /// All fields are valid; send this to the registrar.
    Ready(Registration),
}

/// The registration form component.
#[derive(Clone, Debug, Default)]
pub struct RegistrationForm {
    fields: Fields,
    strength: Option<Strength>,
    state: SubmissionState,
}

impl RegistrationForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(&self, field: Field) -> &FieldState {
        self.fields.get(field)
    }

    /// Strength of the password as of its last validation.
    #[must_use]
    pub fn strength(&self) -> Option<Strength> {
        self.strength
    }

    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Conjunction of the stored field verdicts. Not re-validated.
    #[must_use]
    pub fn all_valid(&self) -> bool {
        self.fields.all_valid()
    }

    /// Store a new value for `field` and validate that field only.
    ///
    /// Ignored once registration has succeeded. Returns the field's verdict.
    pub fn input<V: FormView + ?Sized>(&mut self, field: Field, value: impl Into<String>, view: &mut V) -> bool {
        if self.state == SubmissionState::Success {
            tracing::debug!(field = field.id(), "input ignored after successful registration");
            return false;
        }
        self.fields.get_mut(field).raw_value = value.into();
        self.validate(field, view)
    }

    /// Re-run the rule for `field` against its current value.
    ///
    /// The confirmation is checked against the password value at this
    /// moment; changing the password later does not revisit it.
    pub fn validate<V: FormView + ?Sized>(&mut self, field: Field, view: &mut V) -> bool {
        let raw = &self.fields.get(field).raw_value;
        let verdict = match field {
            Field::Username => validate::validate_username(raw),
            Field::Email => validate::validate_email(raw),
            Field::Password => {
                let (verdict, strength) = match validate::validate_password(raw) {
                    Ok(strength) => (Ok(()), strength),
                    Err((err, strength)) => (Err(err), strength),
                };
                self.strength = Some(strength);
                view.password_strength(strength);
                verdict
            }
            Field::ConfirmPassword => {
                validate::validate_confirm_password(&self.fields.get(Field::Password).raw_value, raw)
            }
        };

        let state = self.fields.get_mut(field);
        match verdict {
            Ok(()) => {
                state.is_valid = true;
                state.error_message = None;
                view.field_valid(field);
                true
            }
            Err(err) => {
                let message = err.to_string();
                view.field_invalid(field, &message);
                view.shake(ShakeTarget::Field(field));
                state.is_valid = false;
                state.error_message = Some(message);
                false
            }
        }
    }

    /// Handle the submit trigger up to the point of calling the registrar.
    ///
    /// Every validator runs, even for fields that already passed. On
    /// [`SubmitStep::Ready`] the form is `Submitting` and the caller must
    /// report the outcome through [`Self::finish_submit`].
    pub fn begin_submit<V: FormView + ?Sized>(&mut self, view: &mut V) -> SubmitStep {
        match self.state {
            SubmissionState::Submitting => {
                tracing::debug!("submit ignored while a registration is in flight");
                return SubmitStep::Ignored;
            }
            SubmissionState::Success => {
                tracing::debug!("submit ignored after successful registration");
                return SubmitStep::Ignored;
            }
            SubmissionState::Idle | SubmissionState::Validating | SubmissionState::Failed => {}
        }

        self.transition(SubmissionState::Validating, view);
        let mut all_valid = true;
        for field in Field::ALL {
            all_valid &= self.validate(field, view);
        }

        if !all_valid {
            tracing::debug!("submit rejected: invalid fields");
            view.shake(ShakeTarget::Submit);
            self.transition(SubmissionState::Idle, view);
            return SubmitStep::Rejected;
        }

        self.transition(SubmissionState::Submitting, view);
        SubmitStep::Ready(self.registration())
    }

    /// Apply the registrar's answer to an in-flight submission.
    ///
    /// Returns the resulting state: `Success`, or `Idle` after a failure.
    pub fn finish_submit<V: FormView + ?Sized>(
        &mut self,
        result: Result<(), SubmissionError>,
        view: &mut V,
    ) -> SubmissionState {
        if self.state != SubmissionState::Submitting {
            tracing::warn!(state = ?self.state, "registration result without a pending submission");
            return self.state;
        }
        match result {
            Ok(()) => {
                tracing::info!(username = %self.fields.get(Field::Username).raw_value.trim(), "registration succeeded");
                self.transition(SubmissionState::Success, view);
            }
            Err(err) => {
                tracing::warn!(error = %err, "registration failed");
                self.transition(SubmissionState::Failed, view);
                view.notify_failure(FAILURE_NOTICE);
                self.transition(SubmissionState::Idle, view);
            }
        }
        self.state
    }

    /// Submit and wait for the registrar in one call.
    pub async fn submit<R, V>(&mut self, registrar: &R, view: &mut V) -> SubmissionState
    where
        R: Registrar + ?Sized,
        V: FormView + ?Sized,
    {
        let SubmitStep::Ready(registration) = self.begin_submit(view) else {
            return self.state;
        };
        let result = registrar.register(&registration).await;
        self.finish_submit(result, view)
    }

    /// Consume `events` until the stream ends.
    ///
    /// While a registration is pending, input events are still applied and
    /// further submits are dropped.
    pub async fn run<S, R, V>(&mut self, mut events: S, registrar: &R, view: &mut V)
    where
        S: Stream<Item = FormEvent> + Unpin,
        R: Registrar + ?Sized,
        V: FormView + ?Sized,
    {
        while let Some(event) = events.next().await {
            let registration = match event {
                FormEvent::Input { field, value } => {
                    self.input(field, value, view);
                    continue;
                }
                FormEvent::Submit => match self.begin_submit(view) {
                    SubmitStep::Ready(registration) => registration,
                    SubmitStep::Ignored | SubmitStep::Rejected => continue,
                },
            };

            let mut pending = registrar.register(&registration);
            let result = loop {
                let next = match future::select(pending.as_mut(), events.next()).await {
                    Either::Left((result, _)) => break result,
                    Either::Right((next, _)) => next,
                };
                match next {
                    Some(FormEvent::Input { field, value }) => {
                        self.input(field, value, view);
                    }
                    Some(FormEvent::Submit) => {
                        tracing::debug!("submit ignored while a registration is in flight");
                    }
                    None => break pending.await,
                }
            };
            self.finish_submit(result, view);
        }
    }

    fn registration(&self) -> Registration {
        Registration {
            username: self.fields.get(Field::Username).raw_value.trim().to_owned(),
            email: self.fields.get(Field::Email).raw_value.trim().to_owned(),
            password: self.fields.get(Field::Password).raw_value.clone(),
        }
    }

    fn transition<V: FormView + ?Sized>(&mut self, next: SubmissionState, view: &mut V) {
        tracing::debug!(from = ?self.state, to = ?next, "submission state");
        self.state = next;
        view.submission_changed(next);
    }
}
