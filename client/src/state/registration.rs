//! Render state of the registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RegistrationUi` is the [`FormView`] handed to the registration state
//! machine. Timed effects (shakes, the failure notice) are queued as
//! [`Expiry`] values; the page drains them and schedules a timer for each.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use std::collections::HashMap;
use std::time::Duration;

use registration::timing::{NOTICE_DURATION, SHAKE_DURATION};
use registration::{Field, FormView, ShakeTarget, Strength, SubmissionState};

/// Inline feedback for one input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldUi {
    pub error: Option<String>,
    pub indicator: bool,
}

/// A timed effect that must be cleared later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expiry {
    Shake { target: ShakeTarget, seq: u64 },
    Notice { seq: u64 },
}

impl Expiry {
    #[must_use]
    pub fn duration(self) -> Duration {
        match self {
            Self::Shake { .. } => SHAKE_DURATION,
            Self::Notice { .. } => NOTICE_DURATION,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RegistrationUi {
    fields: HashMap<Field, FieldUi>,
    strength: Option<Strength>,
    shaking: HashMap<ShakeTarget, u64>,
    submission: SubmissionState,
    notice: Option<(u64, String)>,
    seq: u64,
    expiries: Vec<Expiry>,
}

impl RegistrationUi {
    #[must_use]
    pub fn field(&self, field: Field) -> FieldUi {
        self.fields.get(&field).cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn strength(&self) -> Option<Strength> {
        self.strength
    }

    #[must_use]
    pub fn is_shaking(&self, target: ShakeTarget) -> bool {
        self.shaking.contains_key(&target)
    }

    /// Submit control disabled and showing its loader.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submission.is_busy()
    }

    /// The confirmation view replaces the form.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.submission == SubmissionState::Success
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|(_, message)| message.as_str())
    }

    /// Hand over the timed effects queued since the last call.
    pub fn take_expiries(&mut self) -> Vec<Expiry> {
        std::mem::take(&mut self.expiries)
    }

    /// Clear a timed effect unless it has been restarted since.
    pub fn expire(&mut self, expiry: Expiry) {
        match expiry {
            Expiry::Shake { target, seq } => {
                if self.shaking.get(&target) == Some(&seq) {
                    self.shaking.remove(&target);
                }
            }
            Expiry::Notice { seq } => {
                if self.notice.as_ref().is_some_and(|(current, _)| *current == seq) {
                    self.notice = None;
                }
            }
        }
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }
}

impl FormView for RegistrationUi {
    fn field_invalid(&mut self, field: Field, message: &str) {
        let ui = self.fields.entry(field).or_default();
        ui.error = Some(message.to_owned());
        ui.indicator = false;
    }

    fn field_valid(&mut self, field: Field) {
        let ui = self.fields.entry(field).or_default();
        ui.error = None;
        ui.indicator = true;
    }

    fn password_strength(&mut self, strength: Strength) {
        self.strength = Some(strength);
    }

    fn shake(&mut self, target: ShakeTarget) {
        let seq = self.next_seq();
        self.shaking.insert(target, seq);
        self.expiries.push(Expiry::Shake { target, seq });
    }

    fn submission_changed(&mut self, state: SubmissionState) {
        self.submission = state;
    }

    fn notify_failure(&mut self, message: &str) {
        let seq = self.next_seq();
        self.notice = Some((seq, message.to_owned()));
        self.expiries.push(Expiry::Notice { seq });
    }
}
