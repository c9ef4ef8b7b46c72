//! The registration collaborator.
//!
//! The form only knows the [`Registrar`] trait. The deployed page uses
//! [`SimulatedRegistrar`], which waits a fixed delay and always succeeds; a
//! real backend would implement the trait and report its refusals as
//! [`SubmissionError::Rejected`].

#[cfg(test)]
#[path = "registrar_test.rs"]
mod registrar_test;

use std::fmt;
use std::future::Future;
use std::time::Duration;

use serde::Serialize;

use crate::error::SubmissionError;

/// Payload handed to the collaborator once every field is valid.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Creates an account for a validated registration.
///
/// Futures are not required to be `Send`: the form runs on the browser's
/// single UI thread.
#[async_trait::async_trait(?Send)]
pub trait Registrar {
    /// Register the account.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmissionError`] when the collaborator refuses the
    /// registration or cannot be reached.
    async fn register(&self, registration: &Registration) -> Result<(), SubmissionError>;
}

/// Stand-in collaborator: sleeps for `delay` and then succeeds.
///
/// The sleep function is injected so the browser can use its timer and tests
/// can complete immediately.
pub struct SimulatedRegistrar<S> {
    delay: Duration,
    sleep: S,
}

impl<S> SimulatedRegistrar<S> {
    pub fn new(delay: Duration, sleep: S) -> Self {
        Self { delay, sleep }
    }
}

#[async_trait::async_trait(?Send)]
impl<S, F> Registrar for SimulatedRegistrar<S>
where
    S: Fn(Duration) -> F + 'static,
    F: Future<Output = ()> + 'static,
{
    async fn register(&self, registration: &Registration) -> Result<(), SubmissionError> {
        tracing::debug!(username = %registration.username, delay_ms = self.delay.as_millis(), "simulating registration");
        (self.sleep)(self.delay).await;
        Ok(())
    }
}
