//! Registration form core shared by the browser client and its tests.
//!
//! This crate owns the rules of the SafeText sign-up form: per-field
//! validation, password strength scoring, and the submission state machine
//! that drives the registration collaborator. It has no browser or runtime
//! dependency; rendering goes through [`form::FormView`] and the network goes
//! through [`registrar::Registrar`].

pub mod error;
pub mod events;
pub mod field;
pub mod form;
pub mod registrar;
pub mod timing;
pub mod validate;

pub use error::{SubmissionError, ValidationError};
pub use events::{FormEmitter, FormEvent, FormEvents};
pub use field::{Field, FieldState};
pub use form::{FormView, RegistrationForm, ShakeTarget, SubmissionState, SubmitStep};
pub use registrar::{Registrar, Registration, SimulatedRegistrar};
pub use validate::Strength;
