//! Field identities and per-field state.

use serde::{Deserialize, Serialize};

/// One of the four registration inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Validation order used on submit.
    pub const ALL: [Self; 4] = [Self::Username, Self::Email, Self::Password, Self::ConfirmPassword];

    /// Element id of the input.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    /// Element id of the inline error message.
    #[must_use]
    pub fn error_id(self) -> &'static str {
        match self {
            Self::Username => "username-error",
            Self::Email => "email-error",
            Self::Password => "password-error",
            Self::ConfirmPassword => "confirm-password-error",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Username => 0,
            Self::Email => 1,
            Self::Password => 2,
            Self::ConfirmPassword => 3,
        }
    }
}

/// Current value and verdict of one input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub raw_value: String,
    pub is_valid: bool,
    pub error_message: Option<String>,
}

/// The four field states, addressed by [`Field`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Fields([FieldState; 4]);

impl Fields {
    pub(crate) fn get(&self, field: Field) -> &FieldState {
        &self.0[field.index()]
    }

    pub(crate) fn get_mut(&mut self, field: Field) -> &mut FieldState {
        &mut self.0[field.index()]
    }

    pub(crate) fn all_valid(&self) -> bool {
        self.0.iter().all(|state| state.is_valid)
    }
}
