//! Pure field rules for the registration form.
//!
//! Each `validate_*` function classifies one raw input value. They never touch
//! form state; [`crate::form::RegistrationForm`] applies the results.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 8;

static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("invalid username regex"));

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));

/// Bucketed password quality shown by the strength meter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Map a [`strength_score`] onto a bucket.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Self::Weak,
            3 => Self::Medium,
            _ => Self::Strong,
        }
    }

    /// CSS modifier class for the strength meter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

/// Length in UTF-16 code units, the unit browsers report for input values.
///
/// A character outside the Basic Multilingual Plane counts twice.
#[must_use]
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Count the satisfied complexity criteria: length, lowercase, uppercase,
/// digit, and symbol. Returns a value in `0..=5`.
#[must_use]
pub fn strength_score(password: &str) -> u8 {
    let criteria = [
        utf16_len(password) >= MIN_PASSWORD_LEN,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    criteria.into_iter().map(u8::from).sum()
}

/// Username: trimmed, at least three characters, word characters only.
///
/// # Errors
///
/// Returns the first rule the value breaks.
pub fn validate_username(raw: &str) -> Result<(), ValidationError> {
    let username = raw.trim();
    if utf16_len(username) < MIN_USERNAME_LEN {
        return Err(ValidationError::UsernameTooShort);
    }
    if !USERNAME_REGEX.is_match(username) {
        return Err(ValidationError::UsernameCharacters);
    }
    Ok(())
}

/// Email: trimmed value shaped like `local@domain.tld`.
///
/// # Errors
///
/// Returns [`ValidationError::EmailFormat`] when the pattern does not match.
pub fn validate_email(raw: &str) -> Result<(), ValidationError> {
    if EMAIL_REGEX.is_match(raw.trim()) {
        Ok(())
    } else {
        Err(ValidationError::EmailFormat)
    }
}

/// Password: untrimmed, at least eight UTF-16 units and a score of three.
///
/// The strength is reported on both paths because the meter is updated
/// whether or not the password is acceptable.
///
/// # Errors
///
/// Returns the failing rule together with the strength to display.
pub fn validate_password(raw: &str) -> Result<Strength, (ValidationError, Strength)> {
    if utf16_len(raw) < MIN_PASSWORD_LEN {
        return Err((ValidationError::PasswordTooShort, Strength::Weak));
    }
    match Strength::from_score(strength_score(raw)) {
        Strength::Weak => Err((ValidationError::PasswordTooWeak, Strength::Weak)),
        strength => Ok(strength),
    }
}

/// Confirmation: non-empty and byte-for-byte equal to `password`.
///
/// # Errors
///
/// Mismatch is reported before emptiness, so an empty confirmation against a
/// non-empty password reads "Passwords do not match".
pub fn validate_confirm_password(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if confirm != password {
        return Err(ValidationError::PasswordMismatch);
    }
    if confirm.is_empty() {
        return Err(ValidationError::ConfirmationEmpty);
    }
    Ok(())
}
