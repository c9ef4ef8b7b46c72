//! Error types for field validation and registration submission.

/// Why a single field failed its rule.
///
/// The `Display` text is the exact message rendered next to the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Trimmed username is shorter than the minimum.
    #[error("Username must be at least 3 characters long")]
    UsernameTooShort,

    /// Username contains something other than ASCII letters, digits, or `_`.
    #[error("Username can only contain letters, numbers, and underscores")]
    UsernameCharacters,

    /// Email does not look like `local@domain.tld`.
    #[error("Please enter a valid email address")]
    EmailFormat,

    /// Password is shorter than the minimum length.
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,

    /// Password meets fewer than three strength criteria.
    #[error("Password is too weak. Add uppercase, lowercase, numbers, and symbols")]
    PasswordTooWeak,

    /// Confirmation differs from the password.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Confirmation (and therefore the password) is empty.
    #[error("Please confirm your password")]
    ConfirmationEmpty,
}

/// Failure reported by the registration collaborator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// The collaborator refused the registration (e.g. a taken username).
    ///
    /// Reserved for a real registration backend; the simulated registrar
    /// never refuses.
    #[error("registration rejected: {0}")]
    Rejected(String),

    /// The request never produced a usable answer.
    #[error("registration request failed: {0}")]
    Transport(String),

    /// No collaborator is reachable in this build (e.g. server-side render).
    #[error("registration not available")]
    Unavailable,
}
