//! Errors surfaced by the credential form.

use thiserror::Error;

/// User-visible failure of a submit attempt. The display text is what the
/// form shows in its error box.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Something went wrong. Please try again.")]
    Unexpected,
}

/// Failure reported by an [`Authenticator`](crate::Authenticator).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The authenticator answered and refused the credentials.
    #[error("credentials rejected")]
    Rejected,
    /// The authenticator could not answer.
    #[error("authenticator unavailable: {0}")]
    Unavailable(String),
}

impl From<AuthError> for FormError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Rejected => FormError::InvalidCredentials,
            AuthError::Unavailable(_) => FormError::Unexpected,
        }
    }
}
