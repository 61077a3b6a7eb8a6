//! Authentication error types.

use thiserror::Error;

use lilies_core::EmailError;

use crate::storage::StorageError;

/// Broad classification of an [`AuthError`].
///
/// Every error is recoverable: validation and conflict errors are corrected
/// by the user and resubmitted, and even the unexpected bucket failures
/// never terminate a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    /// Malformed or missing input.
    Validation,
    /// Duplicate registration email.
    Conflict,
    /// Login email unknown.
    NotFound,
    /// Password mismatch.
    InvalidCredentials,
    /// Catch-all around the storage layer.
    Unexpected,
}

/// Errors that can occur during authentication operations.
///
/// The display strings double as the user-facing notification text.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Name field left blank at registration.
    #[error("please enter your name")]
    MissingName,

    /// Email field left blank.
    #[error("please enter your email")]
    MissingEmail,

    /// Email fails the structural check.
    #[error("please enter a valid email address: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Password field left blank.
    #[error("please enter your password")]
    MissingPassword,

    /// Password shorter than the minimum length.
    #[error("password must be at least {min} characters long")]
    WeakPassword {
        /// Minimum allowed length.
        min: usize,
    },

    /// Confirm-password field left blank at registration.
    #[error("please confirm your password")]
    MissingConfirmPassword,

    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// An account with this email already exists.
    #[error("an account with this email already exists")]
    EmailTaken,

    /// No account matches the login email.
    #[error("no account found with this email, please sign up first")]
    UserNotFound,

    /// Password does not match the stored hash.
    #[error("incorrect password, please try again")]
    InvalidCredentials,

    /// Password hashing failed.
    #[error("password hashing error")]
    PasswordHash,

    /// Storage bucket failure.
    #[error("something went wrong, please try again")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> AuthErrorKind {
        match self {
            Self::MissingName
            | Self::MissingEmail
            | Self::InvalidEmail(_)
            | Self::MissingPassword
            | Self::WeakPassword { .. }
            | Self::MissingConfirmPassword
            | Self::PasswordMismatch => AuthErrorKind::Validation,
            Self::EmailTaken => AuthErrorKind::Conflict,
            Self::UserNotFound => AuthErrorKind::NotFound,
            Self::InvalidCredentials => AuthErrorKind::InvalidCredentials,
            Self::PasswordHash | Self::Storage(_) => AuthErrorKind::Unexpected,
        }
    }
}
