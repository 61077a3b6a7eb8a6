//! Authentication service.
//!
//! Registration, login, and logout over the storage buckets. There is no
//! real server behind this - the async points are artificial fixed-duration
//! delays that stand in for network latency, after which a single
//! continuation resumes. No retries, no cancellation: a caller that walks
//! away mid-delay simply abandons the pending future.

mod error;

pub use error::{AuthError, AuthErrorKind};

use std::time::Duration;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use rand::Rng;
use rand::distr::Alphanumeric;
use tracing::instrument;

use lilies_core::Email;

use crate::models::user::UserRecord;
use crate::models::{Profile, Session};
use crate::session::{Persistence, SessionStore};
use crate::storage::users::UserRepository;
use crate::storage::{StorageBucket, StorageError};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Length of the random suffix on session tokens.
const TOKEN_SUFFIX_LENGTH: usize = 9;

/// Registration form input, exactly as the user typed it.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Optional; stored as-is, possibly empty.
    pub phone: String,
}

/// Login form input.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// "Remember me" checkbox: picks the durable bucket for the session.
    pub remember_me: bool,
}

/// Authentication service.
///
/// Handles user registration, login, and logout.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    sessions: &'a SessionStore,
    network_delay: Duration,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    ///
    /// `durable` holds the registered-users list; `sessions` owns the
    /// session keys in both buckets; `network_delay` is the artificial
    /// latency applied to register and login.
    #[must_use]
    pub const fn new(
        durable: &'a dyn StorageBucket,
        sessions: &'a SessionStore,
        network_delay: Duration,
    ) -> Self {
        Self {
            users: UserRepository::new(durable),
            sessions,
            network_delay,
        }
    }

    /// Register a new account.
    ///
    /// Validates the form, rejects duplicate emails, then appends a record
    /// to the durable user list. Does *not* create a session - the caller
    /// must log in separately.
    ///
    /// # Errors
    ///
    /// Returns a validation variant of [`AuthError`] for blank or malformed
    /// input, `AuthError::EmailTaken` if the email is already registered,
    /// and `AuthError::Storage` if a bucket fails.
    #[instrument(skip_all, fields(email = %form.email))]
    pub async fn register(&self, form: &RegisterForm) -> Result<(), AuthError> {
        let email = validate_registration(form)?;

        if self.users.find_by_email(&email)?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        // Simulated network round-trip.
        tokio::time::sleep(self.network_delay).await;

        let record = UserRecord {
            name: form.name.trim().to_owned(),
            email,
            password_hash: hash_password(&form.password)?,
            phone: form.phone.trim().to_owned(),
            created_at: Utc::now(),
        };

        self.users.append(record).map_err(|e| match e {
            StorageError::Conflict(_) => AuthError::EmailTaken,
            other => AuthError::Storage(other),
        })?;

        tracing::info!("registered new account");
        Ok(())
    }

    /// Log in with email and password.
    ///
    /// On success a session is written to the bucket chosen by the
    /// "remember me" policy and the user's profile is returned.
    ///
    /// # Errors
    ///
    /// Returns a validation variant of [`AuthError`] for blank or malformed
    /// input, `AuthError::UserNotFound` for an unknown email,
    /// `AuthError::InvalidCredentials` for a wrong password, and
    /// `AuthError::Storage` if a bucket fails.
    #[instrument(skip_all, fields(email = %form.email, remember_me = form.remember_me))]
    pub async fn login(&self, form: &LoginForm) -> Result<Profile, AuthError> {
        let email = validate_login(form)?;

        // Simulated network round-trip.
        tokio::time::sleep(self.network_delay).await;

        let user = self
            .users
            .find_by_email(&email)?
            .ok_or(AuthError::UserNotFound)?;

        verify_password(&form.password, &user.password_hash)?;

        let session = Session {
            token: generate_token(),
            profile: user.profile(),
        };
        self.sessions
            .store(&session, Persistence::remember(form.remember_me))?;

        tracing::info!("logged in");
        Ok(session.profile)
    }

    /// Log out, clearing the session from both buckets unconditionally.
    ///
    /// Idempotent: succeeds even when no session exists.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if a bucket fails.
    #[instrument(skip_all)]
    pub fn logout(&self) -> Result<(), AuthError> {
        self.sessions.clear()?;
        tracing::info!("logged out");
        Ok(())
    }
}

/// Validate registration input in the order the form presents its fields.
fn validate_registration(form: &RegisterForm) -> Result<Email, AuthError> {
    if form.name.trim().is_empty() {
        return Err(AuthError::MissingName);
    }
    if form.email.trim().is_empty() {
        return Err(AuthError::MissingEmail);
    }
    let email = Email::parse(form.email.trim())?;
    if form.password.is_empty() {
        return Err(AuthError::MissingPassword);
    }
    if form.password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    if form.confirm_password.is_empty() {
        return Err(AuthError::MissingConfirmPassword);
    }
    if form.password != form.confirm_password {
        return Err(AuthError::PasswordMismatch);
    }
    Ok(email)
}

/// Validate login input.
fn validate_login(form: &LoginForm) -> Result<Email, AuthError> {
    if form.email.trim().is_empty() {
        return Err(AuthError::MissingEmail);
    }
    let email = Email::parse(form.email.trim())?;
    if form.password.is_empty() {
        return Err(AuthError::MissingPassword);
    }
    Ok(email)
}

/// Generate an opaque session token: `token-{unix_millis}-{random suffix}`.
///
/// Uniqueness is not cryptographically guaranteed and does not need to be -
/// the token is a presence flag, not a credential.
fn generate_token() -> String {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(TOKEN_SUFFIX_LENGTH)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();
    format!("token-{}-{suffix}", Utc::now().timestamp_millis())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
