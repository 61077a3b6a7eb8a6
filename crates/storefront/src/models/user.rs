//! User domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lilies_core::Email;

/// A registered account, as stored in the durable `users` list.
///
/// Records are append-only: registration creates them and nothing ever
/// mutates or deletes them (there is no account-deletion feature). The email
/// is the unique key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Full name entered at registration.
    pub name: String,
    /// Email address; unique across the list.
    pub email: Email,
    /// Argon2 hash of the password.
    pub password_hash: String,
    /// Phone number; optional at registration, may be empty.
    pub phone: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// The profile slice of this record, as stored alongside the session.
    #[must_use]
    pub fn profile(&self) -> Profile {
        Profile {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// The logged-in user's profile.
///
/// Minimal data kept with the session to identify the user on the dashboard.
/// Deliberately excludes the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// User's full name.
    pub name: String,
    /// User's email address.
    pub email: Email,
    /// User's phone number (may be empty).
    pub phone: String,
}
