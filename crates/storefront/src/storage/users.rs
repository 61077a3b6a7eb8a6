//! User repository over the durable bucket.
//!
//! The registered-users list is a single JSON array stored under the
//! `users` key of the durable bucket. Each entity gets exactly one
//! persistence boundary: the user list is always durable, and only the
//! session moves between buckets.

use lilies_core::Email;

use super::{StorageBucket, StorageError};
use crate::models::session_keys;
use crate::models::user::UserRecord;

/// Repository for the registered-users list.
pub struct UserRepository<'a> {
    bucket: &'a dyn StorageBucket,
}

impl<'a> UserRepository<'a> {
    /// Create a repository over the durable bucket.
    #[must_use]
    pub const fn new(bucket: &'a dyn StorageBucket) -> Self {
        Self { bucket }
    }

    /// Load the full user list. A missing key reads as an empty list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::DataCorruption` if the stored list is not a
    /// valid JSON array of records.
    pub fn load(&self) -> Result<Vec<UserRecord>, StorageError> {
        match self.bucket.get(session_keys::USERS)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                StorageError::DataCorruption(format!("invalid users list in storage: {e}"))
            }),
            None => Ok(Vec::new()),
        }
    }

    /// Find a user by email.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the list cannot be read.
    pub fn find_by_email(&self, email: &Email) -> Result<Option<UserRecord>, StorageError> {
        let users = self.load()?;
        Ok(users.into_iter().find(|u| &u.email == email))
    }

    /// Number of registered users.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the list cannot be read.
    pub fn count(&self) -> Result<usize, StorageError> {
        Ok(self.load()?.len())
    }

    /// Append a new record to the list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if a record with the same email
    /// already exists - at most one record per email, always.
    pub fn append(&self, record: UserRecord) -> Result<(), StorageError> {
        let mut users = self.load()?;

        if users.iter().any(|u| u.email == record.email) {
            return Err(StorageError::Conflict(format!(
                "email already registered: {}",
                record.email
            )));
        }

        users.push(record);
        let raw = serde_json::to_string(&users)?;
        self.bucket.set(session_keys::USERS, &raw)
    }
}
