//! Session store over the two storage buckets.
//!
//! The "remember me" choice is a policy parameter of a single
//! [`SessionStore`] rather than a branch between two ad hoc stores: the
//! session is written to exactly one bucket, and authentication checks look
//! in both.

use std::sync::Arc;

use crate::models::session_keys;
use crate::models::{Profile, Session};
use crate::storage::{StorageBucket, StorageError};

/// Where a session should live.
///
/// Maps the "remember me" checkbox onto a bucket choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// Durable storage - the session survives a restart.
    Durable,
    /// Tab-scoped storage - the session is gone when the process ends.
    TabScoped,
}

impl Persistence {
    /// Policy for a "remember me" choice.
    #[must_use]
    pub const fn remember(remember_me: bool) -> Self {
        if remember_me {
            Self::Durable
        } else {
            Self::TabScoped
        }
    }
}

/// The session store.
///
/// Wraps the durable and tab-scoped buckets and owns every read or write of
/// the `userToken` and `userData` keys. Presence of a token in *either*
/// bucket is the sole authorization signal.
#[derive(Clone)]
pub struct SessionStore {
    durable: Arc<dyn StorageBucket>,
    tab: Arc<dyn StorageBucket>,
}

impl SessionStore {
    /// Create a store over the two buckets.
    #[must_use]
    pub fn new(durable: Arc<dyn StorageBucket>, tab: Arc<dyn StorageBucket>) -> Self {
        Self { durable, tab }
    }

    /// Write a session to the bucket selected by `persistence`.
    ///
    /// The other bucket's session keys are cleared so the session never
    /// exists in both places at once.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if either bucket cannot be written.
    pub fn store(&self, session: &Session, persistence: Persistence) -> Result<(), StorageError> {
        let (target, other) = match persistence {
            Persistence::Durable => (&self.durable, &self.tab),
            Persistence::TabScoped => (&self.tab, &self.durable),
        };

        let profile = serde_json::to_string(&session.profile)?;
        target.set(session_keys::USER_TOKEN, &session.token)?;
        target.set(session_keys::USER_DATA, &profile)?;

        other.remove(session_keys::USER_TOKEN)?;
        other.remove(session_keys::USER_DATA)?;

        Ok(())
    }

    /// Read the current session, checking the tab-scoped bucket first and
    /// then the durable one.
    ///
    /// Returns `None` if no token is stored anywhere.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::DataCorruption` if a token exists but its
    /// profile is missing or unreadable.
    pub fn session(&self) -> Result<Option<Session>, StorageError> {
        for bucket in [&self.tab, &self.durable] {
            if let Some(token) = bucket.get(session_keys::USER_TOKEN)? {
                let raw = bucket.get(session_keys::USER_DATA)?.ok_or_else(|| {
                    StorageError::DataCorruption("session token without profile".to_owned())
                })?;
                let profile: Profile = serde_json::from_str(&raw).map_err(|e| {
                    StorageError::DataCorruption(format!("invalid session profile: {e}"))
                })?;
                return Ok(Some(Session { token, profile }));
            }
        }
        Ok(None)
    }

    /// Whether a session token exists in either bucket.
    ///
    /// This is the route guard's predicate. It re-reads storage on every
    /// call - nothing is cached across navigations. A bucket that fails to
    /// read counts as unauthenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        for bucket in [&self.tab, &self.durable] {
            match bucket.get(session_keys::USER_TOKEN) {
                Ok(Some(_)) => return true,
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "session token read failed");
                }
            }
        }
        false
    }

    /// Clear the session from both buckets unconditionally.
    ///
    /// Idempotent: succeeds even when no session exists.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if either bucket cannot be written.
    pub fn clear(&self) -> Result<(), StorageError> {
        for bucket in [&self.tab, &self.durable] {
            bucket.remove(session_keys::USER_TOKEN)?;
            bucket.remove(session_keys::USER_DATA)?;
        }
        Ok(())
    }

    /// The durable bucket, shared with the user repository.
    #[must_use]
    pub fn durable(&self) -> &dyn StorageBucket {
        self.durable.as_ref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lilies_core::Email;

    use super::*;
    use crate::storage::MemoryBucket;

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(MemoryBucket::new()), Arc::new(MemoryBucket::new()))
    }

    fn session(token: &str) -> Session {
        Session {
            token: token.to_owned(),
            profile: Profile {
                name: "Ada Obi".to_owned(),
                email: Email::parse("ada@example.com").unwrap(),
                phone: String::new(),
            },
        }
    }

    #[test]
    fn test_store_and_read_back() {
        let sessions = store();
        sessions
            .store(&session("token-1"), Persistence::TabScoped)
            .unwrap();

        let current = sessions.session().unwrap().unwrap();
        assert_eq!(current.token, "token-1");
        assert_eq!(current.profile.name, "Ada Obi");
        assert!(sessions.is_authenticated());
    }

    #[test]
    fn test_session_lives_in_exactly_one_bucket() {
        let durable = Arc::new(MemoryBucket::new());
        let tab = Arc::new(MemoryBucket::new());
        let sessions = SessionStore::new(durable.clone(), tab.clone());

        sessions
            .store(&session("token-tab"), Persistence::TabScoped)
            .unwrap();
        assert!(durable.get(session_keys::USER_TOKEN).unwrap().is_none());
        assert!(tab.get(session_keys::USER_TOKEN).unwrap().is_some());

        // Logging in again with "remember me" moves the session over.
        sessions
            .store(&session("token-durable"), Persistence::Durable)
            .unwrap();
        assert!(durable.get(session_keys::USER_TOKEN).unwrap().is_some());
        assert!(tab.get(session_keys::USER_TOKEN).unwrap().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let sessions = store();
        sessions.clear().unwrap();
        assert!(!sessions.is_authenticated());

        sessions
            .store(&session("token-1"), Persistence::Durable)
            .unwrap();
        sessions.clear().unwrap();
        sessions.clear().unwrap();
        assert!(!sessions.is_authenticated());
        assert!(sessions.session().unwrap().is_none());
    }

    #[test]
    fn test_token_without_profile_is_corruption() {
        let durable = Arc::new(MemoryBucket::new());
        let tab = Arc::new(MemoryBucket::new());
        durable.set(session_keys::USER_TOKEN, "token-orphan").unwrap();

        let sessions = SessionStore::new(durable, tab);
        assert!(sessions.is_authenticated());
        assert!(matches!(
            sessions.session().unwrap_err(),
            StorageError::DataCorruption(_)
        ));
    }
}
