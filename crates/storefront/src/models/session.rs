//! Session-related types.
//!
//! Types stored in the buckets for authentication state.

use serde::{Deserialize, Serialize};

use super::user::Profile;

/// The authenticated-state record.
///
/// Its mere presence in either storage bucket is what gates dashboard
/// access: there is no expiry, no signature, and no server-side check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque token. Uniqueness is not cryptographically guaranteed;
    /// a timestamp plus a random suffix is sufficient here.
    pub token: String,
    /// Profile of the logged-in user.
    pub profile: Profile,
}

/// Storage keys for authentication data.
pub mod keys {
    /// Key for the session token.
    pub const USER_TOKEN: &str = "userToken";

    /// Key for the logged-in user's profile (JSON).
    pub const USER_DATA: &str = "userData";

    /// Key for the registered-users list (JSON array).
    pub const USERS: &str = "users";
}
