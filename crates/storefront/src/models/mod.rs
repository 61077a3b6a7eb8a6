//! Domain models for the storefront.

pub mod session;
pub mod user;

pub use session::{Session, keys as session_keys};
pub use user::{Profile, UserRecord};
