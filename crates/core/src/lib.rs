//! Lilies Core - Shared types library.
//!
//! Common domain types for the Lilies food-ordering storefront: validated
//! email addresses, type-safe entity IDs, decimal money, and order
//! statuses.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
