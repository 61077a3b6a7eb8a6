//! Services for the storefront.

pub mod auth;
