//! Lilies Storefront library.
//!
//! The storefront engine behind the Lilies food-ordering app: mock
//! authentication backed by pluggable storage buckets, a session store with
//! a "remember me" persistence policy, a route guard, and the in-memory
//! dashboard state (menu catalog, cart, favorites, order history).
//!
//! There is no server here - the only external surface is the two storage
//! buckets and in-process navigation checks.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod models;
pub mod orders;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;
pub mod storage;
