//! Onboard is a minimal onboarding-flow backend.
//!
//! It registers users, lets an admin configure which form components appear
//! on which onboarding page, and lets users update their profile fields as
//! they progress through the flow.
//!
//! # Architecture
//!
//! - `config` — onboarding page configuration: view types, a service with a
//!   single-entry read-through cache, HTTP handlers
//! - `user` — user registration, lookup, and partial updates
//! - `store_adapter` — the storage contract; a SQLite implementation lives
//!   in the `onboard-store-adapter-sqlite` crate
//! - `core::app` — application state and builder

#![forbid(unsafe_code)]

pub mod error;
pub mod core;
pub mod config;
pub mod prelude;
pub mod routes;
pub mod store_adapter;
pub mod types;
pub mod user;
pub mod validation;

pub use crate::core::app::{App, AppBuilder, AppState};

// vim: ts=4
