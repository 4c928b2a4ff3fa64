//! Onboarding configuration subsystem.
//!
//! - **Types** (`types.rs`): the derived configuration view
//! - **Service** (`service.rs`): read/write path with a single-entry
//!   read-through cache and startup seeding
//! - **Handler** (`handler.rs`): HTTP API endpoints

pub mod handler;
pub mod service;
pub mod types;

pub use service::{ConfigCache, ConfigService};
pub use types::ConfigurationView;

// vim: ts=4
