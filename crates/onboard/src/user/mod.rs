//! User subsystem. Registration, lookup, and partial profile updates.

pub mod handler;
pub mod service;
pub mod types;

pub use types::{RegisterUserData, UserInfo, UserPatch};

// vim: ts=4
