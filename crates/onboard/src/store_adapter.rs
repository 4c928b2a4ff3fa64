//! Storage contract for onboarding data.
//!
//! The server talks to persistence only through [`StoreAdapter`], so the
//! backing store can be swapped without touching service code.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

/// A (page, component) assignment to be inserted.
#[derive(Clone, Debug)]
pub struct NewConfigEntry {
	pub page_number: u32,
	pub component_type: Box<str>,
}

/// A persisted (page, component) assignment. Within a page, `config_id`
/// order is insertion order and governs display order.
#[derive(Clone, Debug)]
pub struct ConfigEntry {
	pub config_id: i64,
	pub page_number: u32,
	pub component_type: Box<str>,
	pub created_at: Timestamp,
	pub updated_at: Timestamp,
}

/// A user record. The email is the identity; there is no separate id.
/// Passwords are stored as given, in plaintext.
#[derive(Clone, Debug)]
pub struct User {
	pub email: Box<str>,
	pub password: Box<str>,
	pub about_me: Option<Box<str>>,
	pub street_address: Option<Box<str>>,
	pub city: Option<Box<str>>,
	pub state: Option<Box<str>>,
	pub zip: Option<Box<str>>,
	pub birthdate: Option<Box<str>>,
	pub current_step: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct CreateUser {
	pub email: Box<str>,
	pub password: Box<str>,
}

/// Field-by-field user update. Only `Some` fields are applied.
#[derive(Clone, Debug, Default)]
pub struct UpdateUserData {
	pub about_me: Option<Box<str>>,
	pub street_address: Option<Box<str>>,
	pub city: Option<Box<str>>,
	pub state: Option<Box<str>>,
	pub zip: Option<Box<str>>,
	pub birthdate: Option<Box<str>>,
	pub current_step: Option<u32>,
}

#[async_trait]
pub trait StoreAdapter: Debug + Send + Sync {
	// Onboarding configuration
	//**************************
	async fn count_config_entries(&self) -> ObResult<u32>;
	/// Inserts entries in slice order; ids are assigned in that order.
	async fn create_config_entries(&self, entries: &[NewConfigEntry]) -> ObResult<()>;
	/// All entries, page ascending, ties broken by insertion order.
	async fn list_config_entries(&self) -> ObResult<Vec<ConfigEntry>>;
	/// Entries for one page, insertion order. Empty for unknown pages.
	async fn list_config_entries_for_page(&self, page_number: u32) -> ObResult<Vec<ConfigEntry>>;
	async fn delete_config_entries(&self) -> ObResult<()>;

	// Users
	//*******
	async fn create_user(&self, user: &CreateUser) -> ObResult<User>;
	/// Reads a user by email. `Err(NotFound)` if absent.
	async fn read_user(&self, email: &str) -> ObResult<User>;
	/// Applies the set fields of `data`. `Err(NotFound)` (and no mutation)
	/// if the email is unknown.
	async fn update_user(&self, email: &str, data: &UpdateUserData) -> ObResult<User>;
	/// Every user, in the store's natural order.
	async fn list_users(&self) -> ObResult<Vec<User>>;
}

// vim: ts=4
