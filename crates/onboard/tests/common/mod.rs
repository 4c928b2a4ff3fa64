//! Shared test fixtures: an in-memory store adapter

use std::sync::atomic::{AtomicI64, AtomicU32, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use onboard::prelude::*;
use onboard::store_adapter::{
	ConfigEntry, CreateUser, NewConfigEntry, StoreAdapter, UpdateUserData, User,
};
use onboard::types;

/// In-memory store for service-level tests. Counts full configuration
/// listings so tests can assert on cache behavior.
#[derive(Debug, Default)]
pub struct MemStore {
	entries: Mutex<Vec<ConfigEntry>>,
	users: Mutex<Vec<User>>,
	next_id: AtomicI64,
	pub config_list_calls: AtomicU32,
}

impl MemStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn config_list_calls(&self) -> u32 {
		self.config_list_calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl StoreAdapter for MemStore {
	async fn count_config_entries(&self) -> ObResult<u32> {
		Ok(self.entries.lock().len() as u32)
	}

	async fn create_config_entries(&self, entries: &[NewConfigEntry]) -> ObResult<()> {
		let mut stored = self.entries.lock();
		for entry in entries {
			let config_id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
			stored.push(ConfigEntry {
				config_id,
				page_number: entry.page_number,
				component_type: entry.component_type.clone(),
				created_at: types::now(),
				updated_at: types::now(),
			});
		}
		Ok(())
	}

	async fn list_config_entries(&self) -> ObResult<Vec<ConfigEntry>> {
		self.config_list_calls.fetch_add(1, Ordering::SeqCst);
		let mut entries = self.entries.lock().clone();
		entries.sort_by_key(|e| (e.page_number, e.config_id));
		Ok(entries)
	}

	async fn list_config_entries_for_page(&self, page_number: u32) -> ObResult<Vec<ConfigEntry>> {
		let mut entries: Vec<ConfigEntry> = self
			.entries
			.lock()
			.iter()
			.filter(|e| e.page_number == page_number)
			.cloned()
			.collect();
		entries.sort_by_key(|e| e.config_id);
		Ok(entries)
	}

	async fn delete_config_entries(&self) -> ObResult<()> {
		self.entries.lock().clear();
		Ok(())
	}

	async fn create_user(&self, user: &CreateUser) -> ObResult<User> {
		let mut users = self.users.lock();
		if users.iter().any(|u| u.email == user.email) {
			return Err(Error::DbError);
		}
		let user = User {
			email: user.email.clone(),
			password: user.password.clone(),
			about_me: None,
			street_address: None,
			city: None,
			state: None,
			zip: None,
			birthdate: None,
			current_step: None,
		};
		users.push(user.clone());
		Ok(user)
	}

	async fn read_user(&self, email: &str) -> ObResult<User> {
		self.users
			.lock()
			.iter()
			.find(|u| u.email.as_ref() == email)
			.cloned()
			.ok_or(Error::NotFound)
	}

	async fn update_user(&self, email: &str, data: &UpdateUserData) -> ObResult<User> {
		let mut users = self.users.lock();
		let user = users.iter_mut().find(|u| u.email.as_ref() == email).ok_or(Error::NotFound)?;
		if let Some(v) = &data.about_me {
			user.about_me = Some(v.clone());
		}
		if let Some(v) = &data.street_address {
			user.street_address = Some(v.clone());
		}
		if let Some(v) = &data.city {
			user.city = Some(v.clone());
		}
		if let Some(v) = &data.state {
			user.state = Some(v.clone());
		}
		if let Some(v) = &data.zip {
			user.zip = Some(v.clone());
		}
		if let Some(v) = &data.birthdate {
			user.birthdate = Some(v.clone());
		}
		if let Some(v) = data.current_step {
			user.current_step = Some(v);
		}
		Ok(user.clone())
	}

	async fn list_users(&self) -> ObResult<Vec<User>> {
		Ok(self.users.lock().clone())
	}
}

// vim: ts=4
