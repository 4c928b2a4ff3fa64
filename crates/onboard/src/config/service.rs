//! Configuration service with a single-entry read-through cache

use std::sync::Arc;

use crate::prelude::*;
use crate::store_adapter::{NewConfigEntry, StoreAdapter};

use super::types::ConfigurationView;

/// Process-wide cache for the one computed configuration view.
///
/// `get` never touches the store; a miss is signalled by `None` and the
/// caller recomputes. Concurrent callers racing a recompute may both miss
/// and recompute redundantly; the recompute is idempotent so this is
/// harmless.
pub struct ConfigCache {
	cache: parking_lot::RwLock<Option<ConfigurationView>>,
}

impl ConfigCache {
	pub fn new() -> Self {
		Self { cache: parking_lot::RwLock::new(None) }
	}

	pub fn get(&self) -> Option<ConfigurationView> {
		self.cache.read().clone()
	}

	pub fn put(&self, view: ConfigurationView) {
		*self.cache.write() = Some(view);
	}

	/// Invalidate unconditionally; the next `get` misses.
	pub fn clear(&self) {
		*self.cache.write() = None;
	}
}

impl Default for ConfigCache {
	fn default() -> Self {
		Self::new()
	}
}

/// Read/write path for the onboarding configuration.
pub struct ConfigService {
	store: Arc<dyn StoreAdapter>,
	cache: ConfigCache,
}

impl ConfigService {
	pub fn new(store: Arc<dyn StoreAdapter>) -> Self {
		Self { store, cache: ConfigCache::new() }
	}

	/// Seeds the default configuration if the store is empty. Called once
	/// during startup, before any request is served; does nothing once rows
	/// exist, so it is idempotent across restarts.
	pub async fn ensure_seeded(&self) -> ObResult<()> {
		if self.store.count_config_entries().await? == 0 {
			info!("Seeding default onboarding configuration");
			let entries = [
				NewConfigEntry { page_number: 2, component_type: "about_me".into() },
				NewConfigEntry { page_number: 2, component_type: "birthdate".into() },
				NewConfigEntry { page_number: 3, component_type: "address".into() },
			];
			self.store.create_config_entries(&entries).await?;
		}
		Ok(())
	}

	/// The full configuration view, served through the cache.
	pub async fn get_configuration(&self) -> ObResult<ConfigurationView> {
		if let Some(view) = self.cache.get() {
			debug!("Configuration cache hit");
			return Ok(view);
		}

		let entries = self.store.list_config_entries().await?;
		let view = ConfigurationView {
			page2_components: entries
				.iter()
				.filter(|e| e.page_number == 2)
				.map(|e| e.component_type.clone())
				.collect(),
			page3_components: entries
				.iter()
				.filter(|e| e.page_number == 3)
				.map(|e| e.component_type.clone())
				.collect(),
		};
		self.cache.put(view.clone());
		Ok(view)
	}

	/// Replaces the whole configuration: delete everything, reinsert one
	/// entry per component in the given order, then invalidate the cache.
	/// Only pages 2 and 3 exist. Component type strings are stored as
	/// given; nothing checks them against a known set.
	pub async fn update_configuration(&self, view: &ConfigurationView) -> ObResult<()> {
		self.store.delete_config_entries().await?;

		let entries: Vec<NewConfigEntry> = view
			.page2_components
			.iter()
			.map(|c| NewConfigEntry { page_number: 2, component_type: c.clone() })
			.chain(
				view.page3_components
					.iter()
					.map(|c| NewConfigEntry { page_number: 3, component_type: c.clone() }),
			)
			.collect();
		self.store.create_config_entries(&entries).await?;

		self.cache.clear();
		info!("Onboarding configuration replaced: {} entries", entries.len());
		Ok(())
	}

	/// Component list for one page, insertion order. Bypasses the cache.
	/// Unknown pages yield an empty list, not an error.
	pub async fn components_for_page(&self, page_number: u32) -> ObResult<Vec<Box<str>>> {
		let entries = self.store.list_config_entries_for_page(page_number).await?;
		Ok(entries.into_iter().map(|e| e.component_type).collect())
	}
}

// vim: ts=4
