//! SQLite implementation of the Onboard store adapter.
//!
//! One database file holds both tables; the schema is created on open.
//! Domain modules (`config`, `user`) hold the actual queries, the trait
//! impl here just delegates.

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;

use onboard::prelude::*;
use onboard::store_adapter::{
	ConfigEntry, CreateUser, NewConfigEntry, StoreAdapter, UpdateUserData, User,
};

mod config;
mod user;
mod utils;

#[derive(Debug)]
pub struct StoreAdapterSqlite {
	db: SqlitePool,
}

impl StoreAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> ObResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;

		init_db(&db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;

		Ok(Self { db })
	}
}

#[async_trait]
impl StoreAdapter for StoreAdapterSqlite {
	// Onboarding configuration
	//**************************
	async fn count_config_entries(&self) -> ObResult<u32> {
		config::count(&self.db).await
	}

	async fn create_config_entries(&self, entries: &[NewConfigEntry]) -> ObResult<()> {
		config::create(&self.db, entries).await
	}

	async fn list_config_entries(&self) -> ObResult<Vec<ConfigEntry>> {
		config::list(&self.db).await
	}

	async fn list_config_entries_for_page(&self, page_number: u32) -> ObResult<Vec<ConfigEntry>> {
		config::list_for_page(&self.db, page_number).await
	}

	async fn delete_config_entries(&self) -> ObResult<()> {
		config::delete_all(&self.db).await
	}

	// Users
	//*******
	async fn create_user(&self, user: &CreateUser) -> ObResult<User> {
		user::create(&self.db, user).await
	}

	async fn read_user(&self, email: &str) -> ObResult<User> {
		user::read(&self.db, email).await
	}

	async fn update_user(&self, email: &str, data: &UpdateUserData) -> ObResult<User> {
		user::update(&self.db, email, data).await
	}

	async fn list_users(&self) -> ObResult<Vec<User>> {
		user::list(&self.db).await
	}
}

async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Configuration //
	///////////////////
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS config_entries (
		config_id integer PRIMARY KEY AUTOINCREMENT,
		page_number integer NOT NULL,
		component_type text NOT NULL,
		created_at datetime DEFAULT (unixepoch()),
		updated_at datetime DEFAULT (unixepoch())
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_config_entries_page ON config_entries(page_number)")
		.execute(&mut *tx)
		.await?;

	// Users //
	///////////
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS users (
		email text NOT NULL,
		password text NOT NULL,
		about_me text,
		street_address text,
		city text,
		state text,
		zip text,
		birthdate text,
		current_step integer,
		PRIMARY KEY(email)
	)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
