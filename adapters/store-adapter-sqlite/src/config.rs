//! Configuration entry storage
//!
//! Rows are only ever inserted in bulk and deleted in bulk; `config_id`
//! (autoincrement) preserves insertion order within a page.

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use onboard::prelude::*;
use onboard::store_adapter::{ConfigEntry, NewConfigEntry};

use crate::utils::{collect_res, inspect};

fn map_row(row: &SqliteRow) -> Result<ConfigEntry, sqlx::Error> {
	Ok(ConfigEntry {
		config_id: row.try_get("config_id")?,
		page_number: row.try_get("page_number")?,
		component_type: row.try_get("component_type")?,
		created_at: Timestamp(row.try_get("created_at")?),
		updated_at: Timestamp(row.try_get("updated_at")?),
	})
}

pub(crate) async fn count(db: &SqlitePool) -> ObResult<u32> {
	let row = sqlx::query("SELECT count(*) AS cnt FROM config_entries")
		.fetch_one(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	row.try_get("cnt").inspect_err(inspect).map_err(|_| Error::DbError)
}

/// Insert entries in slice order, in one transaction.
pub(crate) async fn create(db: &SqlitePool, entries: &[NewConfigEntry]) -> ObResult<()> {
	let mut tx = db.begin().await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	for entry in entries {
		sqlx::query("INSERT INTO config_entries (page_number, component_type) VALUES (?, ?)")
			.bind(entry.page_number)
			.bind(entry.component_type.as_ref())
			.execute(&mut *tx)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;
	}

	tx.commit().await.inspect_err(inspect).map_err(|_| Error::DbError)?;
	Ok(())
}

/// All entries, page ascending, insertion order within a page.
pub(crate) async fn list(db: &SqlitePool) -> ObResult<Vec<ConfigEntry>> {
	let rows = sqlx::query(
		"SELECT config_id, page_number, component_type, created_at, updated_at
		FROM config_entries ORDER BY page_number ASC, config_id ASC",
	)
	.fetch_all(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	collect_res(rows.iter().map(map_row))
}

/// Entries for one page, insertion order.
pub(crate) async fn list_for_page(db: &SqlitePool, page_number: u32) -> ObResult<Vec<ConfigEntry>> {
	let rows = sqlx::query(
		"SELECT config_id, page_number, component_type, created_at, updated_at
		FROM config_entries WHERE page_number = ? ORDER BY config_id ASC",
	)
	.bind(page_number)
	.fetch_all(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	collect_res(rows.iter().map(map_row))
}

pub(crate) async fn delete_all(db: &SqlitePool) -> ObResult<()> {
	sqlx::query("DELETE FROM config_entries")
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;
	Ok(())
}

// vim: ts=4
