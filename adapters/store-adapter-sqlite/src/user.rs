//! User record storage

use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool, sqlite::SqliteRow};

use onboard::prelude::*;
use onboard::store_adapter::{CreateUser, UpdateUserData, User};

use crate::utils::{collect_res, inspect, map_res, push_field};

fn map_row(row: &SqliteRow) -> Result<User, sqlx::Error> {
	Ok(User {
		email: row.try_get("email")?,
		password: row.try_get("password")?,
		about_me: row.try_get("about_me")?,
		street_address: row.try_get("street_address")?,
		city: row.try_get("city")?,
		state: row.try_get("state")?,
		zip: row.try_get("zip")?,
		birthdate: row.try_get("birthdate")?,
		current_step: row.try_get("current_step")?,
	})
}

pub(crate) async fn create(db: &SqlitePool, user: &CreateUser) -> ObResult<User> {
	let row = sqlx::query(
		"INSERT INTO users (email, password) VALUES (?, ?)
		RETURNING email, password, about_me, street_address, city, state, zip, birthdate, current_step",
	)
	.bind(user.email.as_ref())
	.bind(user.password.as_ref())
	.fetch_one(db)
	.await;

	map_res(row, |row| map_row(&row))
}

pub(crate) async fn read(db: &SqlitePool, email: &str) -> ObResult<User> {
	let row = sqlx::query(
		"SELECT email, password, about_me, street_address, city, state, zip, birthdate, current_step
		FROM users WHERE email = ?",
	)
	.bind(email)
	.fetch_one(db)
	.await;

	map_res(row, |row| map_row(&row))
}

/// Apply the set fields of `data`. An UPDATE with no matching row mutates
/// nothing, so an unknown email surfaces as NotFound without side effects.
pub(crate) async fn update(db: &SqlitePool, email: &str, data: &UpdateUserData) -> ObResult<User> {
	let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE users SET ");
	let mut has_updates = false;

	has_updates = push_field!(query, has_updates, "about_me", data.about_me.as_deref());
	has_updates = push_field!(query, has_updates, "street_address", data.street_address.as_deref());
	has_updates = push_field!(query, has_updates, "city", data.city.as_deref());
	has_updates = push_field!(query, has_updates, "state", data.state.as_deref());
	has_updates = push_field!(query, has_updates, "zip", data.zip.as_deref());
	has_updates = push_field!(query, has_updates, "birthdate", data.birthdate.as_deref());
	has_updates = push_field!(query, has_updates, "current_step", data.current_step);

	if has_updates {
		query.push(" WHERE email=").push_bind(email);
		let res = query
			.build()
			.execute(db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;
		if res.rows_affected() == 0 {
			return Err(Error::NotFound);
		}
	}

	read(db, email).await
}

pub(crate) async fn list(db: &SqlitePool) -> ObResult<Vec<User>> {
	let rows = sqlx::query(
		"SELECT email, password, about_me, street_address, city, state, zip, birthdate, current_step
		FROM users",
	)
	.fetch_all(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	collect_res(rows.iter().map(map_row))
}

// vim: ts=4
