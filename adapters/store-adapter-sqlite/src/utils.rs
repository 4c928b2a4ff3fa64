//! Shared helpers for the SQLite adapter

use onboard::prelude::*;
use sqlx::sqlite::SqliteRow;

/// Append one `field=value` pair to an UPDATE statement if the field is
/// set. Evaluates to the new has_updates flag.
macro_rules! push_field {
	($query:expr, $has_updates:expr, $field:literal, $value:expr) => {{
		if let Some(v) = $value {
			if $has_updates {
				$query.push(", ");
			}
			$query.push(concat!($field, "=")).push_bind(v);
			true
		} else {
			$has_updates
		}
	}};
}

pub(crate) use push_field;

/// Log database error for debugging
pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Map a single-row query result, translating SQL errors to ObResult
pub(crate) fn map_res<T, F>(row: Result<SqliteRow, sqlx::Error>, f: F) -> ObResult<T>
where
	F: FnOnce(SqliteRow) -> Result<T, sqlx::Error>,
{
	match row {
		Ok(row) => f(row).inspect_err(inspect).map_err(|_| Error::DbError),
		Err(sqlx::Error::RowNotFound) => Err(Error::NotFound),
		Err(err) => {
			inspect(&err);
			Err(Error::DbError)
		}
	}
}

/// Collect an iterator of query results, translating errors
pub(crate) fn collect_res<T>(
	iter: impl Iterator<Item = Result<T, sqlx::Error>>,
) -> ObResult<Vec<T>> {
	let mut items = Vec::new();
	for item in iter {
		items.push(item.inspect_err(inspect).map_err(|_| Error::DbError)?);
	}
	Ok(items)
}

// vim: ts=4
