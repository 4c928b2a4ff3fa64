use std::{env, fs, path, sync::Arc};

use onboard::AppBuilder;
use onboard_store_adapter_sqlite::StoreAdapterSqlite;

pub struct Config {
	pub listen: String,
	pub db_dir: path::PathBuf,
}

#[tokio::main]
async fn main() {
	let config = Config {
		listen: env::var("LISTEN").unwrap_or("127.0.0.1:8080".to_string()),
		db_dir: path::PathBuf::from(env::var("DB_DIR").unwrap_or("./data".to_string())),
	};

	fs::create_dir_all(&config.db_dir).expect("cannot create database directory");
	let store = Arc::new(
		StoreAdapterSqlite::new(config.db_dir.join("onboard.db"))
			.await
			.expect("cannot open database"),
	);

	AppBuilder::new()
		.listen(config.listen)
		.store_adapter(store)
		.run()
		.await
		.expect("server error");
}

// vim: ts=4
