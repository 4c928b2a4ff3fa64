//! App state type

use std::sync::Arc;

use crate::config::service::ConfigService;
use crate::error::{Error, ObResult};
use crate::routes;
use crate::store_adapter::StoreAdapter;

use tracing::info;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,
	pub store: Arc<dyn StoreAdapter>,
	pub config: ConfigService,
}

pub type App = Arc<AppState>;

#[derive(Debug)]
pub struct AppBuilderOpts {
	listen: Box<str>,
}

pub struct AppBuilder {
	opts: AppBuilderOpts,
	store: Option<Arc<dyn StoreAdapter>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder {
			opts: AppBuilderOpts { listen: "127.0.0.1:8080".into() },
			store: None,
		}
	}

	// Opts
	pub fn listen(mut self, listen: impl Into<Box<str>>) -> Self {
		self.opts.listen = listen.into();
		self
	}

	// Adapters
	pub fn store_adapter(mut self, store: Arc<dyn StoreAdapter>) -> Self {
		self.store = Some(store);
		self
	}

	pub async fn run(self) -> ObResult<()> {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.init();
		info!("Onboard server v{}", VERSION);

		let store =
			self.store.ok_or_else(|| Error::Internal("no store adapter configured".into()))?;
		let app: App = Arc::new(AppState {
			config: ConfigService::new(store.clone()),
			store,
			opts: self.opts,
		});

		// Seed defaults before the listener starts accepting requests
		app.config.ensure_seeded().await?;

		let router = routes::init(app.clone());
		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
		info!("Listening on {}", app.opts.listen);
		axum::serve(listener, router).await?;

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
