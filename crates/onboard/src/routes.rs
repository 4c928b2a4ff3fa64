use axum::{
	Router,
	http::{HeaderValue, Method, header},
	routing::{get, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::prelude::*;
use crate::{config, user};

/// Cross-origin access for the onboarding frontend: the local dev server
/// plus Vercel preview/production deployments.
fn cors_layer() -> CorsLayer {
	CorsLayer::new()
		.allow_origin(AllowOrigin::predicate(|origin: &HeaderValue, _| {
			let Ok(origin) = origin.to_str() else { return false };
			origin == "http://localhost:3000"
				|| (origin.starts_with("https://") && origin.ends_with(".vercel.app"))
		}))
		.allow_methods([Method::GET, Method::POST, Method::PUT])
		.allow_headers([header::CONTENT_TYPE])
}

pub fn init(app: App) -> Router {
	Router::new()
		.route(
			"/api/onboarding-config",
			get(config::handler::get_configuration).put(config::handler::put_configuration),
		)
		.route("/api/onboarding-config/page/{page_number}", get(config::handler::get_page_components))
		.route("/api/users/register", post(user::handler::register_user))
		.route("/api/users", get(user::handler::list_users))
		.route("/api/users/{email}", get(user::handler::get_user).put(user::handler::put_user))
		.layer(cors_layer())
		.layer(TraceLayer::new_for_http())
		.with_state(app)
}

// vim: ts=4
