//! Onboarding configuration handlers

use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};

use crate::prelude::*;

use super::types::ConfigurationView;

/// GET /api/onboarding-config - The full configuration view
pub async fn get_configuration(
	State(app): State<App>,
) -> ObResult<(StatusCode, Json<ConfigurationView>)> {
	let view = app.config.get_configuration().await?;
	Ok((StatusCode::OK, Json(view)))
}

/// PUT /api/onboarding-config - Replace the configuration wholesale
pub async fn put_configuration(
	State(app): State<App>,
	Json(view): Json<ConfigurationView>,
) -> ObResult<StatusCode> {
	app.config.update_configuration(&view).await?;
	Ok(StatusCode::OK)
}

/// GET /api/onboarding-config/page/{pageNumber} - Components for one page
pub async fn get_page_components(
	State(app): State<App>,
	Path(page_number): Path<u32>,
) -> ObResult<(StatusCode, Json<Vec<Box<str>>>)> {
	let components = app.config.components_for_page(page_number).await?;
	Ok((StatusCode::OK, Json(components)))
}

// vim: ts=4
