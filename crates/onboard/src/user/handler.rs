//! User handlers

use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};

use crate::prelude::*;

use super::service;
use super::types::{RegisterUserData, UserInfo, UserPatch};

/// POST /api/users/register - Register a new user
pub async fn register_user(
	State(app): State<App>,
	Json(data): Json<RegisterUserData>,
) -> ObResult<(StatusCode, Json<UserInfo>)> {
	let user = service::register_user(app.store.as_ref(), &data).await?;
	Ok((StatusCode::OK, Json(user.into())))
}

/// GET /api/users/{email} - Look up a user
pub async fn get_user(
	State(app): State<App>,
	Path(email): Path<String>,
) -> ObResult<(StatusCode, Json<UserInfo>)> {
	match service::get_user_by_email(app.store.as_ref(), &email).await? {
		Some(user) => Ok((StatusCode::OK, Json(user.into()))),
		None => Err(Error::NotFound),
	}
}

/// PUT /api/users/{email} - Partial profile update
pub async fn put_user(
	State(app): State<App>,
	Path(email): Path<String>,
	Json(patch): Json<UserPatch>,
) -> ObResult<(StatusCode, Json<UserInfo>)> {
	let user = service::update_user(app.store.as_ref(), &email, &patch).await?;
	Ok((StatusCode::OK, Json(user.into())))
}

/// GET /api/users - All users
pub async fn list_users(State(app): State<App>) -> ObResult<(StatusCode, Json<Vec<UserInfo>>)> {
	let users = service::get_all_users(app.store.as_ref()).await?;
	Ok((StatusCode::OK, Json(users.into_iter().map(UserInfo::from).collect())))
}

// vim: ts=4
