//! User registration, lookup, and partial update

use crate::prelude::*;
use crate::store_adapter::{CreateUser, StoreAdapter, UpdateUserData, User};
use crate::validation;

use super::types::{RegisterUserData, UserPatch};

/// Registers a new user with `current_step` unset. Fails with `Duplicate`
/// if the email is already registered.
pub async fn register_user(store: &dyn StoreAdapter, data: &RegisterUserData) -> ObResult<User> {
	if !validation::is_valid_email(&data.email) {
		return Err(Error::ValidationError(format!("Invalid email address: {}", data.email)));
	}
	if !validation::is_valid_password(&data.password) {
		return Err(Error::ValidationError(
			"Password must be between 8 and 128 characters".into(),
		));
	}

	match store.read_user(&data.email).await {
		Ok(_) => {
			return Err(Error::Duplicate(format!(
				"User with email {} already exists",
				data.email
			)));
		}
		Err(Error::NotFound) => {}
		Err(err) => return Err(err),
	}

	// TODO: hash passwords instead of storing them as-is
	let user = store
		.create_user(&CreateUser {
			email: data.email.as_str().into(),
			password: data.password.as_str().into(),
		})
		.await?;

	info!("Registered user {}", user.email);
	Ok(user)
}

/// Looks up a user by email. Absence is not an error at this layer.
pub async fn get_user_by_email(store: &dyn StoreAdapter, email: &str) -> ObResult<Option<User>> {
	match store.read_user(email).await {
		Ok(user) => Ok(Some(user)),
		Err(Error::NotFound) => Ok(None),
		Err(err) => Err(err),
	}
}

/// Applies a partial update. Explicit null behaves like an absent field:
/// the stored value is kept.
pub async fn update_user(
	store: &dyn StoreAdapter,
	email: &str,
	patch: &UserPatch,
) -> ObResult<User> {
	// TODO: validate zip code format before applying
	let data = UpdateUserData {
		about_me: patch.about_me.value().map(|v| v.as_str().into()),
		street_address: patch.street_address.value().map(|v| v.as_str().into()),
		city: patch.city.value().map(|v| v.as_str().into()),
		state: patch.state.value().map(|v| v.as_str().into()),
		zip: patch.zip.value().map(|v| v.as_str().into()),
		birthdate: patch.birthdate.value().map(|v| v.as_str().into()),
		current_step: patch.current_step.value().copied(),
	};

	let user = store.update_user(email, &data).await?;
	info!("Updated user {}", user.email);
	Ok(user)
}

/// Every user, in the store's natural order.
pub async fn get_all_users(store: &dyn StoreAdapter) -> ObResult<Vec<User>> {
	store.list_users().await
}

// vim: ts=4
