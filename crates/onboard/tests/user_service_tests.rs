//! User service tests: registration, duplicates, partial updates

use onboard::error::Error;
use onboard::types::Patch;
use onboard::user::service;
use onboard::user::types::{RegisterUserData, UserPatch};

mod common;
use common::MemStore;

fn registration(email: &str, password: &str) -> RegisterUserData {
	RegisterUserData { email: email.to_string(), password: password.to_string() }
}

#[tokio::test]
async fn test_register_user() {
	let store = MemStore::new();

	let user = service::register_user(&store, &registration("alice@example.com", "password123"))
		.await
		.expect("registration should succeed");

	assert_eq!(user.email.as_ref(), "alice@example.com");
	assert_eq!(user.current_step, None);
	assert_eq!(user.about_me, None);
}

#[tokio::test]
async fn test_register_duplicate_email() {
	let store = MemStore::new();

	service::register_user(&store, &registration("alice@example.com", "password123"))
		.await
		.expect("first registration should succeed");

	let result =
		service::register_user(&store, &registration("alice@example.com", "different-pass"))
			.await;
	assert!(matches!(result, Err(Error::Duplicate(_))));

	// The original record is untouched
	let user = service::get_user_by_email(&store, "alice@example.com")
		.await
		.expect("lookup should succeed")
		.expect("user should exist");
	assert_eq!(user.password.as_ref(), "password123");
}

#[tokio::test]
async fn test_register_invalid_email() {
	let store = MemStore::new();

	let result = service::register_user(&store, &registration("not-an-email", "password123")).await;
	assert!(matches!(result, Err(Error::ValidationError(_))));
}

#[tokio::test]
async fn test_register_short_password() {
	let store = MemStore::new();

	let result = service::register_user(&store, &registration("bob@example.com", "short")).await;
	assert!(matches!(result, Err(Error::ValidationError(_))));
}

#[tokio::test]
async fn test_lookup_missing_user() {
	let store = MemStore::new();

	let user = service::get_user_by_email(&store, "nobody@example.com")
		.await
		.expect("lookup should succeed");
	assert!(user.is_none());
}

#[tokio::test]
async fn test_partial_update() {
	let store = MemStore::new();
	service::register_user(&store, &registration("alice@example.com", "password123"))
		.await
		.expect("registration should succeed");

	let patch = UserPatch {
		about_me: Patch::Value("Hello".to_string()),
		current_step: Patch::Value(3),
		..Default::default()
	};
	let user = service::update_user(&store, "alice@example.com", &patch)
		.await
		.expect("update should succeed");

	assert_eq!(user.about_me.as_deref(), Some("Hello"));
	assert_eq!(user.current_step, Some(3));
	// Untouched fields stay unset
	assert_eq!(user.city, None);
	assert_eq!(user.street_address, None);
}

#[tokio::test]
async fn test_update_preserves_other_fields() {
	let store = MemStore::new();
	service::register_user(&store, &registration("alice@example.com", "password123"))
		.await
		.expect("registration should succeed");

	let patch = UserPatch { city: Patch::Value("Springfield".to_string()), ..Default::default() };
	service::update_user(&store, "alice@example.com", &patch)
		.await
		.expect("first update should succeed");

	let patch = UserPatch { state: Patch::Value("OR".to_string()), ..Default::default() };
	let user = service::update_user(&store, "alice@example.com", &patch)
		.await
		.expect("second update should succeed");

	assert_eq!(user.city.as_deref(), Some("Springfield"));
	assert_eq!(user.state.as_deref(), Some("OR"));
}

#[tokio::test]
async fn test_update_null_leaves_field_untouched() {
	let store = MemStore::new();
	service::register_user(&store, &registration("alice@example.com", "password123"))
		.await
		.expect("registration should succeed");

	let patch = UserPatch { about_me: Patch::Value("Hello".to_string()), ..Default::default() };
	service::update_user(&store, "alice@example.com", &patch)
		.await
		.expect("first update should succeed");

	// An explicit null does not clear the stored value
	let patch = UserPatch { about_me: Patch::Null, ..Default::default() };
	let user = service::update_user(&store, "alice@example.com", &patch)
		.await
		.expect("null update should succeed");

	assert_eq!(user.about_me.as_deref(), Some("Hello"));
}

#[tokio::test]
async fn test_update_unknown_user() {
	let store = MemStore::new();

	let patch = UserPatch { city: Patch::Value("Nowhere".to_string()), ..Default::default() };
	let result = service::update_user(&store, "nobody@example.com", &patch).await;

	assert!(matches!(result, Err(Error::NotFound)));
	// Nothing was created as a side effect
	let users = service::get_all_users(&store).await.expect("list should succeed");
	assert!(users.is_empty());
}

#[tokio::test]
async fn test_list_users() {
	let store = MemStore::new();
	service::register_user(&store, &registration("alice@example.com", "password123"))
		.await
		.expect("registration should succeed");
	service::register_user(&store, &registration("bob@example.com", "password456"))
		.await
		.expect("registration should succeed");

	let users = service::get_all_users(&store).await.expect("list should succeed");
	assert_eq!(users.len(), 2);
}

// vim: ts=4
