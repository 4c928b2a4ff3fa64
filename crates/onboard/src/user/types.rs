//! User DTOs

use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::store_adapter;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterUserData {
	pub email: String,
	pub password: String,
}

/// Partial update request body. Only set fields are applied; absent and
/// explicit-null fields leave the stored values untouched.
///
/// Wire names follow the onboarding frontend: snake_case.
#[derive(Debug, Default, Deserialize)]
pub struct UserPatch {
	#[serde(default)]
	pub about_me: Patch<String>,
	#[serde(default)]
	pub street_address: Patch<String>,
	#[serde(default)]
	pub city: Patch<String>,
	#[serde(default)]
	pub state: Patch<String>,
	#[serde(default)]
	pub zip: Patch<String>,
	#[serde(default)]
	pub birthdate: Patch<String>,
	#[serde(default)]
	pub current_step: Patch<u32>,
}

/// User representation returned to clients, camelCase on the wire.
///
/// The stored password is returned verbatim; passwords are plaintext end
/// to end.
#[derive(Debug, Serialize)]
pub struct UserInfo {
	pub email: Box<str>,
	pub password: Box<str>,
	#[serde(rename = "aboutMe")]
	pub about_me: Option<Box<str>>,
	#[serde(rename = "streetAddress")]
	pub street_address: Option<Box<str>>,
	pub city: Option<Box<str>>,
	pub state: Option<Box<str>>,
	pub zip: Option<Box<str>>,
	pub birthdate: Option<Box<str>>,
	#[serde(rename = "currentStep")]
	pub current_step: Option<u32>,
}

impl From<store_adapter::User> for UserInfo {
	fn from(user: store_adapter::User) -> Self {
		Self {
			email: user.email,
			password: user.password,
			about_me: user.about_me,
			street_address: user.street_address,
			city: user.city,
			state: user.state,
			zip: user.zip,
			birthdate: user.birthdate,
			current_step: user.current_step,
		}
	}
}

// vim: ts=4
