//! Input validation helpers.
//!
//! Email and password checks are enforced at registration; the rest are
//! available for callers that want them.

use regex::Regex;

pub fn is_valid_email(email: &str) -> bool {
	Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
		.map(|re| re.is_match(email))
		.unwrap_or(false)
}

pub fn is_valid_password(password: &str) -> bool {
	(8..=128).contains(&password.len())
}

pub fn is_valid_alphanumeric(input: &str) -> bool {
	Regex::new(r"^[a-zA-Z0-9\s]*$").map(|re| re.is_match(input)).unwrap_or(false)
}

/// US zip code: 5 digits with an optional -4 extension.
pub fn is_valid_zip(zip: &str) -> bool {
	Regex::new(r"^\d{5}(-\d{4})?$").map(|re| re.is_match(zip)).unwrap_or(false)
}

/// Trims whitespace and strips characters with markup significance.
pub fn sanitize(input: &str) -> String {
	input.trim().chars().filter(|c| !matches!(c, '<' | '>' | '"' | '\'' | '&')).collect()
}


// vim: ts=4
