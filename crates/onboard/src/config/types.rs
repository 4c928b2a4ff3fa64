//! Configuration view types

use serde::{Deserialize, Serialize};

/// The derived configuration: one ordered component list per onboarding
/// page. Not persisted; computed by partitioning the stored entries.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ConfigurationView {
	// A page absent from an update body means that page gets no components
	#[serde(default, rename = "page2Components")]
	pub page2_components: Vec<Box<str>>,
	#[serde(default, rename = "page3Components")]
	pub page3_components: Vec<Box<str>>,
}

// vim: ts=4
