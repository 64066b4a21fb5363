//! Cut-off time entity

use serde::{Deserialize, Serialize};

/// Latest hand-over time per weekday. `day` is the provider's two-digit
/// weekday code (`"01"` Monday .. `"07"` Sunday, `"00"` all days).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CutOffTime {
	#[serde(rename = "Day", skip_serializing_if = "Option::is_none")]
	pub day: Option<String>,
	#[serde(rename = "Available", skip_serializing_if = "Option::is_none")]
	pub available: Option<bool>,
	#[serde(rename = "Time", skip_serializing_if = "Option::is_none")]
	pub time: Option<String>,
}

impl CutOffTime {
	pub fn new(day: impl Into<String>, available: bool, time: impl Into<String>) -> Self {
		Self {
			day: Some(day.into()),
			available: Some(available),
			time: Some(time.into()),
		}
	}
}
