//! Request envelope message

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Correlation id + timestamp pair the provider expects on body-carrying
/// requests. `Message::new()` stamps the current time in the provider's
/// `dd-mm-YYYY HH:MM:SS` format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
	#[serde(rename = "MessageID", skip_serializing_if = "Option::is_none")]
	pub message_id: Option<String>,
	#[serde(rename = "MessageTimeStamp", skip_serializing_if = "Option::is_none")]
	pub message_time_stamp: Option<String>,
}

impl Message {
	pub fn new() -> Self {
		Self {
			message_id: Some("1".to_string()),
			message_time_stamp: Some(Utc::now().format("%d-%m-%Y %H:%M:%S").to_string()),
		}
	}

	pub fn with_message_id(mut self, message_id: impl Into<String>) -> Self {
		self.message_id = Some(message_id.into());
		self
	}

	pub fn with_message_time_stamp(mut self, message_time_stamp: impl Into<String>) -> Self {
		self.message_time_stamp = Some(message_time_stamp.into());
		self
	}
}
