//! Timeframe request DTO

use serde::{Deserialize, Serialize};

use crate::errors::{PakketError, PakketResult};
use crate::models::{Message, Timeframe};

/// Request for the available delivery timeframes at an address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetTimeframes {
	#[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
	pub message: Option<Message>,
	#[serde(rename = "Timeframe", skip_serializing_if = "Vec::is_empty", default)]
	pub timeframes: Vec<Timeframe>,
}

impl GetTimeframes {
	pub fn new(timeframes: Vec<Timeframe>) -> Self {
		Self {
			message: Some(Message::new()),
			timeframes,
		}
	}

	pub fn with_message(mut self, message: Message) -> Self {
		self.message = Some(message);
		self
	}

	/// The request must carry at least one timeframe query entry, and the
	/// first entry drives the REST query string.
	pub fn validate(&self) -> PakketResult<()> {
		let timeframe = self
			.timeframes
			.first()
			.ok_or_else(|| PakketError::invalid_argument("GetTimeframes requires at least one timeframe"))?;

		if timeframe.postal_code.is_none() {
			return Err(PakketError::invalid_argument(
				"GetTimeframes timeframe requires a postal code",
			));
		}
		if timeframe.start_date.is_none() || timeframe.end_date.is_none() {
			return Err(PakketError::invalid_argument(
				"GetTimeframes timeframe requires a start and end date",
			));
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::service::{PropType, Service};

	#[test]
	fn test_empty_timeframes_fail_validation() {
		let request = GetTimeframes::new(vec![]);
		assert!(matches!(
			request.validate(),
			Err(PakketError::InvalidArgument { .. })
		));
	}

	#[test]
	fn test_missing_dates_fail_validation() {
		let request = GetTimeframes::new(vec![Timeframe::new(Service::Timeframe, PropType::Request)
			.with_postal_code("2132WT")]);
		assert!(request.validate().is_err());
	}

	#[test]
	fn test_complete_request_validates() {
		let request = GetTimeframes::new(vec![Timeframe::new(Service::Timeframe, PropType::Request)
			.with_postal_code("2132WT")
			.with_start_date("30-06-2016")
			.with_end_date("02-07-2016")]);
		assert!(request.validate().is_ok());
	}
}
