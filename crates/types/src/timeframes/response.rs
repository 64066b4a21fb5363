//! Timeframe response DTO
//!
//! The wire shape nests each repeated field under a singular wrapper key
//! (note the provider's own casing of `ReasonNotimeframes`):
//!
//! ```json
//! {
//!   "Timeframes": { "Timeframe": [ ... ] },
//!   "ReasonNotimeframes": { "ReasonNoTimeframe": [ ... ] }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{ReasonNoTimeframe, Timeframe};
use crate::wire::ordered_sequence;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseTimeframes {
	#[serde(rename = "ReasonNotimeframes", default)]
	pub reason_no_timeframes: ReasonNoTimeframes,
	#[serde(rename = "Timeframes", default)]
	pub timeframes: Timeframes,
}

impl ResponseTimeframes {
	/// All per-date timeframes, in provider order
	pub fn timeframes(&self) -> &[Timeframe] {
		&self.timeframes.inner
	}

	/// All reasons the provider gave for dates without timeframes
	pub fn reason_no_timeframes(&self) -> &[ReasonNoTimeframe] {
		&self.reason_no_timeframes.inner
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeframes {
	#[serde(rename = "Timeframe", default, deserialize_with = "ordered_sequence")]
	pub inner: Vec<Timeframe>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReasonNoTimeframes {
	#[serde(
		rename = "ReasonNoTimeframe",
		default,
		deserialize_with = "ordered_sequence"
	)]
	pub inner: Vec<ReasonNoTimeframe>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_empty_response_decodes_to_empty_sequences() {
		let response: ResponseTimeframes = serde_json::from_value(json!({})).unwrap();
		assert!(response.timeframes().is_empty());
		assert!(response.reason_no_timeframes().is_empty());
	}

	#[test]
	fn test_single_unwrapped_timeframe_normalizes() {
		let response: ResponseTimeframes = serde_json::from_value(json!({
			"Timeframes": {
				"Timeframe": { "Date": "07-03-2018" }
			}
		}))
		.unwrap();

		assert_eq!(response.timeframes().len(), 1);
		assert_eq!(response.timeframes()[0].date.as_deref(), Some("07-03-2018"));
	}

	#[test]
	fn test_plural_response_preserves_order() {
		let response: ResponseTimeframes = serde_json::from_value(json!({
			"Timeframes": {
				"Timeframe": [
					{ "Date": "07-03-2018" },
					{ "Date": "08-03-2018" },
					{ "Date": "09-03-2018" }
				]
			}
		}))
		.unwrap();

		let dates: Vec<_> = response
			.timeframes()
			.iter()
			.map(|t| t.date.as_deref().unwrap())
			.collect();
		assert_eq!(dates, vec!["07-03-2018", "08-03-2018", "09-03-2018"]);
	}
}
