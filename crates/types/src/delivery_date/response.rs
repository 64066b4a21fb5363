//! Delivery/shipping date response DTOs

use serde::{Deserialize, Serialize};

use crate::wire::WrappedOptions;

/// Wire shape: `{"DeliveryDate": "30-06-2016", "Options": {"string": "Daytime"}}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculateDeliveryDateResponse {
	#[serde(rename = "DeliveryDate", skip_serializing_if = "Option::is_none")]
	pub delivery_date: Option<String>,
	#[serde(rename = "Options", skip_serializing_if = "Option::is_none")]
	pub options: Option<WrappedOptions>,
}

/// Wire shape: `{"SentDate": "29-06-2016"}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculateShippingDateResponse {
	#[serde(rename = "SentDate", skip_serializing_if = "Option::is_none")]
	pub sent_date: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_delivery_date_response_with_singular_option() {
		let response: CalculateDeliveryDateResponse = serde_json::from_value(json!({
			"DeliveryDate": "30-06-2016",
			"Options": { "string": "Daytime" }
		}))
		.unwrap();

		assert_eq!(response.delivery_date.as_deref(), Some("30-06-2016"));
		assert_eq!(response.options.unwrap().values, vec!["Daytime"]);
	}
}
