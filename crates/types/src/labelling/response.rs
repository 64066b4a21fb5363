//! Label generation response DTO

use serde::{Deserialize, Serialize};

use crate::models::ResponseShipment;
use crate::wire::ordered_sequence;

/// Wire shape: `{"ResponseShipments": [{"Barcode": ..., "Labels": [...]}]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateLabelResponse {
	#[serde(
		rename = "ResponseShipments",
		default,
		deserialize_with = "ordered_sequence"
	)]
	pub response_shipments: Vec<ResponseShipment>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_response_with_labels_decodes() {
		let response: GenerateLabelResponse = serde_json::from_value(json!({
			"ResponseShipments": [
				{
					"Barcode": "3SDEVC201611210",
					"ProductCodeDelivery": "3085",
					"Labels": [
						{ "Content": "JVBERi0xLjQ=", "Labeltype": "Label" }
					]
				}
			]
		}))
		.unwrap();

		assert_eq!(response.response_shipments.len(), 1);
		assert_eq!(
			response.response_shipments[0].barcode.as_deref(),
			Some("3SDEVC201611210")
		);
		assert_eq!(response.response_shipments[0].labels.len(), 1);
	}

	#[test]
	fn test_singular_response_shipment_normalizes() {
		let response: GenerateLabelResponse = serde_json::from_value(json!({
			"ResponseShipments": { "Barcode": "3SDEVC201611210" }
		}))
		.unwrap();

		assert_eq!(response.response_shipments.len(), 1);
	}
}
