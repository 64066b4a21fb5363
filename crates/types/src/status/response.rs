//! Tracking response DTO
//!
//! The status lookup nests the shipments under `CurrentStatus.Shipment`,
//! unwrapped to a bare object when there is exactly one.

use serde::{Deserialize, Serialize};

use crate::wire::ordered_sequence;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentStatusResponse {
	#[serde(rename = "CurrentStatus", default)]
	pub current_status: CurrentStatus,
}

impl CurrentStatusResponse {
	pub fn shipments(&self) -> &[ShipmentStatus] {
		&self.current_status.shipment
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentStatus {
	#[serde(rename = "Shipment", default, deserialize_with = "ordered_sequence")]
	pub shipment: Vec<ShipmentStatus>,
}

/// Tracking state of one shipment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentStatus {
	#[serde(rename = "Barcode", skip_serializing_if = "Option::is_none")]
	pub barcode: Option<String>,
	#[serde(rename = "DeliveryDate", skip_serializing_if = "Option::is_none")]
	pub delivery_date: Option<String>,
	#[serde(rename = "ProductCode", skip_serializing_if = "Option::is_none")]
	pub product_code: Option<String>,
	#[serde(rename = "Reference", skip_serializing_if = "Option::is_none")]
	pub reference: Option<String>,
	#[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
	pub status: Option<StatusDetail>,
}

/// Provider status code + phase for a shipment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusDetail {
	#[serde(rename = "StatusCode", skip_serializing_if = "Option::is_none")]
	pub status_code: Option<String>,
	#[serde(rename = "StatusDescription", skip_serializing_if = "Option::is_none")]
	pub status_description: Option<String>,
	#[serde(rename = "PhaseCode", skip_serializing_if = "Option::is_none")]
	pub phase_code: Option<String>,
	#[serde(rename = "PhaseDescription", skip_serializing_if = "Option::is_none")]
	pub phase_description: Option<String>,
	#[serde(rename = "TimeStamp", skip_serializing_if = "Option::is_none")]
	pub time_stamp: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_single_shipment_unwrapped() {
		let response: CurrentStatusResponse = serde_json::from_value(json!({
			"CurrentStatus": {
				"Shipment": {
					"Barcode": "3SDEVC201611210",
					"Status": { "StatusCode": "7", "StatusDescription": "Delivered" }
				}
			}
		}))
		.unwrap();

		assert_eq!(response.shipments().len(), 1);
		assert_eq!(
			response.shipments()[0]
				.status
				.as_ref()
				.unwrap()
				.status_code
				.as_deref(),
			Some("7")
		);
	}

	#[test]
	fn test_multiple_shipments_as_array() {
		let response: CurrentStatusResponse = serde_json::from_value(json!({
			"CurrentStatus": {
				"Shipment": [
					{ "Barcode": "3SDEVC000000001" },
					{ "Barcode": "3SDEVC000000002" }
				]
			}
		}))
		.unwrap();

		assert_eq!(response.shipments().len(), 2);
	}
}
