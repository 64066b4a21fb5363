//! Checkout (delivery information) entities

use serde::{Deserialize, Serialize};

use crate::models::Address;
use crate::wire::ordered_sequence;

/// One proposed home delivery option
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryOption {
	#[serde(rename = "DeliveryDate", skip_serializing_if = "Option::is_none")]
	pub delivery_date: Option<String>,
	#[serde(
		rename = "Timeframe",
		default,
		deserialize_with = "ordered_sequence",
		skip_serializing_if = "Vec::is_empty"
	)]
	pub timeframe: Vec<CheckoutTimeframe>,
}

/// A delivery window inside a checkout delivery option
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutTimeframe {
	#[serde(rename = "From", skip_serializing_if = "Option::is_none")]
	pub from: Option<String>,
	#[serde(rename = "To", skip_serializing_if = "Option::is_none")]
	pub to: Option<String>,
	#[serde(
		rename = "Options",
		default,
		deserialize_with = "ordered_sequence",
		skip_serializing_if = "Vec::is_empty"
	)]
	pub options: Vec<String>,
}

/// One proposed pickup-point option
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PickupOption {
	#[serde(rename = "PickupDate", skip_serializing_if = "Option::is_none")]
	pub pickup_date: Option<String>,
	#[serde(rename = "Option", skip_serializing_if = "Option::is_none")]
	pub option: Option<String>,
	#[serde(
		rename = "Locations",
		default,
		deserialize_with = "ordered_sequence",
		skip_serializing_if = "Vec::is_empty"
	)]
	pub locations: Vec<PickupLocation>,
}

/// A pickup point with its address and distance from the requested address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PickupLocation {
	#[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(rename = "LocationCode", skip_serializing_if = "Option::is_none")]
	pub location_code: Option<String>,
	#[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
	pub address: Option<Address>,
	#[serde(rename = "Distance", skip_serializing_if = "Option::is_none")]
	pub distance: Option<i64>,
	#[serde(rename = "PickupTime", skip_serializing_if = "Option::is_none")]
	pub pickup_time: Option<String>,
}

/// Provider warning attached to an otherwise successful response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Warning {
	#[serde(rename = "Code", skip_serializing_if = "Option::is_none")]
	pub code: Option<String>,
	#[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}
