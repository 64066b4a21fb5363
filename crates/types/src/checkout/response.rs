//! Checkout response DTO

use serde::{Deserialize, Serialize};

use crate::models::{DeliveryOption, PickupOption, Warning};
use crate::wire::ordered_sequence;

/// Delivery and pickup options the provider can offer at checkout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetDeliveryInformationResponse {
	#[serde(
		rename = "DeliveryOptions",
		default,
		deserialize_with = "ordered_sequence"
	)]
	pub delivery_options: Vec<DeliveryOption>,
	#[serde(
		rename = "PickupOptions",
		default,
		deserialize_with = "ordered_sequence"
	)]
	pub pickup_options: Vec<PickupOption>,
	#[serde(rename = "Warnings", default, deserialize_with = "ordered_sequence")]
	pub warnings: Vec<Warning>,
}
