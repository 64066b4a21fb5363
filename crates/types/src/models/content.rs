//! Customs content line item

use serde::{Deserialize, Serialize};

use crate::service::{PropType, Service};
use crate::wire::ordered_sequence;

/// One customs declaration line: what is in the parcel, where it came from
/// and what it is worth. May nest sub-content for combined shipments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
	#[serde(skip)]
	pub service: Service,
	#[serde(skip)]
	pub prop_type: PropType,

	#[serde(rename = "CountryOfOrigin", skip_serializing_if = "Option::is_none")]
	pub country_of_origin: Option<String>,
	#[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(rename = "HSTariffNr", skip_serializing_if = "Option::is_none")]
	pub hs_tariff_nr: Option<String>,
	#[serde(rename = "Quantity", skip_serializing_if = "Option::is_none")]
	pub quantity: Option<String>,
	#[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
	pub value: Option<String>,
	#[serde(rename = "Weight", skip_serializing_if = "Option::is_none")]
	pub weight: Option<String>,
	#[serde(
		rename = "Content",
		default,
		deserialize_with = "ordered_sequence",
		skip_serializing_if = "Vec::is_empty"
	)]
	pub content: Vec<Content>,
}

impl Content {
	pub fn new(service: Service, prop_type: PropType) -> Self {
		Self {
			service,
			prop_type,
			..Self::default()
		}
	}

	pub fn with_country_of_origin(mut self, country_of_origin: impl Into<String>) -> Self {
		self.country_of_origin = Some(country_of_origin.into());
		self
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn with_hs_tariff_nr(mut self, hs_tariff_nr: impl Into<String>) -> Self {
		self.hs_tariff_nr = Some(hs_tariff_nr.into());
		self
	}

	pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
		self.quantity = Some(quantity.into());
		self
	}

	pub fn with_value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}

	pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
		self.weight = Some(weight.into());
		self
	}

	pub fn with_content(mut self, content: Vec<Content>) -> Self {
		self.content = content;
		self
	}
}
