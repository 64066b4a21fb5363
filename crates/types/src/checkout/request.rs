//! Checkout request DTO

use serde::{Deserialize, Serialize};

use crate::errors::{PakketError, PakketResult};
use crate::models::{Address, CutOffTime};

/// Ask the provider which delivery and pickup options can be offered at
/// checkout for an order placed now.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetDeliveryInformationRequest {
	#[serde(rename = "OrderDate", skip_serializing_if = "Option::is_none")]
	pub order_date: Option<String>,
	#[serde(rename = "ShippingDuration", skip_serializing_if = "Option::is_none")]
	pub shipping_duration: Option<String>,
	#[serde(rename = "CutOffTimes", default, skip_serializing_if = "Vec::is_empty")]
	pub cut_off_times: Vec<CutOffTime>,
	#[serde(rename = "HolidaySorting", skip_serializing_if = "Option::is_none")]
	pub holiday_sorting: Option<bool>,
	#[serde(rename = "Options", default, skip_serializing_if = "Vec::is_empty")]
	pub options: Vec<String>,
	#[serde(rename = "Locations", skip_serializing_if = "Option::is_none")]
	pub locations: Option<u32>,
	#[serde(rename = "Days", skip_serializing_if = "Option::is_none")]
	pub days: Option<u32>,
	#[serde(rename = "Addresses", default, skip_serializing_if = "Vec::is_empty")]
	pub addresses: Vec<Address>,
}

impl GetDeliveryInformationRequest {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_order_date(mut self, order_date: impl Into<String>) -> Self {
		self.order_date = Some(order_date.into());
		self
	}

	pub fn with_shipping_duration(mut self, shipping_duration: impl Into<String>) -> Self {
		self.shipping_duration = Some(shipping_duration.into());
		self
	}

	pub fn with_cut_off_times(mut self, cut_off_times: Vec<CutOffTime>) -> Self {
		self.cut_off_times = cut_off_times;
		self
	}

	pub fn with_holiday_sorting(mut self, holiday_sorting: bool) -> Self {
		self.holiday_sorting = Some(holiday_sorting);
		self
	}

	pub fn with_options(mut self, options: Vec<String>) -> Self {
		self.options = options;
		self
	}

	pub fn with_locations(mut self, locations: u32) -> Self {
		self.locations = Some(locations);
		self
	}

	pub fn with_days(mut self, days: u32) -> Self {
		self.days = Some(days);
		self
	}

	pub fn with_addresses(mut self, addresses: Vec<Address>) -> Self {
		self.addresses = addresses;
		self
	}

	pub fn validate(&self) -> PakketResult<()> {
		if self.order_date.is_none() {
			return Err(PakketError::invalid_argument(
				"GetDeliveryInformation requires an order date",
			));
		}
		if self.addresses.is_empty() {
			return Err(PakketError::invalid_argument(
				"GetDeliveryInformation requires at least one address",
			));
		}
		Ok(())
	}
}
