//! Delivery/shipping date request DTOs

use serde::{Deserialize, Serialize};

use crate::errors::{PakketError, PakketResult};
use crate::models::CutOffTime;

/// Forward calculation: given a shipping date, when will the parcel arrive
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculateDeliveryDateRequest {
	#[serde(rename = "ShippingDate", skip_serializing_if = "Option::is_none")]
	pub shipping_date: Option<String>,
	#[serde(rename = "ShippingDuration", skip_serializing_if = "Option::is_none")]
	pub shipping_duration: Option<String>,
	#[serde(rename = "CutOffTime", skip_serializing_if = "Option::is_none")]
	pub cut_off_time: Option<String>,
	#[serde(rename = "PostalCode", skip_serializing_if = "Option::is_none")]
	pub postal_code: Option<String>,
	#[serde(rename = "CountryCode", skip_serializing_if = "Option::is_none")]
	pub country_code: Option<String>,
	#[serde(rename = "OriginCountryCode", skip_serializing_if = "Option::is_none")]
	pub origin_country_code: Option<String>,
	#[serde(rename = "City", skip_serializing_if = "Option::is_none")]
	pub city: Option<String>,
	#[serde(rename = "Street", skip_serializing_if = "Option::is_none")]
	pub street: Option<String>,
	#[serde(rename = "HouseNr", skip_serializing_if = "Option::is_none")]
	pub house_nr: Option<String>,
	#[serde(rename = "HouseNrExt", skip_serializing_if = "Option::is_none")]
	pub house_nr_ext: Option<String>,
	#[serde(rename = "Options", default, skip_serializing_if = "Vec::is_empty")]
	pub options: Vec<String>,
	#[serde(rename = "CutOffTimes", default, skip_serializing_if = "Vec::is_empty")]
	pub cut_off_times: Vec<CutOffTime>,
}

impl CalculateDeliveryDateRequest {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_shipping_date(mut self, shipping_date: impl Into<String>) -> Self {
		self.shipping_date = Some(shipping_date.into());
		self
	}

	pub fn with_shipping_duration(mut self, shipping_duration: impl Into<String>) -> Self {
		self.shipping_duration = Some(shipping_duration.into());
		self
	}

	pub fn with_cut_off_time(mut self, cut_off_time: impl Into<String>) -> Self {
		self.cut_off_time = Some(cut_off_time.into());
		self
	}

	pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
		self.postal_code = Some(postal_code.into());
		self
	}

	pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
		self.country_code = Some(country_code.into());
		self
	}

	pub fn with_origin_country_code(mut self, origin_country_code: impl Into<String>) -> Self {
		self.origin_country_code = Some(origin_country_code.into());
		self
	}

	pub fn with_city(mut self, city: impl Into<String>) -> Self {
		self.city = Some(city.into());
		self
	}

	pub fn with_street(mut self, street: impl Into<String>) -> Self {
		self.street = Some(street.into());
		self
	}

	pub fn with_house_nr(mut self, house_nr: impl Into<String>) -> Self {
		self.house_nr = Some(house_nr.into());
		self
	}

	pub fn with_house_nr_ext(mut self, house_nr_ext: impl Into<String>) -> Self {
		self.house_nr_ext = Some(house_nr_ext.into());
		self
	}

	pub fn with_options(mut self, options: Vec<String>) -> Self {
		self.options = options;
		self
	}

	pub fn with_cut_off_times(mut self, cut_off_times: Vec<CutOffTime>) -> Self {
		self.cut_off_times = cut_off_times;
		self
	}

	pub fn validate(&self) -> PakketResult<()> {
		if self.shipping_date.is_none() {
			return Err(PakketError::invalid_argument(
				"CalculateDeliveryDate requires a shipping date",
			));
		}
		if self.postal_code.is_none() {
			return Err(PakketError::invalid_argument(
				"CalculateDeliveryDate requires a postal code",
			));
		}
		Ok(())
	}
}

/// Reverse calculation: given a promised delivery date, when must it ship
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculateShippingDateRequest {
	#[serde(rename = "DeliveryDate", skip_serializing_if = "Option::is_none")]
	pub delivery_date: Option<String>,
	#[serde(rename = "ShippingDuration", skip_serializing_if = "Option::is_none")]
	pub shipping_duration: Option<String>,
	#[serde(rename = "PostalCode", skip_serializing_if = "Option::is_none")]
	pub postal_code: Option<String>,
	#[serde(rename = "CountryCode", skip_serializing_if = "Option::is_none")]
	pub country_code: Option<String>,
	#[serde(rename = "OriginCountryCode", skip_serializing_if = "Option::is_none")]
	pub origin_country_code: Option<String>,
	#[serde(rename = "City", skip_serializing_if = "Option::is_none")]
	pub city: Option<String>,
	#[serde(rename = "Street", skip_serializing_if = "Option::is_none")]
	pub street: Option<String>,
	#[serde(rename = "HouseNr", skip_serializing_if = "Option::is_none")]
	pub house_nr: Option<String>,
	#[serde(rename = "HouseNrExt", skip_serializing_if = "Option::is_none")]
	pub house_nr_ext: Option<String>,
}

impl CalculateShippingDateRequest {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_delivery_date(mut self, delivery_date: impl Into<String>) -> Self {
		self.delivery_date = Some(delivery_date.into());
		self
	}

	pub fn with_shipping_duration(mut self, shipping_duration: impl Into<String>) -> Self {
		self.shipping_duration = Some(shipping_duration.into());
		self
	}

	pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
		self.postal_code = Some(postal_code.into());
		self
	}

	pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
		self.country_code = Some(country_code.into());
		self
	}

	pub fn with_origin_country_code(mut self, origin_country_code: impl Into<String>) -> Self {
		self.origin_country_code = Some(origin_country_code.into());
		self
	}

	pub fn with_city(mut self, city: impl Into<String>) -> Self {
		self.city = Some(city.into());
		self
	}

	pub fn with_street(mut self, street: impl Into<String>) -> Self {
		self.street = Some(street.into());
		self
	}

	pub fn with_house_nr(mut self, house_nr: impl Into<String>) -> Self {
		self.house_nr = Some(house_nr.into());
		self
	}

	pub fn with_house_nr_ext(mut self, house_nr_ext: impl Into<String>) -> Self {
		self.house_nr_ext = Some(house_nr_ext.into());
		self
	}

	pub fn validate(&self) -> PakketResult<()> {
		if self.delivery_date.is_none() {
			return Err(PakketError::invalid_argument(
				"CalculateShippingDate requires a delivery date",
			));
		}
		if self.postal_code.is_none() {
			return Err(PakketError::invalid_argument(
				"CalculateShippingDate requires a postal code",
			));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_delivery_date_request_requires_shipping_date_and_postal_code() {
		assert!(CalculateDeliveryDateRequest::new().validate().is_err());
		assert!(CalculateDeliveryDateRequest::new()
			.with_shipping_date("29-06-2016 14:00:00")
			.validate()
			.is_err());
		assert!(CalculateDeliveryDateRequest::new()
			.with_shipping_date("29-06-2016 14:00:00")
			.with_postal_code("2132WT")
			.validate()
			.is_ok());
	}

	#[test]
	fn test_shipping_date_request_requires_delivery_date() {
		assert!(CalculateShippingDateRequest::new()
			.with_postal_code("2132WT")
			.validate()
			.is_err());
	}
}
