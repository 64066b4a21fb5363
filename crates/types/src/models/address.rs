//! Postal address entity

use serde::{Deserialize, Serialize};

use crate::service::{PropType, Service};

/// A postal address as the provider models it.
///
/// `address_type` is a two-digit provider code (`"01"` receiver, `"02"`
/// sender, `"09"` pickup location, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
	#[serde(skip)]
	pub service: Service,
	#[serde(skip)]
	pub prop_type: PropType,

	#[serde(rename = "AddressType", skip_serializing_if = "Option::is_none")]
	pub address_type: Option<String>,
	#[serde(rename = "City", skip_serializing_if = "Option::is_none")]
	pub city: Option<String>,
	#[serde(rename = "CompanyName", skip_serializing_if = "Option::is_none")]
	pub company_name: Option<String>,
	#[serde(rename = "Countrycode", skip_serializing_if = "Option::is_none")]
	pub country_code: Option<String>,
	#[serde(rename = "FirstName", skip_serializing_if = "Option::is_none")]
	pub first_name: Option<String>,
	#[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(rename = "HouseNr", skip_serializing_if = "Option::is_none")]
	pub house_nr: Option<String>,
	#[serde(rename = "HouseNrExt", skip_serializing_if = "Option::is_none")]
	pub house_nr_ext: Option<String>,
	#[serde(rename = "Street", skip_serializing_if = "Option::is_none")]
	pub street: Option<String>,
	#[serde(rename = "Zipcode", skip_serializing_if = "Option::is_none")]
	pub zipcode: Option<String>,
}

impl Address {
	pub fn new(service: Service, prop_type: PropType) -> Self {
		Self {
			service,
			prop_type,
			..Self::default()
		}
	}

	pub fn with_address_type(mut self, address_type: impl Into<String>) -> Self {
		self.address_type = Some(address_type.into());
		self
	}

	pub fn with_city(mut self, city: impl Into<String>) -> Self {
		self.city = Some(city.into());
		self
	}

	pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
		self.company_name = Some(company_name.into());
		self
	}

	pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
		self.country_code = Some(country_code.into());
		self
	}

	pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
		self.first_name = Some(first_name.into());
		self
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
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

	pub fn with_street(mut self, street: impl Into<String>) -> Self {
		self.street = Some(street.into());
		self
	}

	pub fn with_zipcode(mut self, zipcode: impl Into<String>) -> Self {
		self.zipcode = Some(zipcode.into());
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_absent_fields_are_omitted() {
		let address = Address::new(Service::Timeframe, PropType::Request)
			.with_zipcode("2132WT")
			.with_house_nr("42");

		let value = serde_json::to_value(&address).unwrap();
		assert_eq!(value, json!({ "Zipcode": "2132WT", "HouseNr": "42" }));
	}

	#[test]
	fn test_builders_produce_new_instances() {
		let base = Address::new(Service::Checkout, PropType::Request).with_city("Hoofddorp");
		let extended = base.clone().with_street("Siriusdreef");

		assert_eq!(base.street, None);
		assert_eq!(extended.street.as_deref(), Some("Siriusdreef"));
		assert_eq!(extended.service, Service::Checkout);
	}
}
