//! Customer (contract holder) entity

use serde::{Deserialize, Serialize};

use crate::models::Address;
use crate::service::{PropType, Service};

/// The contract holder issuing requests: customer code/number pair plus the
/// collection address the provider has on file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
	#[serde(skip)]
	pub service: Service,
	#[serde(skip)]
	pub prop_type: PropType,

	#[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
	pub address: Option<Address>,
	#[serde(rename = "CollectionLocation", skip_serializing_if = "Option::is_none")]
	pub collection_location: Option<String>,
	#[serde(rename = "ContactPerson", skip_serializing_if = "Option::is_none")]
	pub contact_person: Option<String>,
	#[serde(rename = "CustomerCode", skip_serializing_if = "Option::is_none")]
	pub customer_code: Option<String>,
	#[serde(rename = "CustomerNumber", skip_serializing_if = "Option::is_none")]
	pub customer_number: Option<String>,
	#[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	#[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
}

impl Customer {
	pub fn new(service: Service, prop_type: PropType) -> Self {
		Self {
			service,
			prop_type,
			..Self::default()
		}
	}

	pub fn with_address(mut self, address: Address) -> Self {
		self.address = Some(address);
		self
	}

	pub fn with_collection_location(mut self, collection_location: impl Into<String>) -> Self {
		self.collection_location = Some(collection_location.into());
		self
	}

	pub fn with_contact_person(mut self, contact_person: impl Into<String>) -> Self {
		self.contact_person = Some(contact_person.into());
		self
	}

	pub fn with_customer_code(mut self, customer_code: impl Into<String>) -> Self {
		self.customer_code = Some(customer_code.into());
		self
	}

	pub fn with_customer_number(mut self, customer_number: impl Into<String>) -> Self {
		self.customer_number = Some(customer_number.into());
		self
	}

	pub fn with_email(mut self, email: impl Into<String>) -> Self {
		self.email = Some(email.into());
		self
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}
}
