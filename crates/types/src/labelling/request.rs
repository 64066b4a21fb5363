//! Label generation request DTO

use serde::{Deserialize, Serialize};

use crate::errors::{PakketError, PakketResult};
use crate::models::{Customer, Message, Shipment};

/// Generate shipping labels for one or more parcels.
///
/// `confirm` is carried as a query parameter, not in the body: a confirmed
/// label is announced to the provider's sorting process at the same time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateLabelRequest {
	#[serde(rename = "Customer", skip_serializing_if = "Option::is_none")]
	pub customer: Option<Customer>,
	#[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
	pub message: Option<Message>,
	#[serde(rename = "Shipments", default, skip_serializing_if = "Vec::is_empty")]
	pub shipments: Vec<Shipment>,
	#[serde(skip)]
	pub confirm: bool,
}

impl GenerateLabelRequest {
	pub fn new(customer: Customer, shipments: Vec<Shipment>) -> Self {
		Self {
			customer: Some(customer),
			message: Some(Message::new()),
			shipments,
			confirm: true,
		}
	}

	pub fn with_message(mut self, message: Message) -> Self {
		self.message = Some(message);
		self
	}

	pub fn with_confirm(mut self, confirm: bool) -> Self {
		self.confirm = confirm;
		self
	}

	pub fn validate(&self) -> PakketResult<()> {
		let customer = self
			.customer
			.as_ref()
			.ok_or_else(|| PakketError::invalid_argument("GenerateLabel requires a customer"))?;

		if customer.customer_code.is_none() || customer.customer_number.is_none() {
			return Err(PakketError::invalid_argument(
				"GenerateLabel customer requires a customer code and number",
			));
		}
		if self.shipments.is_empty() {
			return Err(PakketError::invalid_argument(
				"GenerateLabel requires at least one shipment",
			));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::service::{PropType, Service};

	fn customer() -> Customer {
		Customer::new(Service::Labelling, PropType::Request)
			.with_customer_code("DEVC")
			.with_customer_number("11223344")
	}

	#[test]
	fn test_requires_shipments() {
		let request = GenerateLabelRequest::new(customer(), vec![]);
		assert!(matches!(
			request.validate(),
			Err(PakketError::InvalidArgument { .. })
		));
	}

	#[test]
	fn test_requires_customer_identifiers() {
		let incomplete = Customer::new(Service::Labelling, PropType::Request);
		let shipment = Shipment::new(Service::Labelling, PropType::Request);
		let request = GenerateLabelRequest::new(incomplete, vec![shipment]);
		assert!(request.validate().is_err());
	}
}
