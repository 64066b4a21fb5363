//! Shipment, dimension and label entities

use serde::{Deserialize, Serialize};

use crate::models::{Address, Content};
use crate::service::{PropType, Service};
use crate::wire::ordered_sequence;

/// Parcel dimensions; weight in grams, sizes in millimeters, as wire strings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
	#[serde(rename = "Height", skip_serializing_if = "Option::is_none")]
	pub height: Option<String>,
	#[serde(rename = "Length", skip_serializing_if = "Option::is_none")]
	pub length: Option<String>,
	#[serde(rename = "Volume", skip_serializing_if = "Option::is_none")]
	pub volume: Option<String>,
	#[serde(rename = "Weight", skip_serializing_if = "Option::is_none")]
	pub weight: Option<String>,
	#[serde(rename = "Width", skip_serializing_if = "Option::is_none")]
	pub width: Option<String>,
}

impl Dimension {
	pub fn with_weight(weight: impl Into<String>) -> Self {
		Self {
			weight: Some(weight.into()),
			..Self::default()
		}
	}
}

/// One shippable parcel with its addresses and product code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
	#[serde(skip)]
	pub service: Service,
	#[serde(skip)]
	pub prop_type: PropType,

	#[serde(
		rename = "Addresses",
		default,
		deserialize_with = "ordered_sequence",
		skip_serializing_if = "Vec::is_empty"
	)]
	pub addresses: Vec<Address>,
	#[serde(rename = "Barcode", skip_serializing_if = "Option::is_none")]
	pub barcode: Option<String>,
	#[serde(
		rename = "Contents",
		default,
		deserialize_with = "ordered_sequence",
		skip_serializing_if = "Vec::is_empty"
	)]
	pub contents: Vec<Content>,
	#[serde(rename = "DeliveryDate", skip_serializing_if = "Option::is_none")]
	pub delivery_date: Option<String>,
	#[serde(rename = "Dimension", skip_serializing_if = "Option::is_none")]
	pub dimension: Option<Dimension>,
	#[serde(rename = "ProductCodeDelivery", skip_serializing_if = "Option::is_none")]
	pub product_code_delivery: Option<String>,
	#[serde(rename = "Reference", skip_serializing_if = "Option::is_none")]
	pub reference: Option<String>,
	#[serde(rename = "Remark", skip_serializing_if = "Option::is_none")]
	pub remark: Option<String>,
}

impl Shipment {
	pub fn new(service: Service, prop_type: PropType) -> Self {
		Self {
			service,
			prop_type,
			..Self::default()
		}
	}

	pub fn with_addresses(mut self, addresses: Vec<Address>) -> Self {
		self.addresses = addresses;
		self
	}

	pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
		self.barcode = Some(barcode.into());
		self
	}

	pub fn with_contents(mut self, contents: Vec<Content>) -> Self {
		self.contents = contents;
		self
	}

	pub fn with_delivery_date(mut self, delivery_date: impl Into<String>) -> Self {
		self.delivery_date = Some(delivery_date.into());
		self
	}

	pub fn with_dimension(mut self, dimension: Dimension) -> Self {
		self.dimension = Some(dimension);
		self
	}

	pub fn with_product_code_delivery(mut self, code: impl Into<String>) -> Self {
		self.product_code_delivery = Some(code.into());
		self
	}

	pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
		self.reference = Some(reference.into());
		self
	}

	pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
		self.remark = Some(remark.into());
		self
	}
}

/// A generated label (base64 PDF/ZPL content)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Label {
	#[serde(rename = "Content", skip_serializing_if = "Option::is_none")]
	pub content: Option<String>,
	#[serde(rename = "Labeltype", skip_serializing_if = "Option::is_none")]
	pub labeltype: Option<String>,
}

/// Per-shipment result of a label generation call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseShipment {
	#[serde(rename = "Barcode", skip_serializing_if = "Option::is_none")]
	pub barcode: Option<String>,
	#[serde(
		rename = "Labels",
		default,
		deserialize_with = "ordered_sequence",
		skip_serializing_if = "Vec::is_empty"
	)]
	pub labels: Vec<Label>,
	#[serde(rename = "ProductCodeDelivery", skip_serializing_if = "Option::is_none")]
	pub product_code_delivery: Option<String>,
	#[serde(
		rename = "Warnings",
		default,
		deserialize_with = "ordered_sequence",
		skip_serializing_if = "Vec::is_empty"
	)]
	pub warnings: Vec<crate::models::Warning>,
}
