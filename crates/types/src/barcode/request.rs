//! Barcode request DTO

use serde::{Deserialize, Serialize};

use crate::errors::{PakketError, PakketResult};

/// Reserve the next barcode in a customer's serie.
///
/// `barcode_type` is the provider's product family (`"3S"` domestic,
/// `"CC"`/`"CP"` international); `serie` is the allotted number range,
/// e.g. `"000000000-999999999"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateBarcodeRequest {
	#[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
	pub barcode_type: Option<String>,
	#[serde(rename = "Serie", skip_serializing_if = "Option::is_none")]
	pub serie: Option<String>,
	#[serde(rename = "CustomerCode", skip_serializing_if = "Option::is_none")]
	pub customer_code: Option<String>,
	#[serde(rename = "CustomerNumber", skip_serializing_if = "Option::is_none")]
	pub customer_number: Option<String>,
}

impl GenerateBarcodeRequest {
	pub fn new(barcode_type: impl Into<String>, serie: impl Into<String>) -> Self {
		Self {
			barcode_type: Some(barcode_type.into()),
			serie: Some(serie.into()),
			..Self::default()
		}
	}

	pub fn with_customer_code(mut self, customer_code: impl Into<String>) -> Self {
		self.customer_code = Some(customer_code.into());
		self
	}

	pub fn with_customer_number(mut self, customer_number: impl Into<String>) -> Self {
		self.customer_number = Some(customer_number.into());
		self
	}

	pub fn validate(&self) -> PakketResult<()> {
		if self.barcode_type.is_none() || self.serie.is_none() {
			return Err(PakketError::invalid_argument(
				"GenerateBarcode requires a type and a serie",
			));
		}
		if self.customer_code.is_none() || self.customer_number.is_none() {
			return Err(PakketError::invalid_argument(
				"GenerateBarcode requires a customer code and number",
			));
		}
		Ok(())
	}
}
