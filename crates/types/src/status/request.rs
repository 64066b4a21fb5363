//! Tracking request DTO

use serde::{Deserialize, Serialize};

use crate::errors::{PakketError, PakketResult};

/// Look up the current status of a shipment by its barcode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentStatusRequest {
	#[serde(rename = "Barcode", skip_serializing_if = "Option::is_none")]
	pub barcode: Option<String>,
}

impl CurrentStatusRequest {
	pub fn new(barcode: impl Into<String>) -> Self {
		Self {
			barcode: Some(barcode.into()),
		}
	}

	pub fn validate(&self) -> PakketResult<()> {
		match self.barcode.as_deref() {
			Some(barcode) if !barcode.is_empty() => Ok(()),
			_ => Err(PakketError::invalid_argument(
				"CurrentStatus requires a barcode",
			)),
		}
	}
}
