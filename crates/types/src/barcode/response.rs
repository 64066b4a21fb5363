//! Barcode response DTO

use serde::{Deserialize, Serialize};

/// Wire shape: `{"Barcode": "3SDEVC816223392"}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateBarcodeResponse {
	#[serde(rename = "Barcode", skip_serializing_if = "Option::is_none")]
	pub barcode: Option<String>,
}
