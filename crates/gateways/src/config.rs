//! Gateway configuration
//!
//! The embedding application supplies the credential, the sandbox flag and
//! the API mode at construction time; gateways read everything else from
//! the request DTOs.

use pakket_types::{ApiMode, SecretString};

const LIVE_BASE_URL: &str = "https://api.pakketdienst.nl";
const SANDBOX_BASE_URL: &str = "https://api-sandbox.pakketdienst.nl";

/// Shared configuration handed to every gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
	api_key: SecretString,
	sandbox: bool,
	mode: ApiMode,
}

impl GatewayConfig {
	pub fn new(api_key: impl Into<SecretString>) -> Self {
		Self {
			api_key: api_key.into(),
			sandbox: false,
			mode: ApiMode::Rest,
		}
	}

	pub fn with_sandbox(mut self, sandbox: bool) -> Self {
		self.sandbox = sandbox;
		self
	}

	pub fn with_mode(mut self, mode: ApiMode) -> Self {
		self.mode = mode;
		self
	}

	pub fn api_key(&self) -> &SecretString {
		&self.api_key
	}

	pub fn sandbox(&self) -> bool {
		self.sandbox
	}

	pub fn mode(&self) -> ApiMode {
		self.mode
	}

	pub fn base_url(&self) -> &'static str {
		if self.sandbox {
			SANDBOX_BASE_URL
		} else {
			LIVE_BASE_URL
		}
	}

	/// Absolute URL for an API path such as `shipment/v2_1/calculate/timeframes`
	pub fn endpoint(&self, path: &str) -> String {
		format!("{}/{}", self.base_url(), path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sandbox_switches_base_url() {
		let live = GatewayConfig::new("key");
		assert_eq!(
			live.endpoint("shipment/v1_1/barcode"),
			"https://api.pakketdienst.nl/shipment/v1_1/barcode"
		);

		let sandbox = GatewayConfig::new("key").with_sandbox(true);
		assert!(sandbox
			.endpoint("shipment/v1_1/barcode")
			.starts_with("https://api-sandbox.pakketdienst.nl/"));
	}

	#[test]
	fn test_defaults_to_rest_live() {
		let config = GatewayConfig::new("key");
		assert_eq!(config.mode(), ApiMode::Rest);
		assert!(!config.sandbox());
	}
}
