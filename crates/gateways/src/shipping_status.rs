//! Shipping status service gateway
//!
//! Tracking lookups by barcode. The barcode is a path segment, not a query
//! parameter, so it is percent-encoded through the URL parser.

use std::fmt::Debug;
use std::sync::Arc;

use pakket_client::{ApiRequest, ApiResponse, HttpClient};
use pakket_types::{CurrentStatusRequest, CurrentStatusResponse, PakketError, PakketResult};
use url::Url;

use crate::common::{decode_response, with_rest_headers};
use crate::config::GatewayConfig;

const STATUS_PATH: &str = "shipment/v2/status/barcode";

pub trait ShippingStatusRequestBuilder: Send + Sync + Debug {
	fn build_current_status(
		&self,
		config: &GatewayConfig,
		request: &CurrentStatusRequest,
	) -> PakketResult<ApiRequest>;
}

pub trait ShippingStatusResponseProcessor: Send + Sync + Debug {
	fn process_current_status(&self, response: &ApiResponse)
		-> PakketResult<CurrentStatusResponse>;
}

#[derive(Debug, Default)]
pub struct DefaultShippingStatusBuilder;

impl ShippingStatusRequestBuilder for DefaultShippingStatusBuilder {
	fn build_current_status(
		&self,
		config: &GatewayConfig,
		request: &CurrentStatusRequest,
	) -> PakketResult<ApiRequest> {
		request.validate()?;
		// Validation guarantees the barcode is present and non-empty
		let barcode = request.barcode.as_deref().unwrap_or_default();

		let base = Url::parse(&format!("{}/", config.endpoint(STATUS_PATH)))
			.map_err(|e| PakketError::parse(format!("endpoint URL: {e}")))?;
		let url = base
			.join(barcode)
			.map_err(|e| PakketError::parse(format!("barcode path segment: {e}")))?;

		Ok(with_rest_headers(
			ApiRequest::get(url.to_string()),
			config.api_key(),
		))
	}
}

#[derive(Debug, Default)]
pub struct DefaultShippingStatusProcessor;

impl ShippingStatusResponseProcessor for DefaultShippingStatusProcessor {
	fn process_current_status(
		&self,
		response: &ApiResponse,
	) -> PakketResult<CurrentStatusResponse> {
		decode_response(response, "CurrentStatus")
	}
}

#[derive(Debug)]
pub struct ShippingStatusGateway {
	config: GatewayConfig,
	http_client: Arc<dyn HttpClient>,
	builder: Box<dyn ShippingStatusRequestBuilder>,
	processor: Box<dyn ShippingStatusResponseProcessor>,
}

impl ShippingStatusGateway {
	pub fn new(config: GatewayConfig, http_client: Arc<dyn HttpClient>) -> Self {
		Self {
			config,
			http_client,
			builder: Box::new(DefaultShippingStatusBuilder),
			processor: Box::new(DefaultShippingStatusProcessor),
		}
	}

	pub fn set_request_builder(&mut self, builder: Box<dyn ShippingStatusRequestBuilder>) {
		self.builder = builder;
	}

	pub fn set_response_processor(&mut self, processor: Box<dyn ShippingStatusResponseProcessor>) {
		self.processor = processor;
	}

	pub async fn do_current_status_request(
		&self,
		request: &CurrentStatusRequest,
	) -> PakketResult<CurrentStatusResponse> {
		let prepared = self.builder.build_current_status(&self.config, request)?;
		let response = self.http_client.do_request(&prepared).await?;
		self.processor.process_current_status(&response)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_barcode_becomes_path_segment() {
		let config = GatewayConfig::new("key");
		let request = CurrentStatusRequest::new("3SDEVC201611210");

		let prepared = DefaultShippingStatusBuilder
			.build_current_status(&config, &request)
			.unwrap();
		assert!(prepared
			.url
			.ends_with("/shipment/v2/status/barcode/3SDEVC201611210"));
		assert_eq!(prepared.header("apikey"), Some("key"));
	}

	#[test]
	fn test_empty_barcode_fails_validation() {
		let config = GatewayConfig::new("key");
		assert!(DefaultShippingStatusBuilder
			.build_current_status(&config, &CurrentStatusRequest::new(""))
			.is_err());
	}
}
