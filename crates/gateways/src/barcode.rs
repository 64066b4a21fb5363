//! Barcode service gateway

use std::fmt::Debug;
use std::sync::Arc;

use pakket_client::{ApiRequest, ApiResponse, HttpClient};
use pakket_types::{GenerateBarcodeRequest, GenerateBarcodeResponse, PakketError, PakketResult};
use url::Url;

use crate::common::{decode_response, with_rest_headers};
use crate::config::GatewayConfig;

const BARCODE_PATH: &str = "shipment/v1_1/barcode";

pub trait BarcodeRequestBuilder: Send + Sync + Debug {
	fn build_generate_barcode(
		&self,
		config: &GatewayConfig,
		request: &GenerateBarcodeRequest,
	) -> PakketResult<ApiRequest>;
}

pub trait BarcodeResponseProcessor: Send + Sync + Debug {
	fn process_generate_barcode(
		&self,
		response: &ApiResponse,
	) -> PakketResult<GenerateBarcodeResponse>;
}

#[derive(Debug, Default)]
pub struct DefaultBarcodeBuilder;

impl BarcodeRequestBuilder for DefaultBarcodeBuilder {
	fn build_generate_barcode(
		&self,
		config: &GatewayConfig,
		request: &GenerateBarcodeRequest,
	) -> PakketResult<ApiRequest> {
		request.validate()?;

		let mut url = Url::parse(&config.endpoint(BARCODE_PATH))
			.map_err(|e| PakketError::parse(format!("endpoint URL: {e}")))?;
		{
			let mut query = url.query_pairs_mut();
			// Validation guarantees all four are present
			if let Some(customer_code) = &request.customer_code {
				query.append_pair("CustomerCode", customer_code);
			}
			if let Some(customer_number) = &request.customer_number {
				query.append_pair("CustomerNumber", customer_number);
			}
			if let Some(barcode_type) = &request.barcode_type {
				query.append_pair("Type", barcode_type);
			}
			if let Some(serie) = &request.serie {
				query.append_pair("Serie", serie);
			}
		}

		Ok(with_rest_headers(
			ApiRequest::get(url.to_string()),
			config.api_key(),
		))
	}
}

#[derive(Debug, Default)]
pub struct DefaultBarcodeProcessor;

impl BarcodeResponseProcessor for DefaultBarcodeProcessor {
	fn process_generate_barcode(
		&self,
		response: &ApiResponse,
	) -> PakketResult<GenerateBarcodeResponse> {
		decode_response(response, "GenerateBarcode")
	}
}

#[derive(Debug)]
pub struct BarcodeGateway {
	config: GatewayConfig,
	http_client: Arc<dyn HttpClient>,
	builder: Box<dyn BarcodeRequestBuilder>,
	processor: Box<dyn BarcodeResponseProcessor>,
}

impl BarcodeGateway {
	pub fn new(config: GatewayConfig, http_client: Arc<dyn HttpClient>) -> Self {
		Self {
			config,
			http_client,
			builder: Box::new(DefaultBarcodeBuilder),
			processor: Box::new(DefaultBarcodeProcessor),
		}
	}

	pub fn set_request_builder(&mut self, builder: Box<dyn BarcodeRequestBuilder>) {
		self.builder = builder;
	}

	pub fn set_response_processor(&mut self, processor: Box<dyn BarcodeResponseProcessor>) {
		self.processor = processor;
	}

	/// Reserve the next barcode in the customer's serie.
	pub async fn do_generate_barcode_request(
		&self,
		request: &GenerateBarcodeRequest,
	) -> PakketResult<GenerateBarcodeResponse> {
		let prepared = self.builder.build_generate_barcode(&self.config, request)?;
		let response = self.http_client.do_request(&prepared).await?;
		self.processor.process_generate_barcode(&response)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_query_carries_customer_and_serie() {
		let config = GatewayConfig::new("key");
		let request = GenerateBarcodeRequest::new("3S", "000000000-999999999")
			.with_customer_code("DEVC")
			.with_customer_number("11223344");

		let prepared = DefaultBarcodeBuilder
			.build_generate_barcode(&config, &request)
			.unwrap();
		let url = Url::parse(&prepared.url).unwrap();
		let pairs: Vec<(String, String)> = url
			.query_pairs()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();

		assert_eq!(
			pairs,
			vec![
				("CustomerCode".to_string(), "DEVC".to_string()),
				("CustomerNumber".to_string(), "11223344".to_string()),
				("Type".to_string(), "3S".to_string()),
				("Serie".to_string(), "000000000-999999999".to_string()),
			]
		);
	}

	#[test]
	fn test_missing_customer_fails_validation() {
		let config = GatewayConfig::new("key");
		let request = GenerateBarcodeRequest::new("3S", "000000000-999999999");
		assert!(DefaultBarcodeBuilder
			.build_generate_barcode(&config, &request)
			.is_err());
	}
}
