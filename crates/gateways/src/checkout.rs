//! Checkout service gateway
//!
//! One POST answers everything a webshop checkout needs in a single round
//! trip: delivery options, pickup locations and any warnings about the
//! requested window.

use std::fmt::Debug;
use std::sync::Arc;

use pakket_client::{ApiRequest, ApiResponse, HttpClient};
use pakket_types::{
	GetDeliveryInformationRequest, GetDeliveryInformationResponse, PakketError, PakketResult,
};

use crate::common::{decode_response, with_rest_headers};
use crate::config::GatewayConfig;

const CHECKOUT_PATH: &str = "shipment/v1/checkout";

pub trait CheckoutRequestBuilder: Send + Sync + Debug {
	fn build_get_delivery_information(
		&self,
		config: &GatewayConfig,
		request: &GetDeliveryInformationRequest,
	) -> PakketResult<ApiRequest>;
}

pub trait CheckoutResponseProcessor: Send + Sync + Debug {
	fn process_get_delivery_information(
		&self,
		response: &ApiResponse,
	) -> PakketResult<GetDeliveryInformationResponse>;
}

#[derive(Debug, Default)]
pub struct DefaultCheckoutBuilder;

impl CheckoutRequestBuilder for DefaultCheckoutBuilder {
	fn build_get_delivery_information(
		&self,
		config: &GatewayConfig,
		request: &GetDeliveryInformationRequest,
	) -> PakketResult<ApiRequest> {
		request.validate()?;

		let body = serde_json::to_string(request)
			.map_err(|e| PakketError::parse(format!("GetDeliveryInformation body: {e}")))?;

		Ok(with_rest_headers(
			ApiRequest::post(config.endpoint(CHECKOUT_PATH), body)
				.with_header("Content-Type", "application/json"),
			config.api_key(),
		))
	}
}

#[derive(Debug, Default)]
pub struct DefaultCheckoutProcessor;

impl CheckoutResponseProcessor for DefaultCheckoutProcessor {
	fn process_get_delivery_information(
		&self,
		response: &ApiResponse,
	) -> PakketResult<GetDeliveryInformationResponse> {
		decode_response(response, "GetDeliveryInformation")
	}
}

/// Checkout responses depend on the moment the order is placed, so this
/// gateway does not take a cache.
#[derive(Debug)]
pub struct CheckoutGateway {
	config: GatewayConfig,
	http_client: Arc<dyn HttpClient>,
	builder: Box<dyn CheckoutRequestBuilder>,
	processor: Box<dyn CheckoutResponseProcessor>,
}

impl CheckoutGateway {
	pub fn new(config: GatewayConfig, http_client: Arc<dyn HttpClient>) -> Self {
		Self {
			config,
			http_client,
			builder: Box::new(DefaultCheckoutBuilder),
			processor: Box::new(DefaultCheckoutProcessor),
		}
	}

	pub fn set_request_builder(&mut self, builder: Box<dyn CheckoutRequestBuilder>) {
		self.builder = builder;
	}

	pub fn set_response_processor(&mut self, processor: Box<dyn CheckoutResponseProcessor>) {
		self.processor = processor;
	}

	pub async fn do_get_delivery_information_request(
		&self,
		request: &GetDeliveryInformationRequest,
	) -> PakketResult<GetDeliveryInformationResponse> {
		let prepared = self
			.builder
			.build_get_delivery_information(&self.config, request)?;
		let response = self.http_client.do_request(&prepared).await?;
		self.processor.process_get_delivery_information(&response)
	}
}
