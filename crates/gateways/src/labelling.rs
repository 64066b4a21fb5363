//! Labelling service gateway
//!
//! Generates shipping labels, either one request at a time or as a keyed
//! batch dispatched concurrently through the transport. Batch results are
//! isolated per key: one failing request never aborts the rest, its error
//! is captured under its key instead.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use pakket_client::{ApiRequest, ApiResponse, HttpClient};
use pakket_types::wire::bool_flag;
use pakket_types::{GenerateLabelRequest, GenerateLabelResponse, PakketError, PakketResult};
use tracing::debug;
use url::Url;

use crate::common::{decode_response, with_rest_headers};
use crate::config::GatewayConfig;

const LABEL_PATH: &str = "shipment/v2_2/label";

pub trait LabellingRequestBuilder: Send + Sync + Debug {
	fn build_generate_label(
		&self,
		config: &GatewayConfig,
		request: &GenerateLabelRequest,
	) -> PakketResult<ApiRequest>;
}

pub trait LabellingResponseProcessor: Send + Sync + Debug {
	fn process_generate_label(&self, response: &ApiResponse)
		-> PakketResult<GenerateLabelResponse>;
}

#[derive(Debug, Default)]
pub struct DefaultLabellingBuilder;

impl LabellingRequestBuilder for DefaultLabellingBuilder {
	fn build_generate_label(
		&self,
		config: &GatewayConfig,
		request: &GenerateLabelRequest,
	) -> PakketResult<ApiRequest> {
		request.validate()?;

		// Confirm travels as a query parameter, not in the body
		let mut url = Url::parse(&config.endpoint(LABEL_PATH))
			.map_err(|e| PakketError::parse(format!("endpoint URL: {e}")))?;
		url.query_pairs_mut()
			.append_pair("confirm", bool_flag(request.confirm));

		let body = serde_json::to_string(request)
			.map_err(|e| PakketError::parse(format!("GenerateLabel body: {e}")))?;

		Ok(with_rest_headers(
			ApiRequest::post(url.to_string(), body).with_header("Content-Type", "application/json"),
			config.api_key(),
		))
	}
}

#[derive(Debug, Default)]
pub struct DefaultLabellingProcessor;

impl LabellingResponseProcessor for DefaultLabellingProcessor {
	fn process_generate_label(
		&self,
		response: &ApiResponse,
	) -> PakketResult<GenerateLabelResponse> {
		decode_response(response, "GenerateLabel")
	}
}

#[derive(Debug)]
pub struct LabellingGateway {
	config: GatewayConfig,
	http_client: Arc<dyn HttpClient>,
	builder: Box<dyn LabellingRequestBuilder>,
	processor: Box<dyn LabellingResponseProcessor>,
}

impl LabellingGateway {
	pub fn new(config: GatewayConfig, http_client: Arc<dyn HttpClient>) -> Self {
		Self {
			config,
			http_client,
			builder: Box::new(DefaultLabellingBuilder),
			processor: Box::new(DefaultLabellingProcessor),
		}
	}

	pub fn set_request_builder(&mut self, builder: Box<dyn LabellingRequestBuilder>) {
		self.builder = builder;
	}

	pub fn set_response_processor(&mut self, processor: Box<dyn LabellingResponseProcessor>) {
		self.processor = processor;
	}

	pub async fn do_generate_label_request(
		&self,
		request: &GenerateLabelRequest,
	) -> PakketResult<GenerateLabelResponse> {
		let prepared = self.builder.build_generate_label(&self.config, request)?;
		let response = self.http_client.do_request(&prepared).await?;
		self.processor.process_generate_label(&response)
	}

	/// Generate labels for a keyed batch of requests.
	///
	/// A request that fails to build is captured under its key without
	/// dispatching; the rest of the batch still goes out. Transport and
	/// processing failures are likewise captured per key.
	pub async fn do_generate_labels_request(
		&self,
		requests: HashMap<String, GenerateLabelRequest>,
	) -> HashMap<String, PakketResult<GenerateLabelResponse>> {
		let mut results = HashMap::new();
		let mut prepared = HashMap::new();

		for (id, request) in &requests {
			match self.builder.build_generate_label(&self.config, request) {
				Ok(api_request) => {
					prepared.insert(id.clone(), api_request);
				},
				Err(e) => {
					debug!("Label request {id} failed to build: {e}");
					results.insert(id.clone(), Err(e));
				},
			}
		}

		let responses = self.http_client.do_requests(prepared).await;
		for (id, response) in responses {
			let result = response.and_then(|r| self.processor.process_generate_label(&r));
			results.insert(id, result);
		}

		results
	}
}
