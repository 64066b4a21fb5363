//! Timeframe service gateway
//!
//! Answers "which delivery windows exist for this address in this date
//! range". REST mode serializes the first timeframe entry of the DTO into
//! the documented query-parameter set; legacy SOAP mode wraps the same
//! fields in an envelope. The query parameters are emitted in a fixed order
//! so tests can compare the prepared URL byte for byte.

use std::fmt::Debug;
use std::sync::Arc;

use pakket_client::{ApiRequest, ApiResponse, HttpClient, ResponseCache};
use pakket_types::soap::{envelope, text_elements, UsernameToken};
use pakket_types::wire::bool_flag;
use pakket_types::{ApiMode, GetTimeframes, PakketError, PakketResult, ResponseTimeframes};
use tracing::debug;
use url::Url;

use crate::common::{cache_key, decode_response, with_rest_headers, with_soap_headers};
use crate::config::GatewayConfig;

const TIMEFRAMES_PATH: &str = "shipment/v2_1/calculate/timeframes";

/// Builds the transport request for a timeframe lookup.
pub trait TimeframeRequestBuilder: Send + Sync + Debug {
	fn build_get_timeframes(
		&self,
		config: &GatewayConfig,
		request: &GetTimeframes,
	) -> PakketResult<ApiRequest>;
}

/// Decodes the raw timeframe response.
pub trait TimeframeResponseProcessor: Send + Sync + Debug {
	fn process_get_timeframes(&self, response: &ApiResponse) -> PakketResult<ResponseTimeframes>;
}

/// Default builder covering both API modes.
#[derive(Debug, Default)]
pub struct DefaultTimeframeBuilder;

impl DefaultTimeframeBuilder {
	fn build_rest(config: &GatewayConfig, request: &GetTimeframes) -> PakketResult<ApiRequest> {
		// Validation guarantees the entry exists
		let timeframe = &request.timeframes[0];

		let mut url = Url::parse(&config.endpoint(TIMEFRAMES_PATH))
			.map_err(|e| PakketError::parse(format!("endpoint URL: {e}")))?;
		{
			let mut query = url.query_pairs_mut();
			query.append_pair(
				"AllowSundaySorting",
				bool_flag(timeframe.sunday_sorting.unwrap_or(false)),
			);
			if let Some(start_date) = &timeframe.start_date {
				query.append_pair("StartDate", start_date);
			}
			if let Some(end_date) = &timeframe.end_date {
				query.append_pair("EndDate", end_date);
			}
			if let Some(postal_code) = &timeframe.postal_code {
				query.append_pair("PostalCode", postal_code);
			}
			if let Some(house_nr) = &timeframe.house_nr {
				query.append_pair("HouseNumber", house_nr);
			}
			if let Some(country_code) = &timeframe.country_code {
				query.append_pair("CountryCode", country_code);
			}
			for option in &timeframe.options {
				query.append_pair("Options", option);
			}
			if let Some(house_nr_ext) = &timeframe.house_nr_ext {
				query.append_pair("HouseNrExt", house_nr_ext);
			}
			if let Some(street) = &timeframe.street {
				query.append_pair("Street", street);
			}
			if let Some(city) = &timeframe.city {
				query.append_pair("City", city);
			}
		}

		Ok(with_rest_headers(
			ApiRequest::get(url.to_string()),
			config.api_key(),
		))
	}

	fn build_soap(config: &GatewayConfig, request: &GetTimeframes) -> PakketResult<ApiRequest> {
		let timeframe = &request.timeframes[0];
		let options = timeframe.options.join(",");

		let mut body = String::from("<GetTimeframes><Timeframe>");
		body.push_str(&text_elements(&[
			("AllowSundaySorting", Some(bool_flag(timeframe.sunday_sorting.unwrap_or(false)))),
			("StartDate", timeframe.start_date.as_deref()),
			("EndDate", timeframe.end_date.as_deref()),
			("PostalCode", timeframe.postal_code.as_deref()),
			("HouseNumber", timeframe.house_nr.as_deref()),
			("CountryCode", timeframe.country_code.as_deref()),
			(
				"Options",
				if options.is_empty() { None } else { Some(options.as_str()) },
			),
			("HouseNrExt", timeframe.house_nr_ext.as_deref()),
			("Street", timeframe.street.as_deref()),
			("City", timeframe.city.as_deref()),
		]));
		body.push_str("</Timeframe></GetTimeframes>");

		let token = UsernameToken::new("", config.api_key().expose_secret());
		Ok(with_soap_headers(
			ApiRequest::post(config.endpoint(TIMEFRAMES_PATH), envelope(&body, &token)),
			config.api_key(),
		))
	}
}

impl TimeframeRequestBuilder for DefaultTimeframeBuilder {
	fn build_get_timeframes(
		&self,
		config: &GatewayConfig,
		request: &GetTimeframes,
	) -> PakketResult<ApiRequest> {
		request.validate()?;
		match config.mode() {
			ApiMode::Rest => Self::build_rest(config, request),
			ApiMode::Soap => Self::build_soap(config, request),
		}
	}
}

/// Default processor: error-shape check, then typed decode.
#[derive(Debug, Default)]
pub struct DefaultTimeframeProcessor;

impl TimeframeResponseProcessor for DefaultTimeframeProcessor {
	fn process_get_timeframes(&self, response: &ApiResponse) -> PakketResult<ResponseTimeframes> {
		decode_response(response, "GetTimeframes")
	}
}

/// Orchestrates one timeframe round trip. Builder and processor are
/// swappable at runtime so alternative API versions can be slotted in
/// without touching the gateway's contract.
#[derive(Debug)]
pub struct TimeframeGateway {
	config: GatewayConfig,
	http_client: Arc<dyn HttpClient>,
	cache: Option<Arc<dyn ResponseCache>>,
	builder: Box<dyn TimeframeRequestBuilder>,
	processor: Box<dyn TimeframeResponseProcessor>,
}

impl TimeframeGateway {
	pub fn new(config: GatewayConfig, http_client: Arc<dyn HttpClient>) -> Self {
		Self {
			config,
			http_client,
			cache: None,
			builder: Box::new(DefaultTimeframeBuilder),
			processor: Box::new(DefaultTimeframeProcessor),
		}
	}

	pub fn with_cache(mut self, cache: Arc<dyn ResponseCache>) -> Self {
		self.cache = Some(cache);
		self
	}

	pub fn set_request_builder(&mut self, builder: Box<dyn TimeframeRequestBuilder>) {
		self.builder = builder;
	}

	pub fn set_response_processor(&mut self, processor: Box<dyn TimeframeResponseProcessor>) {
		self.processor = processor;
	}

	/// Fetch the available timeframes for the request's address and range.
	pub async fn do_get_timeframes_request(
		&self,
		request: &GetTimeframes,
	) -> PakketResult<ResponseTimeframes> {
		let prepared = self.builder.build_get_timeframes(&self.config, request)?;

		if let Some(cache) = &self.cache {
			if let Some(body) = cache.get(&cache_key(&prepared)) {
				debug!("Timeframe response served from cache");
				return self
					.processor
					.process_get_timeframes(&ApiResponse::new(200, body));
			}
		}

		let response = self.http_client.do_request(&prepared).await?;
		let processed = self.processor.process_get_timeframes(&response)?;

		if let Some(cache) = &self.cache {
			cache.set(&cache_key(&prepared), response.body.clone());
		}

		Ok(processed)
	}
}
