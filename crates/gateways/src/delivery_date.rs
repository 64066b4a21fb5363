//! Delivery date service gateway
//!
//! Two calculations share one gateway: the forward one (given a shipping
//! date, when does the parcel arrive) and the reverse one (given a promised
//! delivery date, when must it leave the warehouse).

use std::fmt::Debug;
use std::sync::Arc;

use pakket_client::{ApiRequest, ApiResponse, HttpClient, ResponseCache};
use pakket_types::{
	CalculateDeliveryDateRequest, CalculateDeliveryDateResponse, CalculateShippingDateRequest,
	CalculateShippingDateResponse, PakketError, PakketResult,
};
use tracing::debug;
use url::Url;

use crate::common::{cache_key, decode_response, with_rest_headers};
use crate::config::GatewayConfig;

const DELIVERY_DATE_PATH: &str = "shipment/v2_2/calculate/date/delivery";
const SHIPPING_DATE_PATH: &str = "shipment/v2_2/calculate/date/shipping";

pub trait DeliveryDateRequestBuilder: Send + Sync + Debug {
	fn build_calculate_delivery_date(
		&self,
		config: &GatewayConfig,
		request: &CalculateDeliveryDateRequest,
	) -> PakketResult<ApiRequest>;

	fn build_calculate_shipping_date(
		&self,
		config: &GatewayConfig,
		request: &CalculateShippingDateRequest,
	) -> PakketResult<ApiRequest>;
}

pub trait DeliveryDateResponseProcessor: Send + Sync + Debug {
	fn process_calculate_delivery_date(
		&self,
		response: &ApiResponse,
	) -> PakketResult<CalculateDeliveryDateResponse>;

	fn process_calculate_shipping_date(
		&self,
		response: &ApiResponse,
	) -> PakketResult<CalculateShippingDateResponse>;
}

#[derive(Debug, Default)]
pub struct DefaultDeliveryDateBuilder;

impl DeliveryDateRequestBuilder for DefaultDeliveryDateBuilder {
	fn build_calculate_delivery_date(
		&self,
		config: &GatewayConfig,
		request: &CalculateDeliveryDateRequest,
	) -> PakketResult<ApiRequest> {
		request.validate()?;

		let mut url = Url::parse(&config.endpoint(DELIVERY_DATE_PATH))
			.map_err(|e| PakketError::parse(format!("endpoint URL: {e}")))?;
		{
			let mut query = url.query_pairs_mut();
			if let Some(shipping_date) = &request.shipping_date {
				query.append_pair("ShippingDate", shipping_date);
			}
			if let Some(shipping_duration) = &request.shipping_duration {
				query.append_pair("ShippingDuration", shipping_duration);
			}
			if let Some(cut_off_time) = &request.cut_off_time {
				query.append_pair("CutOffTime", cut_off_time);
			}
			if let Some(postal_code) = &request.postal_code {
				query.append_pair("PostalCode", postal_code);
			}
			if let Some(country_code) = &request.country_code {
				query.append_pair("CountryCode", country_code);
			}
			if let Some(origin_country_code) = &request.origin_country_code {
				query.append_pair("OriginCountryCode", origin_country_code);
			}
			if let Some(city) = &request.city {
				query.append_pair("City", city);
			}
			if let Some(street) = &request.street {
				query.append_pair("Street", street);
			}
			if let Some(house_nr) = &request.house_nr {
				query.append_pair("HouseNr", house_nr);
			}
			if let Some(house_nr_ext) = &request.house_nr_ext {
				query.append_pair("HouseNrExt", house_nr_ext);
			}
			for option in &request.options {
				query.append_pair("Options", option);
			}
			// Per-day cutoffs are flattened into keyed parameters
			for cut_off in &request.cut_off_times {
				if let (Some(day), Some(time)) = (&cut_off.day, &cut_off.time) {
					query.append_pair(&format!("CutOffTime{day}"), time);
					if let Some(available) = cut_off.available {
						query.append_pair(
							&format!("Available{day}"),
							if available { "true" } else { "false" },
						);
					}
				}
			}
		}

		Ok(with_rest_headers(
			ApiRequest::get(url.to_string()),
			config.api_key(),
		))
	}

	fn build_calculate_shipping_date(
		&self,
		config: &GatewayConfig,
		request: &CalculateShippingDateRequest,
	) -> PakketResult<ApiRequest> {
		request.validate()?;

		let mut url = Url::parse(&config.endpoint(SHIPPING_DATE_PATH))
			.map_err(|e| PakketError::parse(format!("endpoint URL: {e}")))?;
		{
			let mut query = url.query_pairs_mut();
			if let Some(delivery_date) = &request.delivery_date {
				query.append_pair("DeliveryDate", delivery_date);
			}
			if let Some(shipping_duration) = &request.shipping_duration {
				query.append_pair("ShippingDuration", shipping_duration);
			}
			if let Some(postal_code) = &request.postal_code {
				query.append_pair("PostalCode", postal_code);
			}
			if let Some(country_code) = &request.country_code {
				query.append_pair("CountryCode", country_code);
			}
			if let Some(origin_country_code) = &request.origin_country_code {
				query.append_pair("OriginCountryCode", origin_country_code);
			}
			if let Some(city) = &request.city {
				query.append_pair("City", city);
			}
			if let Some(street) = &request.street {
				query.append_pair("Street", street);
			}
			if let Some(house_nr) = &request.house_nr {
				query.append_pair("HouseNr", house_nr);
			}
			if let Some(house_nr_ext) = &request.house_nr_ext {
				query.append_pair("HouseNrExt", house_nr_ext);
			}
		}

		Ok(with_rest_headers(
			ApiRequest::get(url.to_string()),
			config.api_key(),
		))
	}
}

#[derive(Debug, Default)]
pub struct DefaultDeliveryDateProcessor;

impl DeliveryDateResponseProcessor for DefaultDeliveryDateProcessor {
	fn process_calculate_delivery_date(
		&self,
		response: &ApiResponse,
	) -> PakketResult<CalculateDeliveryDateResponse> {
		decode_response(response, "CalculateDeliveryDate")
	}

	fn process_calculate_shipping_date(
		&self,
		response: &ApiResponse,
	) -> PakketResult<CalculateShippingDateResponse> {
		decode_response(response, "CalculateShippingDate")
	}
}

#[derive(Debug)]
pub struct DeliveryDateGateway {
	config: GatewayConfig,
	http_client: Arc<dyn HttpClient>,
	cache: Option<Arc<dyn ResponseCache>>,
	builder: Box<dyn DeliveryDateRequestBuilder>,
	processor: Box<dyn DeliveryDateResponseProcessor>,
}

impl DeliveryDateGateway {
	pub fn new(config: GatewayConfig, http_client: Arc<dyn HttpClient>) -> Self {
		Self {
			config,
			http_client,
			cache: None,
			builder: Box::new(DefaultDeliveryDateBuilder),
			processor: Box::new(DefaultDeliveryDateProcessor),
		}
	}

	pub fn with_cache(mut self, cache: Arc<dyn ResponseCache>) -> Self {
		self.cache = Some(cache);
		self
	}

	pub fn set_request_builder(&mut self, builder: Box<dyn DeliveryDateRequestBuilder>) {
		self.builder = builder;
	}

	pub fn set_response_processor(&mut self, processor: Box<dyn DeliveryDateResponseProcessor>) {
		self.processor = processor;
	}

	pub async fn do_calculate_delivery_date_request(
		&self,
		request: &CalculateDeliveryDateRequest,
	) -> PakketResult<CalculateDeliveryDateResponse> {
		let prepared = self
			.builder
			.build_calculate_delivery_date(&self.config, request)?;

		if let Some(cache) = &self.cache {
			if let Some(body) = cache.get(&cache_key(&prepared)) {
				debug!("Delivery date served from cache");
				return self
					.processor
					.process_calculate_delivery_date(&ApiResponse::new(200, body));
			}
		}

		let response = self.http_client.do_request(&prepared).await?;
		let processed = self.processor.process_calculate_delivery_date(&response)?;

		if let Some(cache) = &self.cache {
			cache.set(&cache_key(&prepared), response.body.clone());
		}

		Ok(processed)
	}

	pub async fn do_calculate_shipping_date_request(
		&self,
		request: &CalculateShippingDateRequest,
	) -> PakketResult<CalculateShippingDateResponse> {
		let prepared = self
			.builder
			.build_calculate_shipping_date(&self.config, request)?;

		if let Some(cache) = &self.cache {
			if let Some(body) = cache.get(&cache_key(&prepared)) {
				debug!("Shipping date served from cache");
				return self
					.processor
					.process_calculate_shipping_date(&ApiResponse::new(200, body));
			}
		}

		let response = self.http_client.do_request(&prepared).await?;
		let processed = self.processor.process_calculate_shipping_date(&response)?;

		if let Some(cache) = &self.cache {
			cache.set(&cache_key(&prepared), response.body.clone());
		}

		Ok(processed)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pakket_types::CutOffTime;

	#[test]
	fn test_delivery_date_query_includes_set_fields_only() {
		let config = GatewayConfig::new("key");
		let request = CalculateDeliveryDateRequest::new()
			.with_shipping_date("29-06-2016 14:00:00")
			.with_shipping_duration("1")
			.with_postal_code("2132WT")
			.with_country_code("NL")
			.with_options(vec!["Daytime".to_string(), "Evening".to_string()]);

		let prepared = DefaultDeliveryDateBuilder
			.build_calculate_delivery_date(&config, &request)
			.unwrap();
		let url = Url::parse(&prepared.url).unwrap();
		let pairs: Vec<(String, String)> = url
			.query_pairs()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();

		assert_eq!(
			pairs,
			vec![
				("ShippingDate".to_string(), "29-06-2016 14:00:00".to_string()),
				("ShippingDuration".to_string(), "1".to_string()),
				("PostalCode".to_string(), "2132WT".to_string()),
				("CountryCode".to_string(), "NL".to_string()),
				("Options".to_string(), "Daytime".to_string()),
				("Options".to_string(), "Evening".to_string()),
			]
		);
	}

	#[test]
	fn test_per_day_cutoffs_flatten_into_keyed_parameters() {
		let config = GatewayConfig::new("key");
		let request = CalculateDeliveryDateRequest::new()
			.with_shipping_date("29-06-2016 14:00:00")
			.with_postal_code("2132WT")
			.with_cut_off_times(vec![CutOffTime::new("Monday", true, "15:00:00")]);

		let prepared = DefaultDeliveryDateBuilder
			.build_calculate_delivery_date(&config, &request)
			.unwrap();
		let url = Url::parse(&prepared.url).unwrap();
		let pairs: Vec<(String, String)> = url
			.query_pairs()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();

		assert!(pairs.contains(&("CutOffTimeMonday".to_string(), "15:00:00".to_string())));
		assert!(pairs.contains(&("AvailableMonday".to_string(), "true".to_string())));
	}

	#[test]
	fn test_shipping_date_uses_reverse_endpoint() {
		let config = GatewayConfig::new("key");
		let request = CalculateShippingDateRequest::new()
			.with_delivery_date("01-07-2016")
			.with_postal_code("2132WT");

		let prepared = DefaultDeliveryDateBuilder
			.build_calculate_shipping_date(&config, &request)
			.unwrap();
		assert!(prepared.url.contains("calculate/date/shipping"));
		assert!(prepared.url.contains("DeliveryDate=01-07-2016"));
	}

	#[test]
	fn test_invalid_requests_never_reach_the_wire() {
		let config = GatewayConfig::new("key");
		assert!(DefaultDeliveryDateBuilder
			.build_calculate_delivery_date(&config, &CalculateDeliveryDateRequest::new())
			.is_err());
		assert!(DefaultDeliveryDateBuilder
			.build_calculate_shipping_date(&config, &CalculateShippingDateRequest::new())
			.is_err());
	}
}
