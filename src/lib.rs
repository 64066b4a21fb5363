//! Pakket — typed client for the Pakketdienst shipping API
//!
//! One [`Pakket`] instance wires every service gateway to a shared
//! transport: timeframe lookups, delivery and shipping date calculation,
//! checkout delivery information, barcode reservation, label generation
//! (single and batched) and shipment tracking.
//!
//! ```rust,no_run
//! use pakket::{Pakket, GetTimeframes, Timeframe, Service, PropType};
//!
//! # async fn example() -> pakket::PakketResult<()> {
//! let client = Pakket::builder("my-api-key").with_sandbox(true).build();
//!
//! let request = GetTimeframes::new(vec![
//!     Timeframe::new(Service::Timeframe, PropType::Request)
//!         .with_postal_code("2132WT")
//!         .with_house_nr("42")
//!         .with_start_date("30-06-2016")
//!         .with_end_date("02-07-2016"),
//! ]);
//! let response = client.get_timeframes(&request).await?;
//! for timeframe in response.timeframes() {
//!     println!("{:?}", timeframe.date);
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

// Core domain types
pub use pakket_types::{
	// External dependency for convenience
	serde_json,
	ApiMode,
	// Error taxonomy
	PakketError,
	PakketResult,
	PropType,
	SecretString,
	Service,
};

// Entities
pub use pakket_types::{
	Address, Area, Content, Coordinates, Customer, CutOffTime, Dimension, Label, Message,
	ReasonNoTimeframe, ResponseShipment, Shipment, Timeframe, TimeframeTimeFrame, Warning,
};

// Request and response DTOs
pub use pakket_types::{
	CalculateDeliveryDateRequest, CalculateDeliveryDateResponse, CalculateShippingDateRequest,
	CalculateShippingDateResponse, CurrentStatusRequest, CurrentStatusResponse,
	GenerateBarcodeRequest, GenerateBarcodeResponse, GenerateLabelRequest, GenerateLabelResponse,
	GetDeliveryInformationRequest, GetDeliveryInformationResponse, GetTimeframes,
	ResponseTimeframes,
};

// Transport layer
pub use pakket_client::{
	async_trait, ApiRequest, ApiResponse, HttpClient, InMemoryCache, Method, ReqwestHttpClient,
	ResponseCache,
};

// Gateways, for callers that wire their own builders or processors
pub use pakket_gateways::{
	BarcodeGateway, CheckoutGateway, DeliveryDateGateway, GatewayConfig, LabellingGateway,
	ShippingStatusGateway, TimeframeGateway,
};

/// Module aliases for advanced usage
pub mod types {
	pub use pakket_types::*;
}

pub mod gateways {
	pub use pakket_gateways::*;
}

/// Builder for configuring a [`Pakket`] client.
pub struct PakketBuilder {
	api_key: SecretString,
	sandbox: bool,
	mode: ApiMode,
	customer: Option<Customer>,
	http_client: Option<Arc<dyn HttpClient>>,
	cache: Option<Arc<dyn ResponseCache>>,
	concurrency: Option<usize>,
}

impl PakketBuilder {
	pub fn new(api_key: impl Into<SecretString>) -> Self {
		Self {
			api_key: api_key.into(),
			sandbox: false,
			mode: ApiMode::Rest,
			customer: None,
			http_client: None,
			cache: None,
			concurrency: None,
		}
	}

	/// Route all traffic to the provider's sandbox environment.
	pub fn with_sandbox(mut self, sandbox: bool) -> Self {
		self.sandbox = sandbox;
		self
	}

	pub fn with_mode(mut self, mode: ApiMode) -> Self {
		self.mode = mode;
		self
	}

	/// Default customer used by the barcode and label convenience methods.
	pub fn with_customer(mut self, customer: Customer) -> Self {
		self.customer = Some(customer);
		self
	}

	/// Inject a custom transport, mainly for testing.
	pub fn with_http_client(mut self, http_client: Arc<dyn HttpClient>) -> Self {
		self.http_client = Some(http_client);
		self
	}

	/// Cache timeframe and date lookups through the given cache.
	pub fn with_cache(mut self, cache: Arc<dyn ResponseCache>) -> Self {
		self.cache = Some(cache);
		self
	}

	/// Concurrency ceiling for batched requests on the default transport.
	/// Ignored when a custom transport is injected.
	pub fn with_concurrency(mut self, concurrency: usize) -> Self {
		self.concurrency = Some(concurrency);
		self
	}

	pub fn build(self) -> Pakket {
		let http_client: Arc<dyn HttpClient> = match self.http_client {
			Some(client) => client,
			None => match self.concurrency {
				Some(n) => Arc::new(ReqwestHttpClient::with_concurrency(n)),
				None => Arc::new(ReqwestHttpClient::new()),
			},
		};

		let config = GatewayConfig::new(self.api_key)
			.with_sandbox(self.sandbox)
			.with_mode(self.mode);

		info!(
			sandbox = self.sandbox,
			concurrency = http_client.concurrency(),
			"Pakket client configured"
		);

		let mut timeframes = TimeframeGateway::new(config.clone(), http_client.clone());
		let mut delivery_date = DeliveryDateGateway::new(config.clone(), http_client.clone());
		if let Some(cache) = &self.cache {
			timeframes = timeframes.with_cache(cache.clone());
			delivery_date = delivery_date.with_cache(cache.clone());
		}

		Pakket {
			customer: self.customer,
			timeframes,
			delivery_date,
			checkout: CheckoutGateway::new(config.clone(), http_client.clone()),
			barcode: BarcodeGateway::new(config.clone(), http_client.clone()),
			labelling: LabellingGateway::new(config.clone(), http_client.clone()),
			shipping_status: ShippingStatusGateway::new(config, http_client),
		}
	}
}

/// The Pakketdienst API client: every service gateway behind one facade.
pub struct Pakket {
	customer: Option<Customer>,
	timeframes: TimeframeGateway,
	delivery_date: DeliveryDateGateway,
	checkout: CheckoutGateway,
	barcode: BarcodeGateway,
	labelling: LabellingGateway,
	shipping_status: ShippingStatusGateway,
}

impl Pakket {
	pub fn builder(api_key: impl Into<SecretString>) -> PakketBuilder {
		PakketBuilder::new(api_key)
	}

	/// The default customer, when one was configured.
	pub fn customer(&self) -> Option<&Customer> {
		self.customer.as_ref()
	}

	/// Available delivery timeframes for an address and date range.
	pub async fn get_timeframes(
		&self,
		request: &GetTimeframes,
	) -> PakketResult<ResponseTimeframes> {
		self.timeframes.do_get_timeframes_request(request).await
	}

	/// Expected delivery date for a parcel shipped on a given date.
	pub async fn calculate_delivery_date(
		&self,
		request: &CalculateDeliveryDateRequest,
	) -> PakketResult<CalculateDeliveryDateResponse> {
		self.delivery_date
			.do_calculate_delivery_date_request(request)
			.await
	}

	/// Latest shipping date that still meets a promised delivery date.
	pub async fn calculate_shipping_date(
		&self,
		request: &CalculateShippingDateRequest,
	) -> PakketResult<CalculateShippingDateResponse> {
		self.delivery_date
			.do_calculate_shipping_date_request(request)
			.await
	}

	/// Delivery options, pickup locations and warnings for a checkout.
	pub async fn get_delivery_information(
		&self,
		request: &GetDeliveryInformationRequest,
	) -> PakketResult<GetDeliveryInformationResponse> {
		self.checkout
			.do_get_delivery_information_request(request)
			.await
	}

	/// Reserve the next barcode in the configured customer's serie.
	///
	/// Fills in the customer code and number from the configured customer
	/// when the request leaves them unset.
	pub async fn generate_barcode(
		&self,
		request: &GenerateBarcodeRequest,
	) -> PakketResult<GenerateBarcodeResponse> {
		let request = self.with_default_customer_ids(request.clone());
		self.barcode.do_generate_barcode_request(&request).await
	}

	/// Generate labels for one request.
	pub async fn generate_label(
		&self,
		request: &GenerateLabelRequest,
	) -> PakketResult<GenerateLabelResponse> {
		self.labelling.do_generate_label_request(request).await
	}

	/// Generate labels for a keyed batch, with per-key error isolation.
	pub async fn generate_labels(
		&self,
		requests: HashMap<String, GenerateLabelRequest>,
	) -> HashMap<String, PakketResult<GenerateLabelResponse>> {
		self.labelling.do_generate_labels_request(requests).await
	}

	/// Current tracking status for a barcode.
	pub async fn current_status(
		&self,
		request: &CurrentStatusRequest,
	) -> PakketResult<CurrentStatusResponse> {
		self.shipping_status.do_current_status_request(request).await
	}

	/// Direct access to the gateways, for swapping builders or processors.
	pub fn timeframe_gateway_mut(&mut self) -> &mut TimeframeGateway {
		&mut self.timeframes
	}

	pub fn delivery_date_gateway_mut(&mut self) -> &mut DeliveryDateGateway {
		&mut self.delivery_date
	}

	pub fn checkout_gateway_mut(&mut self) -> &mut CheckoutGateway {
		&mut self.checkout
	}

	pub fn barcode_gateway_mut(&mut self) -> &mut BarcodeGateway {
		&mut self.barcode
	}

	pub fn labelling_gateway_mut(&mut self) -> &mut LabellingGateway {
		&mut self.labelling
	}

	pub fn shipping_status_gateway_mut(&mut self) -> &mut ShippingStatusGateway {
		&mut self.shipping_status
	}

	fn with_default_customer_ids(&self, mut request: GenerateBarcodeRequest) -> GenerateBarcodeRequest {
		if let Some(customer) = &self.customer {
			if request.customer_code.is_none() {
				request.customer_code = customer.customer_code.clone();
			}
			if request.customer_number.is_none() {
				request.customer_number = customer.customer_number.clone();
			}
		}
		request
	}
}
