//! Per-service gateways for the Pakketdienst API
//!
//! Each service pairs a request builder (DTO to transport request) with a
//! response processor (raw body to typed DTO) behind a gateway that owns
//! one round trip. Builders and processors are trait objects, swappable at
//! runtime for testing or API-version migration; the transport itself is an
//! injected [`pakket_client::HttpClient`].

pub mod barcode;
pub mod checkout;
mod common;
pub mod config;
pub mod delivery_date;
pub mod labelling;
pub mod shipping_status;
pub mod timeframes;

pub use barcode::{BarcodeGateway, BarcodeRequestBuilder, BarcodeResponseProcessor};
pub use checkout::{CheckoutGateway, CheckoutRequestBuilder, CheckoutResponseProcessor};
pub use config::GatewayConfig;
pub use delivery_date::{
	DeliveryDateGateway, DeliveryDateRequestBuilder, DeliveryDateResponseProcessor,
};
pub use labelling::{LabellingGateway, LabellingRequestBuilder, LabellingResponseProcessor};
pub use shipping_status::{
	ShippingStatusGateway, ShippingStatusRequestBuilder, ShippingStatusResponseProcessor,
};
pub use timeframes::{TimeframeGateway, TimeframeRequestBuilder, TimeframeResponseProcessor};
