//! Pakket Types
//!
//! Domain entities, request/response DTOs and the error taxonomy for the
//! Pakketdienst shipping API client. Everything here is transport-agnostic:
//! entities are immutable-by-convention value objects built through
//! validated constructors, and every repeated response field decodes through
//! the singular/plural normalization in [`wire`].

pub mod barcode;
pub mod checkout;
pub mod delivery_date;
pub mod errors;
pub mod labelling;
pub mod models;
pub mod secret_string;
pub mod service;
pub mod soap;
pub mod status;
pub mod timeframes;
pub mod wire;

// Re-export serde_json for downstream fixtures and fingerprinting
pub use serde_json;

pub use errors::{error_for_code, PakketError, PakketResult};
pub use secret_string::SecretString;
pub use service::{ApiMode, PropType, Service};

pub use models::{
	Address, Area, CheckoutTimeframe, Content, Coordinates, Customer, CutOffTime, DeliveryOption,
	Dimension, Label, Message, PickupLocation, PickupOption, ReasonNoTimeframe, ResponseShipment,
	Shipment, Timeframe, TimeframeTimeFrame, Warning,
};

pub use barcode::{GenerateBarcodeRequest, GenerateBarcodeResponse};
pub use checkout::{GetDeliveryInformationRequest, GetDeliveryInformationResponse};
pub use delivery_date::{
	CalculateDeliveryDateRequest, CalculateDeliveryDateResponse, CalculateShippingDateRequest,
	CalculateShippingDateResponse,
};
pub use labelling::{GenerateLabelRequest, GenerateLabelResponse};
pub use status::{CurrentStatusRequest, CurrentStatusResponse, ShipmentStatus, StatusDetail};
pub use timeframes::{GetTimeframes, ResponseTimeframes};
