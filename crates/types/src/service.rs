//! Service and prop-type discriminators
//!
//! Every domain entity is tagged at construction with the service that owns
//! it and a prop-type restricting which of its optional field layouts apply.
//! The tags never travel over the wire.

use std::fmt;
use std::str::FromStr;

use crate::errors::PakketError;

/// The fixed set of provider services an entity can belong to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Service {
	Barcode,
	Confirming,
	DeliveryDate,
	Labelling,
	Location,
	Shipping,
	ShippingStatus,
	Timeframe,
	Checkout,
	/// Entity not (yet) bound to a service, the empty tag
	#[default]
	Unspecified,
}

impl Service {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Barcode => "BarcodeService",
			Self::Confirming => "ConfirmingService",
			Self::DeliveryDate => "DeliveryDateService",
			Self::Labelling => "LabellingService",
			Self::Location => "LocationService",
			Self::Shipping => "ShippingService",
			Self::ShippingStatus => "ShippingStatusService",
			Self::Timeframe => "TimeframeService",
			Self::Checkout => "CheckoutService",
			Self::Unspecified => "",
		}
	}
}

impl FromStr for Service {
	type Err = PakketError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"BarcodeService" => Ok(Self::Barcode),
			"ConfirmingService" => Ok(Self::Confirming),
			"DeliveryDateService" => Ok(Self::DeliveryDate),
			"LabellingService" => Ok(Self::Labelling),
			"LocationService" => Ok(Self::Location),
			"ShippingService" => Ok(Self::Shipping),
			"ShippingStatusService" => Ok(Self::ShippingStatus),
			"TimeframeService" => Ok(Self::Timeframe),
			"CheckoutService" => Ok(Self::Checkout),
			"" => Ok(Self::Unspecified),
			other => Err(PakketError::invalid_argument(format!(
				"Unknown service: {other}"
			))),
		}
	}
}

impl fmt::Display for Service {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Which field layout of an entity is in use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PropType {
	/// Fields valid when the entity is part of a request
	Request,
	/// Fields valid when the entity is parsed from a response
	Response,
	/// Entity used outside a request/response context
	#[default]
	None,
}

impl PropType {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Request => "RequestProp",
			Self::Response => "ResponseProp",
			Self::None => "",
		}
	}
}

impl FromStr for PropType {
	type Err = PakketError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"RequestProp" => Ok(Self::Request),
			"ResponseProp" => Ok(Self::Response),
			"" => Ok(Self::None),
			other => Err(PakketError::invalid_argument(format!(
				"Unknown prop type: {other}"
			))),
		}
	}
}

impl fmt::Display for PropType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// API mode selecting the serialization shape a request builder produces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiMode {
	/// Query parameters / JSON bodies
	#[default]
	Rest,
	/// Legacy XML envelope with a UsernameToken security header
	Soap,
}
