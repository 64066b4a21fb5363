//! Timeframe entities
//!
//! `Timeframe` covers both layouts: the request layout (address + date range
//! + options, prop-type Request) and the response layout (a date with its
//! per-day time windows, prop-type Response). The provider wraps the per-day
//! windows under the singular `TimeframeTimeFrame` key and may unwrap a
//! one-element list to a bare object; decoding always normalizes to an
//! ordered sequence.

use serde::{Deserialize, Serialize};

use crate::service::{PropType, Service};
use crate::wire::{ordered_sequence, WrappedOptions};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeframe {
	#[serde(skip)]
	pub service: Service,
	#[serde(skip)]
	pub prop_type: PropType,

	#[serde(rename = "City", skip_serializing_if = "Option::is_none")]
	pub city: Option<String>,
	#[serde(rename = "CountryCode", skip_serializing_if = "Option::is_none")]
	pub country_code: Option<String>,
	#[serde(rename = "Date", skip_serializing_if = "Option::is_none")]
	pub date: Option<String>,
	#[serde(rename = "EndDate", skip_serializing_if = "Option::is_none")]
	pub end_date: Option<String>,
	#[serde(rename = "HouseNr", skip_serializing_if = "Option::is_none")]
	pub house_nr: Option<String>,
	#[serde(rename = "HouseNrExt", skip_serializing_if = "Option::is_none")]
	pub house_nr_ext: Option<String>,
	#[serde(
		rename = "Options",
		default,
		deserialize_with = "ordered_sequence",
		skip_serializing_if = "Vec::is_empty"
	)]
	pub options: Vec<String>,
	#[serde(rename = "PostalCode", skip_serializing_if = "Option::is_none")]
	pub postal_code: Option<String>,
	#[serde(rename = "StartDate", skip_serializing_if = "Option::is_none")]
	pub start_date: Option<String>,
	#[serde(rename = "Street", skip_serializing_if = "Option::is_none")]
	pub street: Option<String>,
	#[serde(rename = "SundaySorting", skip_serializing_if = "Option::is_none")]
	pub sunday_sorting: Option<bool>,
	#[serde(rename = "Timeframes", skip_serializing_if = "Option::is_none")]
	pub timeframes: Option<TimeframeTimeFrames>,
}

impl Timeframe {
	pub fn new(service: Service, prop_type: PropType) -> Self {
		Self {
			service,
			prop_type,
			..Self::default()
		}
	}

	pub fn with_city(mut self, city: impl Into<String>) -> Self {
		self.city = Some(city.into());
		self
	}

	pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
		self.country_code = Some(country_code.into());
		self
	}

	pub fn with_date(mut self, date: impl Into<String>) -> Self {
		self.date = Some(date.into());
		self
	}

	pub fn with_end_date(mut self, end_date: impl Into<String>) -> Self {
		self.end_date = Some(end_date.into());
		self
	}

	pub fn with_house_nr(mut self, house_nr: impl Into<String>) -> Self {
		self.house_nr = Some(house_nr.into());
		self
	}

	pub fn with_house_nr_ext(mut self, house_nr_ext: impl Into<String>) -> Self {
		self.house_nr_ext = Some(house_nr_ext.into());
		self
	}

	pub fn with_options(mut self, options: Vec<String>) -> Self {
		self.options = options;
		self
	}

	pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
		self.postal_code = Some(postal_code.into());
		self
	}

	pub fn with_start_date(mut self, start_date: impl Into<String>) -> Self {
		self.start_date = Some(start_date.into());
		self
	}

	pub fn with_street(mut self, street: impl Into<String>) -> Self {
		self.street = Some(street.into());
		self
	}

	pub fn with_sunday_sorting(mut self, sunday_sorting: bool) -> Self {
		self.sunday_sorting = Some(sunday_sorting);
		self
	}
}

/// The per-day windows wrapped under the provider's singular key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeframeTimeFrames {
	#[serde(
		rename = "TimeframeTimeFrame",
		default,
		deserialize_with = "ordered_sequence"
	)]
	pub inner: Vec<TimeframeTimeFrame>,
}

impl TimeframeTimeFrames {
	pub fn new(inner: Vec<TimeframeTimeFrame>) -> Self {
		Self { inner }
	}
}

/// One delivery window on a specific day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeframeTimeFrame {
	#[serde(rename = "From", skip_serializing_if = "Option::is_none")]
	pub from: Option<String>,
	#[serde(rename = "Options", skip_serializing_if = "Option::is_none")]
	pub options: Option<WrappedOptions>,
	#[serde(rename = "To", skip_serializing_if = "Option::is_none")]
	pub to: Option<String>,
}

/// Why no timeframe is available on a given date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReasonNoTimeframe {
	#[serde(rename = "Code", skip_serializing_if = "Option::is_none")]
	pub code: Option<String>,
	#[serde(rename = "Date", skip_serializing_if = "Option::is_none")]
	pub date: Option<String>,
	#[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(rename = "Options", skip_serializing_if = "Option::is_none")]
	pub options: Option<WrappedOptions>,
}
