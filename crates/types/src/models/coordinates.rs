//! Geographic coordinates and bounding areas

use serde::{Deserialize, Serialize};

use crate::service::{PropType, Service};

/// A latitude/longitude pair, kept as wire strings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
	#[serde(rename = "Latitude", skip_serializing_if = "Option::is_none")]
	pub latitude: Option<String>,
	#[serde(rename = "Longitude", skip_serializing_if = "Option::is_none")]
	pub longitude: Option<String>,
}

impl Coordinates {
	pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
		Self {
			latitude: Some(latitude.into()),
			longitude: Some(longitude.into()),
		}
	}
}

/// A bounding box of two coordinates, used by nearby-location queries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Area {
	#[serde(skip)]
	pub service: Service,
	#[serde(skip)]
	pub prop_type: PropType,

	#[serde(rename = "CoordinatesNorthWest", skip_serializing_if = "Option::is_none")]
	pub coordinates_north_west: Option<Coordinates>,
	#[serde(rename = "CoordinatesSouthEast", skip_serializing_if = "Option::is_none")]
	pub coordinates_south_east: Option<Coordinates>,
}

impl Area {
	pub fn new(service: Service, prop_type: PropType) -> Self {
		Self {
			service,
			prop_type,
			..Self::default()
		}
	}

	pub fn with_coordinates_north_west(mut self, coordinates: Coordinates) -> Self {
		self.coordinates_north_west = Some(coordinates);
		self
	}

	pub fn with_coordinates_south_east(mut self, coordinates: Coordinates) -> Self {
		self.coordinates_south_east = Some(coordinates);
		self
	}
}
