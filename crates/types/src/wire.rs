//! Wire-shape normalization helpers
//!
//! The provider's JSON is inconsistent about collection cardinality: a field
//! that is conceptually a list may arrive as a single object when it has
//! exactly one element, or wrapped under a singular key. Every repeated field
//! in the response DTOs decodes through [`ordered_sequence`] so the typed
//! side always sees an ordered `Vec`, regardless of the wire form.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a value that may be absent, a single object, or an array
/// into an ordered `Vec`, preserving element order.
///
/// Use together with `#[serde(default)]` so a missing key yields an empty
/// sequence rather than a decode error.
pub fn ordered_sequence<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum OneOrMany<T> {
		Many(Vec<T>),
		One(T),
	}

	// Null is treated the same as an absent key.
	match Option::<OneOrMany<T>>::deserialize(deserializer)? {
		None => Ok(Vec::new()),
		Some(OneOrMany::Many(values)) => Ok(values),
		Some(OneOrMany::One(value)) => Ok(vec![value]),
	}
}

/// Delivery options wrapped under the provider's singular `string` key,
/// e.g. `{"string": "Evening"}` or `{"string": ["Daytime", "Evening"]}`.
///
/// Re-serializes in the canonical array form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WrappedOptions {
	#[serde(rename = "string", default, deserialize_with = "ordered_sequence")]
	pub values: Vec<String>,
}

impl WrappedOptions {
	pub fn new(values: Vec<String>) -> Self {
		Self { values }
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl From<Vec<String>> for WrappedOptions {
	fn from(values: Vec<String>) -> Self {
		Self { values }
	}
}

/// Query-string form of a boolean, per the provider contract (`"1"` / `"0"`)
pub fn bool_flag(value: bool) -> &'static str {
	if value {
		"1"
	} else {
		"0"
	}
}
