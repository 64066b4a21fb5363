//! Error taxonomy for the Pakketdienst API client
//!
//! Every failure surfaced by the library is one of these kinds. Request
//! builders and response processors raise the most specific applicable
//! variant; gateways never downgrade specificity.

use thiserror::Error;

/// Result alias used throughout the client
pub type PakketResult<T> = Result<T, PakketError>;

#[derive(Error, Debug)]
pub enum PakketError {
	/// Caller or library misuse detected before anything is sent over the wire
	#[error("Invalid argument: {reason}")]
	InvalidArgument { reason: String },

	/// Transport-level failure (connection, timeout, TLS); no interpretable response
	#[error("HTTP request failed: {0}")]
	HttpClient(#[from] reqwest::Error),

	/// Transport-level failure raised by a non-reqwest transport implementation
	#[error("Transport failure: {reason}")]
	Transport { reason: String },

	/// A response was received but could not be decoded against the expected schema
	#[error("Unable to parse response: {reason}")]
	Parse { reason: String },

	/// Provider returned a structured business error
	#[error("API error {code}: {message}")]
	Api { code: String, message: String },

	/// Provider rejected the API key
	#[error("Invalid API key")]
	InvalidApiKey,

	/// Provider reports that the requested resource or slot is unavailable
	#[error("Not available: {message}")]
	NotAvailable { message: String },
}

impl PakketError {
	pub fn invalid_argument(reason: impl Into<String>) -> Self {
		Self::InvalidArgument {
			reason: reason.into(),
		}
	}

	pub fn parse(reason: impl Into<String>) -> Self {
		Self::Parse {
			reason: reason.into(),
		}
	}

	/// True for the variants that represent a provider-signaled error payload
	pub fn is_provider_error(&self) -> bool {
		matches!(
			self,
			Self::Api { .. } | Self::InvalidApiKey | Self::NotAvailable { .. }
		)
	}
}

/// Map an enumerated provider error code to the taxonomy.
///
/// The provider's published error-code table is the source of truth here;
/// codes that signal an empty result set map to [`PakketError::NotAvailable`],
/// credential rejections map to [`PakketError::InvalidApiKey`], and every
/// unknown code stays a generic [`PakketError::Api`].
pub fn error_for_code(code: &str, message: &str) -> PakketError {
	match code {
		// Credential rejected (also reported via the fault envelope on 401)
		"1008" => PakketError::InvalidApiKey,
		// No delivery options for the given window
		"2060" => PakketError::NotAvailable {
			message: message.to_string(),
		},
		// No timeframes available for the requested address/date range
		"2069" => PakketError::NotAvailable {
			message: message.to_string(),
		},
		// No delivery date can be calculated
		"2070" => PakketError::NotAvailable {
			message: message.to_string(),
		},
		_ => PakketError::Api {
			code: code.to_string(),
			message: message.to_string(),
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_known_codes_map_to_specific_kinds() {
		assert!(matches!(
			error_for_code("1008", "Invalid apikey"),
			PakketError::InvalidApiKey
		));
		assert!(matches!(
			error_for_code("2069", "No timeframes available"),
			PakketError::NotAvailable { .. }
		));
		assert!(matches!(
			error_for_code("2060", "Delivery options not found"),
			PakketError::NotAvailable { .. }
		));
		assert!(matches!(
			error_for_code("2070", "No delivery date available"),
			PakketError::NotAvailable { .. }
		));
	}

	#[test]
	fn test_unknown_code_stays_generic_api_error() {
		let err = error_for_code("9999", "Something else");
		match err {
			PakketError::Api { code, message } => {
				assert_eq!(code, "9999");
				assert_eq!(message, "Something else");
			},
			other => panic!("expected Api error, got {other:?}"),
		}
	}

	#[test]
	fn test_provider_error_classification() {
		assert!(PakketError::InvalidApiKey.is_provider_error());
		assert!(error_for_code("2069", "n/a").is_provider_error());
		assert!(!PakketError::invalid_argument("bad input").is_provider_error());
		assert!(!PakketError::parse("garbled").is_provider_error());
	}
}
