//! Shared request/response plumbing for all gateways
//!
//! Every gateway attaches the same credential headers and runs the same
//! error-shape detection before handing the body to its typed decode. The
//! provider signals failures in two distinct JSON shapes: a `fault` envelope
//! on credential rejection, and an `Errors` payload carrying enumerated
//! error codes. Both are checked before any schema decode so a business
//! error never surfaces as a parse failure.

use pakket_client::{ApiRequest, ApiResponse};
use pakket_types::{error_for_code, PakketError, PakketResult, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Attach the credential and accept headers every REST call carries.
pub(crate) fn with_rest_headers(request: ApiRequest, api_key: &SecretString) -> ApiRequest {
	request
		.with_header("apikey", api_key.expose_secret())
		.with_header("Accept", "application/json")
}

/// Attach the headers a legacy SOAP call carries.
pub(crate) fn with_soap_headers(request: ApiRequest, api_key: &SecretString) -> ApiRequest {
	request
		.with_header("apikey", api_key.expose_secret())
		.with_header("Accept", "text/xml")
		.with_header("Content-Type", "text/xml;charset=UTF-8")
}

/// Cache key for a prepared request. The URL carries every query parameter,
/// so URL plus body uniquely identifies the logical request.
pub(crate) fn cache_key(request: &ApiRequest) -> String {
	match &request.body {
		Some(body) => format!("{}|{}", request.url, body),
		None => request.url.clone(),
	}
}

/// Inspect a raw response for the provider's error shapes.
///
/// Returns `Ok(())` when the body carries no recognizable error payload and
/// the status is a success; the caller then decodes the typed response.
pub(crate) fn check_provider_errors(response: &ApiResponse) -> PakketResult<()> {
	if let Ok(value) = serde_json::from_str::<Value>(&response.body) {
		// Credential rejections come back as a fault envelope, regardless
		// of the service that was called.
		if let Some(fault) = value.get("fault") {
			let faultstring = fault
				.get("faultstring")
				.and_then(Value::as_str)
				.unwrap_or("unspecified fault");
			debug!("Provider fault envelope: {faultstring}");
			return Err(PakketError::InvalidApiKey);
		}

		if let Some(first) = first_error_entry(&value) {
			let code = field_as_string(first, &["ErrorNumber", "Code"]).unwrap_or_default();
			let message = field_as_string(first, &["ErrorMsg", "Description", "Message"])
				.unwrap_or_else(|| "unspecified error".to_string());
			debug!("Provider error payload: code={code} message={message}");
			return Err(error_for_code(&code, &message));
		}
	}

	if !response.is_success() {
		return Err(PakketError::parse(format!(
			"provider returned status {} with an unrecognized body",
			response.status
		)));
	}

	Ok(())
}

/// Check for errors, then decode the body into the typed response DTO.
pub(crate) fn decode_response<T: DeserializeOwned>(
	response: &ApiResponse,
	operation: &str,
) -> PakketResult<T> {
	check_provider_errors(response)?;
	serde_json::from_str(&response.body)
		.map_err(|e| PakketError::parse(format!("{operation}: {e}")))
}

/// The `Errors` payload arrives either flat (`"Errors": [..]`) or wrapped
/// under a singular key (`"Errors": {"Error": [..]}`), and a one-element
/// list may be unwrapped to a bare object.
fn first_error_entry(value: &Value) -> Option<&Value> {
	let errors = value.get("Errors")?;
	match errors {
		Value::Array(items) => items.first(),
		Value::Object(map) => match map.get("Error") {
			Some(Value::Array(items)) => items.first(),
			Some(entry @ Value::Object(_)) => Some(entry),
			_ => None,
		},
		_ => None,
	}
}

/// Error fields are stringly-typed on some services and numeric on others.
fn field_as_string(entry: &Value, names: &[&str]) -> Option<String> {
	for name in names {
		match entry.get(name) {
			Some(Value::String(s)) => return Some(s.clone()),
			Some(Value::Number(n)) => return Some(n.to_string()),
			_ => {},
		}
	}
	None
}
