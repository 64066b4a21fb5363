//! Transport-neutral request and response types
//!
//! Request builders produce an [`ApiRequest`] instead of a transport-specific
//! type so that building stays a pure, synchronous function and tests can
//! inspect the exact wire form without a network.

use std::fmt;

/// HTTP method subset the provider API uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
	Get,
	Post,
	Delete,
}

impl fmt::Display for Method {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Get => f.write_str("GET"),
			Self::Post => f.write_str("POST"),
			Self::Delete => f.write_str("DELETE"),
		}
	}
}

/// A fully prepared request: absolute URL (query included), headers in
/// insertion order, optional body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
	pub method: Method,
	pub url: String,
	pub headers: Vec<(String, String)>,
	pub body: Option<String>,
}

impl ApiRequest {
	pub fn get(url: impl Into<String>) -> Self {
		Self {
			method: Method::Get,
			url: url.into(),
			headers: Vec::new(),
			body: None,
		}
	}

	pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
		Self {
			method: Method::Post,
			url: url.into(),
			headers: Vec::new(),
			body: Some(body.into()),
		}
	}

	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));
		self
	}

	/// First header value with the given name, case-insensitive
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(n, _)| n.eq_ignore_ascii_case(name))
			.map(|(_, v)| v.as_str())
	}
}

/// A raw transport response: status plus unparsed body.
/// Interpretation of the body is the response processor's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
	pub status: u16,
	pub body: String,
}

impl ApiResponse {
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self {
			status,
			body: body.into(),
		}
	}

	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_header_lookup_is_case_insensitive() {
		let request = ApiRequest::get("https://api.example.test/")
			.with_header("apikey", "secret")
			.with_header("Accept", "application/json");

		assert_eq!(request.header("APIKEY"), Some("secret"));
		assert_eq!(request.header("accept"), Some("application/json"));
		assert_eq!(request.header("content-type"), None);
	}

	#[test]
	fn test_success_range() {
		assert!(ApiResponse::new(200, "").is_success());
		assert!(ApiResponse::new(299, "").is_success());
		assert!(!ApiResponse::new(404, "").is_success());
	}
}
