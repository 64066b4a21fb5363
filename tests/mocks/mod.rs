//! Mock transport for integration tests
//!
//! Canned responses are matched by substring against the prepared request's
//! URL or body, first match wins. Every dispatched request is recorded so
//! tests can assert the exact wire form.

use std::collections::HashMap;
use std::sync::Mutex;

use dashmap::DashMap;
use pakket::async_trait;
use pakket::{ApiRequest, ApiResponse, HttpClient, PakketError, PakketResult};

#[derive(Debug, Default)]
pub struct MockHttpClient {
	responses: Vec<(String, ApiResponse)>,
	fail_markers: Vec<String>,
	requests: Mutex<Vec<ApiRequest>>,
	pending: DashMap<String, ApiRequest>,
}

impl MockHttpClient {
	pub fn new() -> Self {
		Self::default()
	}

	/// Respond with `status`/`body` to any request whose URL or body
	/// contains `marker`.
	pub fn with_response(mut self, marker: &str, status: u16, body: &str) -> Self {
		self.responses
			.push((marker.to_string(), ApiResponse::new(status, body)));
		self
	}

	/// Fail any request whose URL or body contains `marker` with a
	/// transport error.
	pub fn with_failure(mut self, marker: &str) -> Self {
		self.fail_markers.push(marker.to_string());
		self
	}

	pub fn requests(&self) -> Vec<ApiRequest> {
		self.requests.lock().unwrap().clone()
	}

	pub fn last_request(&self) -> Option<ApiRequest> {
		self.requests.lock().unwrap().last().cloned()
	}

	pub fn request_count(&self) -> usize {
		self.requests.lock().unwrap().len()
	}

	fn matches(request: &ApiRequest, marker: &str) -> bool {
		request.url.contains(marker)
			|| request.body.as_deref().is_some_and(|b| b.contains(marker))
	}

	fn respond(&self, request: &ApiRequest) -> PakketResult<ApiResponse> {
		self.requests.lock().unwrap().push(request.clone());

		if let Some(marker) = self.fail_markers.iter().find(|m| Self::matches(request, m)) {
			return Err(PakketError::Transport {
				reason: format!("mock failure for {marker}"),
			});
		}

		for (marker, response) in &self.responses {
			if Self::matches(request, marker) {
				return Ok(response.clone());
			}
		}

		Err(PakketError::Transport {
			reason: format!("no canned response for {}", request.url),
		})
	}
}

#[async_trait]
impl HttpClient for MockHttpClient {
	fn add_or_update_request(&self, id: &str, request: ApiRequest) -> String {
		self.pending.insert(id.to_string(), request);
		id.to_string()
	}

	fn remove_request(&self, id: &str) {
		self.pending.remove(id);
	}

	fn clear_requests(&self) {
		self.pending.clear();
	}

	async fn do_request(&self, request: &ApiRequest) -> PakketResult<ApiResponse> {
		self.respond(request)
	}

	async fn do_requests(
		&self,
		mut requests: HashMap<String, ApiRequest>,
	) -> HashMap<String, PakketResult<ApiResponse>> {
		let queued: Vec<(String, ApiRequest)> = self
			.pending
			.iter()
			.map(|entry| (entry.key().clone(), entry.value().clone()))
			.collect();
		self.pending.clear();
		for (id, request) in queued {
			requests.entry(id).or_insert(request);
		}

		requests
			.into_iter()
			.map(|(id, request)| {
				let result = self.respond(&request);
				(id, result)
			})
			.collect()
	}

	fn concurrency(&self) -> usize {
		5
	}
}
