//! Reqwest-backed HttpClient implementation

use std::collections::HashMap;
use std::str::FromStr;

use async_trait::async_trait;
use dashmap::DashMap;
use futures::{stream, StreamExt};
use pakket_types::{PakketError, PakketResult};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use tracing::{debug, warn};

use crate::client::HttpClient;
use crate::request::{ApiRequest, ApiResponse, Method};

const DEFAULT_CONCURRENCY: usize = 5;

/// The default transport: reqwest with connection pooling, a pending-request
/// queue in a `DashMap`, and `buffer_unordered` bounding batch dispatch.
#[derive(Debug)]
pub struct ReqwestHttpClient {
	client: Client,
	pending: DashMap<String, ApiRequest>,
	concurrency: usize,
}

impl ReqwestHttpClient {
	pub fn new() -> Self {
		Self::with_concurrency(DEFAULT_CONCURRENCY)
	}

	pub fn with_concurrency(concurrency: usize) -> Self {
		Self {
			client: Client::new(),
			pending: DashMap::new(),
			// A ceiling of zero would deadlock buffer_unordered
			concurrency: concurrency.max(1),
		}
	}

	/// Use a preconfigured reqwest client (custom TLS, proxies, timeouts)
	pub fn with_client(client: Client, concurrency: usize) -> Self {
		Self {
			client,
			pending: DashMap::new(),
			concurrency: concurrency.max(1),
		}
	}

	fn header_map(request: &ApiRequest) -> HeaderMap {
		let mut headers = HeaderMap::new();
		for (name, value) in &request.headers {
			if let (Ok(name), Ok(value)) = (
				HeaderName::from_str(name),
				HeaderValue::from_str(value),
			) {
				headers.insert(name, value);
			} else {
				warn!("Skipping malformed header {name}");
			}
		}
		headers
	}

	async fn dispatch(&self, request: &ApiRequest) -> PakketResult<ApiResponse> {
		debug!("{} {}", request.method, request.url);

		let mut builder = match request.method {
			Method::Get => self.client.get(&request.url),
			Method::Post => self.client.post(&request.url),
			Method::Delete => self.client.delete(&request.url),
		};
		builder = builder.headers(Self::header_map(request));
		if let Some(body) = &request.body {
			builder = builder.body(body.clone());
		}

		let response = builder.send().await.map_err(PakketError::HttpClient)?;
		let status = response.status().as_u16();
		let body = response.text().await.map_err(PakketError::HttpClient)?;

		debug!("{} responded {} with {} bytes", request.url, status, body.len());
		Ok(ApiResponse { status, body })
	}
}

impl Default for ReqwestHttpClient {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
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
		self.dispatch(request).await
	}

	async fn do_requests(
		&self,
		mut requests: HashMap<String, ApiRequest>,
	) -> HashMap<String, PakketResult<ApiResponse>> {
		// Drain the queue into the batch; explicitly passed keys win.
		let queued: Vec<(String, ApiRequest)> = self
			.pending
			.iter()
			.map(|entry| (entry.key().clone(), entry.value().clone()))
			.collect();
		self.pending.clear();
		for (id, request) in queued {
			requests.entry(id).or_insert(request);
		}

		debug!(
			"Dispatching batch of {} requests (concurrency {})",
			requests.len(),
			self.concurrency
		);

		stream::iter(requests)
			.map(|(id, request)| async move {
				let result = self.dispatch(&request).await;
				if let Err(e) = &result {
					warn!("Batch request {id} failed: {e}");
				}
				(id, result)
			})
			.buffer_unordered(self.concurrency)
			.collect()
			.await
	}

	fn concurrency(&self) -> usize {
		self.concurrency
	}
}
