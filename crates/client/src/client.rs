//! HttpClient capability trait
//!
//! The one seam between the gateways and the network. Implementations own a
//! pending-request queue keyed by caller-assigned ids so a queued request can
//! be replaced or removed before dispatch, and a batch mode that dispatches
//! every keyed request with bounded parallelism and per-key outcome
//! isolation.

use std::collections::HashMap;
use std::fmt::Debug;

use async_trait::async_trait;
use pakket_types::PakketResult;

use crate::request::{ApiRequest, ApiResponse};

#[async_trait]
pub trait HttpClient: Send + Sync + Debug {
	/// Queue a request under `id`, replacing any prior entry with the same id.
	/// Returns the id for chaining.
	fn add_or_update_request(&self, id: &str, request: ApiRequest) -> String;

	/// Remove a queued request; no-op if the id is unknown
	fn remove_request(&self, id: &str);

	/// Empty the pending queue
	fn clear_requests(&self);

	/// Perform exactly one request synchronously (from the caller's view).
	/// Fails only on transport-level errors; the body is not interpreted.
	async fn do_request(&self, request: &ApiRequest) -> PakketResult<ApiResponse>;

	/// Dispatch the given requests plus any queued ones concurrently, at most
	/// `concurrency()` in flight. The queue is drained by this call. Each
	/// key's outcome is captured independently: one request failing never
	/// aborts the others, and completion order carries no meaning.
	async fn do_requests(
		&self,
		requests: HashMap<String, ApiRequest>,
	) -> HashMap<String, PakketResult<ApiResponse>>;

	/// The configured concurrency ceiling for batch dispatch
	fn concurrency(&self) -> usize;
}
