//! TTL-bounded response cache
//!
//! Gateways can consult a cache before dispatching a request so repeated
//! lookups (timeframes for the same address, delivery dates) skip the wire.

use std::fmt::Debug;
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::debug;

/// Capability trait for caching raw response bodies, keyed by a request
/// fingerprint computed by the gateway.
pub trait ResponseCache: Send + Sync + Debug {
	/// Returns the cached body for `key` if present and not expired.
	fn get(&self, key: &str) -> Option<String>;

	/// Stores `body` under `key`, replacing any previous entry.
	fn set(&self, key: &str, body: String);

	/// Drops a single entry.
	fn remove(&self, key: &str);

	/// Drops every entry.
	fn clear(&self);
}

#[derive(Debug, Clone)]
struct CachedBody {
	body: String,
	stored_at: Instant,
}

impl CachedBody {
	fn new(body: String) -> Self {
		Self {
			body,
			stored_at: Instant::now(),
		}
	}

	fn is_expired(&self, ttl: Duration) -> bool {
		self.stored_at.elapsed() > ttl
	}
}

/// In-process [`ResponseCache`] backed by a `DashMap` with a fixed TTL.
#[derive(Debug, Clone)]
pub struct InMemoryCache {
	entries: Arc<DashMap<String, CachedBody>>,
	ttl: Duration,
}

impl InMemoryCache {
	/// Create a cache with a default 15-minute TTL.
	pub fn new() -> Self {
		Self::with_ttl(Duration::from_secs(15 * 60))
	}

	pub fn with_ttl(ttl: Duration) -> Self {
		Self {
			entries: Arc::new(DashMap::new()),
			ttl,
		}
	}

	pub fn ttl(&self) -> Duration {
		self.ttl
	}

	/// Remove all expired entries, returning how many were dropped.
	pub fn cleanup_expired(&self) -> usize {
		let mut removed = 0;
		self.entries.retain(|_, cached| {
			let expired = cached.is_expired(self.ttl);
			if expired {
				removed += 1;
			}
			!expired
		});
		if removed > 0 {
			debug!("Dropped {removed} expired cache entries");
		}
		removed
	}
}

impl Default for InMemoryCache {
	fn default() -> Self {
		Self::new()
	}
}

impl ResponseCache for InMemoryCache {
	fn get(&self, key: &str) -> Option<String> {
		// Atomic check-and-remove so an expired entry never leaks out
		self.entries.remove_if(key, |_, cached| {
			let expired = cached.is_expired(self.ttl);
			if expired {
				debug!(
					"Cache entry expired for {key} (age: {:?})",
					cached.stored_at.elapsed()
				);
			}
			expired
		});

		self.entries.get(key).map(|entry| entry.body.clone())
	}

	fn set(&self, key: &str, body: String) {
		self.entries.insert(key.to_string(), CachedBody::new(body));
	}

	fn remove(&self, key: &str) {
		self.entries.remove(key);
	}

	fn clear(&self) {
		let count = self.entries.len();
		self.entries.clear();
		debug!("Cleared {count} cache entries");
	}
}
