//! Transport layer for the carrier API
//!
//! Defines the [`HttpClient`] capability trait that gateways dispatch through,
//! the transport-neutral [`ApiRequest`]/[`ApiResponse`] pair, the default
//! reqwest-backed implementation with a keyed pending-request queue and
//! bounded concurrent batch dispatch, and a TTL response cache.

pub mod cache;
pub mod client;
pub mod request;
pub mod reqwest_client;

pub use cache::{InMemoryCache, ResponseCache};
pub use client::HttpClient;
pub use request::{ApiRequest, ApiResponse, Method};
pub use reqwest_client::ReqwestHttpClient;

// Re-export for implementors of the trait
pub use async_trait::async_trait;
