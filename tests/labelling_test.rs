//! Label generation through the facade, single and batched

mod mocks;

use std::collections::HashMap;
use std::sync::Arc;

use mocks::MockHttpClient;
use pakket::{
	Customer, GenerateLabelRequest, Pakket, PakketError, PropType, Service, Shipment,
};

const LABEL_FIXTURE: &str = r#"{
	"ResponseShipments": [
		{
			"Barcode": "3SDEVC201611210",
			"ProductCodeDelivery": "3085",
			"Labels": [
				{ "Content": "JVBERi0xLjQ=", "Labeltype": "Label" }
			]
		}
	]
}"#;

fn customer() -> Customer {
	Customer::new(Service::Labelling, PropType::Request)
		.with_customer_code("DEVC")
		.with_customer_number("11223344")
}

fn label_request(reference: &str) -> GenerateLabelRequest {
	GenerateLabelRequest::new(
		customer(),
		vec![Shipment::new(Service::Labelling, PropType::Request)
			.with_barcode("3SDEVC201611210")
			.with_reference(reference)],
	)
}

#[tokio::test]
async fn test_single_label_round_trip() {
	let mock = Arc::new(MockHttpClient::new().with_response("/label", 200, LABEL_FIXTURE));
	let client = Pakket::builder("key").with_http_client(mock.clone()).build();

	let response = client.generate_label(&label_request("ORDER-1")).await.unwrap();

	assert_eq!(response.response_shipments.len(), 1);
	assert_eq!(
		response.response_shipments[0].labels[0].content.as_deref(),
		Some("JVBERi0xLjQ=")
	);

	let sent = mock.last_request().unwrap();
	assert!(sent.url.ends_with("label?confirm=1"));
	assert_eq!(sent.header("Content-Type"), Some("application/json"));
}

#[tokio::test]
async fn test_batch_of_three_isolates_the_failing_key() {
	let mock = Arc::new(
		MockHttpClient::new()
			.with_failure("ORDER-2")
			.with_response("/label", 200, LABEL_FIXTURE),
	);
	let client = Pakket::builder("key").with_http_client(mock.clone()).build();

	let mut batch = HashMap::new();
	batch.insert("a".to_string(), label_request("ORDER-1"));
	batch.insert("b".to_string(), label_request("ORDER-2"));
	batch.insert("c".to_string(), label_request("ORDER-3"));

	let results = client.generate_labels(batch).await;

	assert_eq!(results.len(), 3);
	assert!(results["a"].is_ok());
	assert!(results["c"].is_ok());
	assert!(matches!(results["b"], Err(PakketError::Transport { .. })));
	// All three were dispatched; the failure did not short-circuit the batch
	assert_eq!(mock.request_count(), 3);
}

#[tokio::test]
async fn test_batch_result_keys_match_request_keys() {
	let mock = Arc::new(MockHttpClient::new().with_response("/label", 200, LABEL_FIXTURE));
	let client = Pakket::builder("key").with_http_client(mock).build();

	let mut batch = HashMap::new();
	for key in ["first", "second", "third"] {
		batch.insert(key.to_string(), label_request(key));
	}

	let results = client.generate_labels(batch).await;
	let mut keys: Vec<_> = results.keys().cloned().collect();
	keys.sort();
	assert_eq!(keys, vec!["first", "second", "third"]);
}
