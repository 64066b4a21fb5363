//! End-to-end timeframe lookups against a mock transport

mod mocks;

use std::sync::Arc;

use mocks::MockHttpClient;
use pakket::serde_json::{self, json, Value};
use pakket::{
	GetTimeframes, InMemoryCache, Pakket, PakketError, PropType, Service, Timeframe,
};
use url::Url;

const TIMEFRAMES_FIXTURE: &str = r#"{
	"ReasonNotimeframes": {
		"ReasonNoTimeframe": [
			{ "Code": "UFD", "Date": "03-07-2016", "Description": "Unavailable for delivery", "Options": { "string": ["Daytime"] } },
			{ "Code": "S", "Date": "04-07-2016", "Description": "Sunday", "Options": { "string": ["Evening"] } }
		]
	},
	"Timeframes": {
		"Timeframe": [
			{
				"Date": "30-06-2016",
				"Timeframes": {
					"TimeframeTimeFrame": [
						{ "From": "15:00:00", "Options": { "string": ["Daytime"] }, "To": "17:00:00" },
						{ "From": "18:00:00", "Options": { "string": ["Evening"] }, "To": "22:00:00" }
					]
				}
			},
			{
				"Date": "01-07-2016",
				"Timeframes": {
					"TimeframeTimeFrame": [
						{ "From": "15:30:00", "Options": { "string": ["Daytime"] }, "To": "17:30:00" }
					]
				}
			},
			{
				"Date": "02-07-2016",
				"Timeframes": {
					"TimeframeTimeFrame": [
						{ "From": "16:00:00", "Options": { "string": ["Daytime"] }, "To": "18:30:00" }
					]
				}
			}
		]
	}
}"#;

fn scenario_request() -> GetTimeframes {
	GetTimeframes::new(vec![Timeframe::new(Service::Timeframe, PropType::Request)
		.with_start_date("30-06-2016")
		.with_end_date("02-07-2016")
		.with_postal_code("2132WT")
		.with_house_nr("42")
		.with_country_code("NL")
		.with_options(vec!["Evening".to_string()])
		.with_house_nr_ext("A")
		.with_street("Siriusdreef")
		.with_city("Hoofddorp")
		.with_sunday_sorting(true)])
}

fn client_with(mock: Arc<MockHttpClient>) -> Pakket {
	Pakket::builder("test-api-key")
		.with_http_client(mock)
		.build()
}

#[tokio::test]
async fn test_scenario_2132wt_produces_documented_query_and_headers() {
	let mock = Arc::new(
		MockHttpClient::new().with_response("calculate/timeframes", 200, TIMEFRAMES_FIXTURE),
	);
	let client = client_with(mock.clone());

	client.get_timeframes(&scenario_request()).await.unwrap();

	let sent = mock.last_request().unwrap();
	assert_eq!(sent.header("apikey"), Some("test-api-key"));
	assert_eq!(sent.header("Accept"), Some("application/json"));

	let url = Url::parse(&sent.url).unwrap();
	let pairs: Vec<(String, String)> = url
		.query_pairs()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect();
	assert_eq!(
		pairs,
		vec![
			("AllowSundaySorting".to_string(), "1".to_string()),
			("StartDate".to_string(), "30-06-2016".to_string()),
			("EndDate".to_string(), "02-07-2016".to_string()),
			("PostalCode".to_string(), "2132WT".to_string()),
			("HouseNumber".to_string(), "42".to_string()),
			("CountryCode".to_string(), "NL".to_string()),
			("Options".to_string(), "Evening".to_string()),
			("HouseNrExt".to_string(), "A".to_string()),
			("Street".to_string(), "Siriusdreef".to_string()),
			("City".to_string(), "Hoofddorp".to_string()),
		]
	);
}

#[tokio::test]
async fn test_fixture_decodes_into_ordered_typed_response() {
	let mock = Arc::new(
		MockHttpClient::new().with_response("calculate/timeframes", 200, TIMEFRAMES_FIXTURE),
	);
	let client = client_with(mock);

	let response = client.get_timeframes(&scenario_request()).await.unwrap();

	let dates: Vec<_> = response
		.timeframes()
		.iter()
		.map(|t| t.date.as_deref().unwrap())
		.collect();
	assert_eq!(dates, vec!["30-06-2016", "01-07-2016", "02-07-2016"]);

	let first_day = response.timeframes()[0].timeframes.as_ref().unwrap();
	assert_eq!(first_day.inner.len(), 2);
	assert_eq!(first_day.inner[1].from.as_deref(), Some("18:00:00"));
	assert_eq!(
		first_day.inner[1].options.as_ref().unwrap().values,
		vec!["Evening".to_string()]
	);

	assert_eq!(response.reason_no_timeframes().len(), 2);
	assert_eq!(response.reason_no_timeframes()[1].code.as_deref(), Some("S"));
}

#[tokio::test]
async fn test_round_trip_preserves_canonical_payload() {
	let mock = Arc::new(
		MockHttpClient::new().with_response("calculate/timeframes", 200, TIMEFRAMES_FIXTURE),
	);
	let client = client_with(mock);

	let response = client.get_timeframes(&scenario_request()).await.unwrap();

	let reserialized = serde_json::to_value(&response).unwrap();
	let original: Value = serde_json::from_str(TIMEFRAMES_FIXTURE).unwrap();
	assert_eq!(reserialized, original);
}

#[tokio::test]
async fn test_singular_wire_forms_normalize_to_canonical_arrays() {
	// One timeframe with one window, both unwrapped to bare objects
	let singular_body = r#"{
		"ReasonNotimeframes": {
			"ReasonNoTimeframe": { "Code": "S", "Date": "03-07-2016", "Description": "Sunday" }
		},
		"Timeframes": {
			"Timeframe": {
				"Date": "30-06-2016",
				"Timeframes": {
					"TimeframeTimeFrame": { "From": "15:00:00", "Options": { "string": "Daytime" }, "To": "17:00:00" }
				}
			}
		}
	}"#;

	let mock =
		Arc::new(MockHttpClient::new().with_response("calculate/timeframes", 200, singular_body));
	let client = client_with(mock);

	let response = client.get_timeframes(&scenario_request()).await.unwrap();

	assert_eq!(response.timeframes().len(), 1);
	assert_eq!(response.reason_no_timeframes().len(), 1);

	let reserialized = serde_json::to_value(&response).unwrap();
	assert_eq!(
		reserialized,
		json!({
			"ReasonNotimeframes": {
				"ReasonNoTimeframe": [
					{ "Code": "S", "Date": "03-07-2016", "Description": "Sunday" }
				]
			},
			"Timeframes": {
				"Timeframe": [
					{
						"Date": "30-06-2016",
						"Timeframes": {
							"TimeframeTimeFrame": [
								{ "From": "15:00:00", "Options": { "string": ["Daytime"] }, "To": "17:00:00" }
							]
						}
					}
				]
			}
		})
	);
}

#[tokio::test]
async fn test_empty_response_yields_empty_sequences() {
	let body = r#"{"ReasonNotimeframes":{"ReasonNoTimeframe":[]},"Timeframes":{"Timeframe":[]}}"#;
	let mock = Arc::new(MockHttpClient::new().with_response("calculate/timeframes", 200, body));
	let client = client_with(mock);

	let response = client.get_timeframes(&scenario_request()).await.unwrap();
	assert!(response.timeframes().is_empty());
	assert!(response.reason_no_timeframes().is_empty());
}

#[tokio::test]
async fn test_no_timeframes_error_code_maps_to_not_available() {
	let body = r#"{"Errors":{"Error":[{"ErrorNumber":"2069","ErrorMsg":"No timeframes found for the given parameters"}]}}"#;
	let mock = Arc::new(MockHttpClient::new().with_response("calculate/timeframes", 200, body));
	let client = client_with(mock);

	let result = client.get_timeframes(&scenario_request()).await;
	assert!(matches!(result, Err(PakketError::NotAvailable { .. })));
}

#[tokio::test]
async fn test_fault_envelope_maps_to_invalid_api_key() {
	let body = r#"{"fault":{"faultstring":"Invalid ApiKey for given request"}}"#;
	let mock = Arc::new(MockHttpClient::new().with_response("calculate/timeframes", 401, body));
	let client = client_with(mock);

	let result = client.get_timeframes(&scenario_request()).await;
	assert!(matches!(result, Err(PakketError::InvalidApiKey)));
}

#[tokio::test]
async fn test_identical_lookups_are_served_from_cache() {
	let mock = Arc::new(
		MockHttpClient::new().with_response("calculate/timeframes", 200, TIMEFRAMES_FIXTURE),
	);
	let client = Pakket::builder("test-api-key")
		.with_http_client(mock.clone())
		.with_cache(Arc::new(InMemoryCache::new()))
		.build();

	let first = client.get_timeframes(&scenario_request()).await.unwrap();
	let second = client.get_timeframes(&scenario_request()).await.unwrap();

	assert_eq!(first, second);
	assert_eq!(mock.request_count(), 1);
}
