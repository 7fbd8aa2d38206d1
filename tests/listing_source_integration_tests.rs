use std::time::Duration;

use staymap::core::listing::ListingId;
use staymap::listings::{FetchError, HttpListingSource, ListingSource};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

const TWO_LISTINGS: &str = r#"{
  "items": [
    {"id": 1, "title": "강남역 원룸", "price": "₩45,000", "imageUrl": "https://img.example/1.jpg", "lat": 37.1, "lng": 127.1},
    {"id": 2, "title": "Seocho loft", "price": "₩80,000", "imageUrl": "https://img.example/2.jpg", "lat": 37.2, "lng": 127.2}
  ]
}"#;

async fn source_for(server: &MockServer) -> HttpListingSource {
    HttpListingSource::new(format!("{}/v3/listings", server.uri()), Duration::from_secs(5))
        .expect("client builds")
}

async fn mount(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/v3/listings"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Success
// ============================================================================

#[tokio::test]
async fn test_fetch_returns_listings_in_payload_order() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, ResponseTemplate::new(200).set_body_string(TWO_LISTINGS)).await;

    let source = source_for(&mock_server).await;
    let listings = source.fetch_listings().await.unwrap();

    let ids: Vec<_> = listings.iter().map(|l| l.id.clone()).collect();
    assert_eq!(ids, vec![ListingId::Int(1), ListingId::Int(2)]);
    assert_eq!(listings[0].title, "강남역 원룸");
    assert_eq!(listings[1].image_url, "https://img.example/2.jpg");
    assert_eq!(listings[1].lat, 37.2);
}

#[tokio::test]
async fn test_fetch_accepts_empty_batch() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, ResponseTemplate::new(200).set_body_string(r#"{"items": []}"#)).await;

    let source = source_for(&mock_server).await;
    assert!(source.fetch_listings().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fetch_accepts_string_ids() {
    let mock_server = MockServer::start().await;
    let body = r#"{"items": [{"id": "h-7", "title": "t", "price": "p", "imageUrl": "u", "lat": 1.0, "lng": 2.0}]}"#;
    mount(&mock_server, ResponseTemplate::new(200).set_body_string(body)).await;

    let source = source_for(&mock_server).await;
    let listings = source.fetch_listings().await.unwrap();
    assert_eq!(listings[0].id, ListingId::Text("h-7".into()));
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_fetch_non_success_status_is_api_error() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, ResponseTemplate::new(404).set_body_string("Not Found")).await;

    let source = source_for(&mock_server).await;
    let result = source.fetch_listings().await;

    match result {
        Err(FetchError::Api { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not Found");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, ResponseTemplate::new(200).set_body_string("{\"items\": [{\"id\": 1}]}")).await;

    let source = source_for(&mock_server).await;
    assert!(matches!(source.fetch_listings().await, Err(FetchError::Parse(_))));
}

#[tokio::test]
async fn test_fetch_missing_items_is_parse_error() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, ResponseTemplate::new(200).set_body_string("{\"houses\": []}")).await;

    let source = source_for(&mock_server).await;
    assert!(matches!(source.fetch_listings().await, Err(FetchError::Parse(_))));
}

#[tokio::test]
async fn test_fetch_timeout_is_network_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/listings"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(TWO_LISTINGS)
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let source = HttpListingSource::new(
        format!("{}/v3/listings", mock_server.uri()),
        Duration::from_millis(50),
    )
    .unwrap();
    assert!(matches!(source.fetch_listings().await, Err(FetchError::Network(_))));
}

#[tokio::test]
async fn test_invalid_url_is_config_error() {
    let source = HttpListingSource::new("not a url".to_string(), Duration::from_secs(1)).unwrap();
    assert!(matches!(source.fetch_listings().await, Err(FetchError::Config(_))));
}
