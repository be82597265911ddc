//! Tests for catalog models and service

use super::*;
use crate::error::Error;
use crate::filter::{keys, FilterSet};
use crate::http::{HttpClient, HttpClientConfig};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer) -> BikeService {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    BikeService::new(HttpClient::with_config(config).unwrap())
}

// ============================================================================
// Model Tests
// ============================================================================

#[test]
fn test_raw_bike_lenient_fields() {
    let bike: RawBike = serde_json::from_value(json!({
        "id": 17,
        "name": "Black Widow",
        "brand": "Ducati",
        "registrationYear": 2019,
        "price": "14500",
        "images": ["a.jpg", "b.jpg"],
        "badges": ["turbo", null],
        "tuningStage": "Stage 1",
        "color": "black"
    }))
    .unwrap();

    assert_eq!(bike.id.as_deref(), Some("17"));
    assert_eq!(bike.name.as_deref(), Some("Black Widow"));
    assert_eq!(bike.registration_year.as_deref(), Some("2019"));
    assert_eq!(bike.price, Some(14500.0));
    assert_eq!(bike.badges, Some(vec!["turbo".to_string()]));
    assert_eq!(bike.tuning_stage.as_deref(), Some("Stage 1"));
    assert_eq!(bike.extra.get("color"), Some(&json!("black")));
}

#[test]
fn test_raw_bike_with_both_field_names() {
    let page: Page<RawBike> = serde_json::from_value(json!({
        "data": [
            {"id": "1", "year": 2020, "registrationYear": 2019},
            {"_id": "abc", "id": "abc", "title": "Scrambler", "name": "Scrambler 800"}
        ]
    }))
    .unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.data[0].year.as_deref(), Some("2020"));
    assert_eq!(page.data[0].registration_year.as_deref(), Some("2019"));
    assert_eq!(page.data[1].id.as_deref(), Some("abc"));
    assert_eq!(page.data[1].document_id.as_deref(), Some("abc"));
    assert_eq!(page.data[1].name.as_deref(), Some("Scrambler 800"));
}

#[test]
fn test_raw_bike_badges_lenient() {
    let bike: RawBike = serde_json::from_value(json!({
        "badges": ["turbo", 3, null, {"label": "x"}, true]
    }))
    .unwrap();
    assert_eq!(bike.badges, Some(vec!["turbo".to_string(), "3".to_string()]));

    let bike: RawBike = serde_json::from_value(json!({"badges": "turbo"})).unwrap();
    assert_eq!(bike.badges, None);

    let page: Page<RawBike> = serde_json::from_value(json!({
        "data": [{"id": "a", "badges": [1, 2]}, {"id": "b"}]
    }))
    .unwrap();
    assert_eq!(page.len(), 2);
}

#[test]
fn test_raw_bike_empty_object() {
    let bike: RawBike = serde_json::from_value(json!({})).unwrap();
    assert_eq!(bike, RawBike::default());
}

#[test]
fn test_page_next_cursor() {
    let page: Page<RawBike> = serde_json::from_value(json!({
        "data": [{"id": "a"}],
        "pagination": {"nextCursor": "c1"}
    }))
    .unwrap();
    assert_eq!(page.next_cursor(), Some("c1"));
    assert!(!page.is_last());
    assert_eq!(page.len(), 1);

    let last: Page<RawBike> = serde_json::from_value(json!({"data": []})).unwrap();
    assert!(last.is_last());
    assert!(last.is_empty());

    let empty_cursor: Page<RawBike> = serde_json::from_value(json!({
        "data": [],
        "pagination": {"nextCursor": ""}
    }))
    .unwrap();
    assert!(empty_cursor.is_last());
}

#[test]
fn test_filter_options_defaults_and_shapes() {
    let options: FilterOptions = serde_json::from_value(json!({
        "brands": ["BMW", "KTM"],
        "years": [2020, "2021"],
        "priceRange": {"min": 1000, "max": "90000"},
        "sortOptions": ["newest", {"value": "price_asc", "label": "Price: low to high"}]
    }))
    .unwrap();

    assert_eq!(options.brands, vec!["BMW", "KTM"]);
    assert_eq!(options.years, vec!["2020", "2021"]);
    let bounds = options.price_range.unwrap();
    assert_eq!(bounds.min, Some(1000.0));
    assert_eq!(bounds.max, Some(90000.0));
    assert_eq!(options.sort_options[0].value(), "newest");
    assert_eq!(options.sort_options[0].label(), "newest");
    assert_eq!(options.sort_options[1].value(), "price_asc");
    assert_eq!(options.sort_options[1].label(), "Price: low to high");

    let empty: FilterOptions = serde_json::from_value(json!({})).unwrap();
    assert_eq!(empty, FilterOptions::default());
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
async fn test_list_browse_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bikes"))
        .and(query_param("brands", "bmw,ducati"))
        .and(query_param("minPrice", "100"))
        .and(query_param("registrationYear", "2020"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "1"}, {"id": "2"}],
            "pagination": {"nextCursor": "c1"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filters = FilterSet::new()
        .with(keys::BRAND, vec!["bmw", "ducati"])
        .with(keys::PRICE, "100-")
        .with(keys::YEAR, "2020");

    let page = service_for(&server).list(&filters, None).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page.next_cursor(), Some("c1"));
}

#[tokio::test]
async fn test_list_search_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bikes/search"))
        .and(query_param("q", "bobber"))
        .and(query_param("cursor", "c7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "9"}],
            "pagination": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filters = FilterSet::new()
        .with(keys::QUERY, "bobber")
        .with(keys::BRAND, "ignored");

    let page = service_for(&server).list(&filters, Some("c7")).await.unwrap();
    assert_eq!(page.len(), 1);
    assert!(page.is_last());
}

#[tokio::test]
async fn test_list_validation_never_hits_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let filters = FilterSet::new().with(keys::PRICE, "cheap");
    let err = service_for(&server).list(&filters, None).await.unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[tokio::test]
async fn test_filter_options_cached() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bikes/filters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"brands": ["Triumph"]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let first = service.filter_options().await.unwrap();
    let second = service.filter_options().await.unwrap();

    assert_eq!(first.brands, vec!["Triumph"]);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_filter_options_refetched_after_ttl_or_invalidate() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bikes/filters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"brands": []}
        })))
        .expect(3)
        .mount(&server)
        .await;

    let service = service_for(&server).with_filter_options_ttl(Duration::ZERO);
    service.filter_options().await.unwrap();
    service.filter_options().await.unwrap();

    let service = service.with_filter_options_ttl(Duration::from_secs(3600));
    service.invalidate_filter_options().await;
    service.filter_options().await.unwrap();
}

#[tokio::test]
async fn test_filter_options_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bikes/filters"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "filters unavailable"
        })))
        .mount(&server)
        .await;

    let err = service_for(&server).filter_options().await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 500: filters unavailable");
}
