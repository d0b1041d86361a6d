use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use templefinder_core::FacilityConfig;
use templefinder_geocode::ZippopotamClient;
use templefinder_search::{InMemoryFacilityRepository, LocationSearchService};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn facility(city: &str, address: &str) -> FacilityConfig {
    FacilityConfig {
        city: city.to_string(),
        address: address.to_string(),
        ..FacilityConfig::default()
    }
}

fn fixture_repository() -> InMemoryFacilityRepository {
    let mut repo = InMemoryFacilityRepository::default();
    repo.insert(facility(
        "Philadelphia",
        "1561 Woodbourne Road, Levittown, PA 19057 USA",
    ));
    repo.insert(facility(
        "New York",
        "43-38 Bowne Street, Flushing, NY 11355 USA",
    ));
    repo.insert(facility(
        "Edison",
        "2500 Woodbridge Avenue, Edison, NJ 08817 USA",
    ));
    repo.insert(facility(
        "Los Angeles",
        "15100 Fairfield Ranch Rd., Chino Hills, CA 91709 USA",
    ));
    repo
}

fn app_with_geocoder(base_url: &str, rate_limit: RateLimitState) -> Router {
    let geocoder =
        ZippopotamClient::with_base_url(base_url, "us", 2, "templefinder-tests").expect("client");
    let state = AppState {
        search: Arc::new(LocationSearchService::new(fixture_repository(), geocoder)),
        default_radius_miles: 50.0,
    };
    build_app(state, rate_limit)
}

// Nothing listens on loopback port 9, so any geocoder call fails fast.
fn test_app() -> Router {
    app_with_geocoder("http://127.0.0.1:9", RateLimitState::per_minute(1_000))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    serde_json::from_slice(&body).expect("json parse")
}

fn cities(json: &serde_json::Value) -> Vec<String> {
    json["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|row| row["city"].as_str().expect("city").to_string())
        .collect()
}

#[tokio::test]
async fn health_reports_facility_count() {
    let response = test_app().oneshot(get("/api/health")).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["facilities"], 4);
    assert!(json["meta"]["request_id"].is_string());
}

#[tokio::test]
async fn incoming_request_id_is_echoed() {
    let request = Request::builder()
        .uri("/api/health")
        .header("x-request-id", "req-123")
        .body(Body::empty())
        .expect("request");
    let response = test_app().oneshot(request).await.expect("response");

    assert_eq!(
        response.headers().get("x-request-id").and_then(|v| v.to_str().ok()),
        Some("req-123")
    );
    let json = body_json(response).await;
    assert_eq!(json["meta"]["request_id"], "req-123");
}

#[tokio::test]
async fn list_returns_all_facilities_in_order() {
    let response = test_app().oneshot(get("/api/temples")).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        cities(&json),
        vec!["Philadelphia", "New York", "Edison", "Los Angeles"]
    );
    assert_eq!(json["data"][1]["id"], 2);
    assert!(json["data"][0].get("operatingHours").is_some());
}

#[tokio::test]
async fn get_temple_by_id() {
    let response = test_app().oneshot(get("/api/temples/3")).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["city"], "Edison");
}

#[tokio::test]
async fn unknown_temple_is_not_found() {
    let response = test_app().oneshot(get("/api/temples/99")).await.expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn non_numeric_temple_id_is_bad_request() {
    let response = test_app()
        .oneshot(get("/api/temples/abc"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "bad_request");
}

#[tokio::test]
async fn coordinate_search_sorts_by_distance() {
    let response = test_app()
        .oneshot(post_json(
            "/api/temples/search",
            r#"{"latitude": 40.7128, "longitude": -74.0060, "radius": 150}"#,
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(cities(&json), vec!["New York", "Edison", "Philadelphia"]);
    assert_eq!(json["data"][0]["distance"], 0.0);
    assert_eq!(json["data"][1]["distance"], 25.2);
}

#[tokio::test]
async fn search_uses_configured_default_radius() {
    let response = test_app()
        .oneshot(post_json(
            "/api/temples/search",
            r#"{"latitude": 40.7128, "longitude": -74.0060}"#,
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(cities(&json), vec!["New York", "Edison"]);
}

#[tokio::test]
async fn search_can_sort_by_name() {
    let response = test_app()
        .oneshot(post_json(
            "/api/temples/search?sort=name",
            r#"{"latitude": 40.7128, "longitude": -74.0060, "radius": 150}"#,
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(cities(&json), vec!["Edison", "New York", "Philadelphia"]);
}

#[tokio::test]
async fn unknown_sort_is_validation_error() {
    let response = test_app()
        .oneshot(post_json(
            "/api/temples/search?sort=rating",
            r#"{"latitude": 40.7, "longitude": -74.0}"#,
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn missing_origin_is_validation_error() {
    let response = test_app()
        .oneshot(post_json("/api/temples/search", r#"{"radius": 25}"#))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn malformed_json_is_validation_error() {
    let response = test_app()
        .oneshot(post_json("/api/temples/search", "{not json"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn negative_radius_returns_empty_results() {
    let response = test_app()
        .oneshot(post_json(
            "/api/temples/search",
            r#"{"latitude": 40.7128, "longitude": -74.0060, "radius": -5}"#,
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], serde_json::json!([]));
}

#[tokio::test]
async fn malformed_zipcode_is_validation_error() {
    let response = test_app()
        .oneshot(post_json("/api/temples/search", r#"{"zipcode": "abcde"}"#))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn unreachable_geocoder_is_location_not_found() {
    let response = test_app()
        .oneshot(post_json("/api/temples/search", r#"{"zipcode": "08817"}"#))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "location_not_found");
}

#[tokio::test]
async fn zipcode_search_geocodes_origin() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/us/08817"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "post code": "08817",
            "places": [{
                "place name": "Edison",
                "latitude": "40.5187",
                "longitude": "-74.4121"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_with_geocoder(&server.uri(), RateLimitState::per_minute(1_000));
    let response = app
        .oneshot(post_json(
            "/api/temples/search",
            r#"{"zipcode": "08817", "radius": 30}"#,
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(cities(&json), vec!["Edison", "New York"]);
    assert_eq!(json["data"][0]["distance"], 0.0);
}

#[tokio::test]
async fn rate_limit_applies_to_temple_routes_only() {
    let app = app_with_geocoder("http://127.0.0.1:9", RateLimitState::per_minute(1));

    let first = app
        .clone()
        .oneshot(get("/api/temples"))
        .await
        .expect("response");
    assert_eq!(first.status(), StatusCode::OK);

    let limited = Request::builder()
        .uri("/api/temples")
        .header("x-request-id", "req-429")
        .body(Body::empty())
        .expect("request");
    let second = app.clone().oneshot(limited).await.expect("response");
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    let json = body_json(second).await;
    assert_eq!(json["error"]["code"], "rate_limited");
    assert_eq!(json["meta"]["request_id"], "req-429");
    assert!(json["meta"]["timestamp"].is_string());

    let health = app.oneshot(get("/api/health")).await.expect("response");
    assert_eq!(health.status(), StatusCode::OK);
}

#[test]
fn api_error_codes_map_to_statuses() {
    use axum::response::IntoResponse;

    let cases = [
        ("not_found", StatusCode::NOT_FOUND),
        ("bad_request", StatusCode::BAD_REQUEST),
        ("validation_error", StatusCode::BAD_REQUEST),
        ("location_not_found", StatusCode::BAD_REQUEST),
        ("rate_limited", StatusCode::TOO_MANY_REQUESTS),
        ("internal_error", StatusCode::INTERNAL_SERVER_ERROR),
    ];
    for (code, status) in cases {
        let response = ApiError::new("req", code, "msg").into_response();
        assert_eq!(response.status(), status, "code {code}");
    }
}
