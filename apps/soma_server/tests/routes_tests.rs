use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use soma_engine::ephemeris::{EphemerisOracle, OracleError, RawPosition};
use soma_engine::JulianDay;
use soma_server::{create_router, AppState};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

struct StubOracle {
    longitude: Option<f64>,
    calls: AtomicUsize,
}

impl EphemerisOracle for StubOracle {
    fn position(&self, jd: JulianDay, body_id: i32) -> Result<RawPosition, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.longitude
            .map(|longitude| RawPosition {
                longitude,
                latitude: 0.0,
                distance: 1.0,
                speed_lon: 1.0,
            })
            .ok_or(OracleError::CalculationFailed {
                body_id,
                jd,
                message: "ephemeris file missing".to_string(),
            })
    }
}

fn app(longitude: Option<f64>) -> (axum::Router, Arc<StubOracle>) {
    let oracle = Arc::new(StubOracle {
        longitude,
        calls: AtomicUsize::new(0),
    });
    let router = create_router(AppState::new(oracle.clone()), Duration::from_secs(5));
    (router, oracle)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn birth(month: i32) -> Value {
    json!({ "year": 2000, "month": month, "day": 1, "hour": 12.0, "lat": 38.9072, "lon": -77.0369 })
}

#[tokio::test]
async fn test_health_check() {
    let (router, _) = app(Some(0.0));
    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["status"], "SomaClarity is breathing");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_analyze_sun() {
    let (router, oracle) = app(Some(280.36879));
    let response = router.oneshot(post_json("/analyze/sun", birth(1))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["julian_day"], 2_451_545.0);
    assert_eq!(json["sun_longitude_deg"], 280.37);
    assert_eq!(json["zodiac_sign"], "Capricorn");
    assert_eq!(json["energy_profile"], "Variable");
    assert_eq!(oracle.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_invalid_month_is_rejected_before_oracle() {
    let (router, oracle) = app(Some(10.0));
    let response = router.oneshot(post_json("/analyze/sun", birth(13))).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = read_json(response).await;
    assert_eq!(json["kind"], "InvalidDateError");
    assert!(json.get("zodiac_sign").is_none());
    assert_eq!(oracle.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_oracle_failure_is_service_unavailable() {
    let (router, _) = app(None);
    let response = router.oneshot(post_json("/analyze/sun", birth(1))).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = read_json(response).await;
    assert_eq!(json["kind"], "EphemerisUnavailableError");
    assert!(json.get("zodiac_sign").is_none());
}

#[tokio::test]
async fn test_invalid_latitude_is_rejected() {
    let (router, oracle) = app(Some(10.0));
    let body = json!({ "year": 2000, "month": 1, "day": 1, "hour": 12.0, "lat": 123.0, "lon": 0.0 });
    let response = router.oneshot(post_json("/analyze/sun", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = read_json(response).await;
    assert_eq!(json["kind"], "InvalidLocationError");
    assert_eq!(oracle.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_analyze_other_body() {
    let (router, _) = app(Some(-5.0));
    let response = router.oneshot(post_json("/analyze/Moon", birth(1))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["body"], "moon");
    assert_eq!(json["longitude_deg"], 355.0);
    assert_eq!(json["zodiac_sign"], "Pisces");
}

#[tokio::test]
async fn test_unknown_body() {
    let (router, oracle) = app(Some(10.0));
    let response = router.oneshot(post_json("/analyze/vulcan", birth(1))).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = read_json(response).await;
    assert_eq!(json["kind"], "EphemerisUnavailableError");
    assert_eq!(oracle.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_overflowing_year_is_invalid_date() {
    let (router, oracle) = app(Some(10.0));
    let body = json!({ "year": 3000000000u64, "month": 1, "day": 1, "hour": 12.0, "lat": 0.0, "lon": 0.0 });
    let response = router.oneshot(post_json("/analyze/sun", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = read_json(response).await;
    assert_eq!(json["kind"], "InvalidDateError");
    assert!(json["message"].as_str().unwrap().contains("year"));
    assert_eq!(oracle.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_field_has_error_shape() {
    let (router, oracle) = app(Some(10.0));
    let body = json!({ "year": 2000, "month": 1, "day": 1, "hour": 12.0, "lat": 0.0 });
    let response = router.oneshot(post_json("/analyze/sun", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = read_json(response).await;
    assert_eq!(json["kind"], "InvalidRequestError");
    assert!(json["message"].as_str().unwrap().contains("lon"));
    assert_eq!(oracle.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_non_numeric_latitude_is_invalid_location() {
    let (router, _) = app(Some(10.0));
    let body = json!({ "year": 2000, "month": 1, "day": 1, "hour": 12.0, "lat": "north", "lon": 0.0 });
    let response = router.oneshot(post_json("/analyze/moon", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = read_json(response).await;
    assert_eq!(json["kind"], "InvalidLocationError");
}

#[tokio::test]
async fn test_malformed_json_has_error_shape() {
    let (router, _) = app(Some(10.0));
    let request = Request::builder()
        .method("POST")
        .uri("/analyze/sun")
        .header("content-type", "application/json")
        .body(Body::from("{\"year\": 2000,"))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = read_json(response).await;
    assert_eq!(json["kind"], "InvalidRequestError");
}

#[tokio::test]
async fn test_missing_content_type_has_error_shape() {
    let (router, _) = app(Some(10.0));
    let request = Request::builder()
        .method("POST")
        .uri("/analyze/sun")
        .body(Body::from(birth(1).to_string()))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let json = read_json(response).await;
    assert_eq!(json["kind"], "InvalidRequestError");
}
