use axum::body::Body;
use axum::http::{Request, StatusCode};
use pokedex::{build_app, AppConfig};
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let app = build_app(&AppConfig::default()).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health-check")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["status"], "ok");
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);

    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert!(timestamp.ends_with('Z'));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = build_app(&AppConfig::default()).unwrap();

    let response = app
        .oneshot(Request::builder().uri("/pokedex").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
