/// Tests of the axum routes and the deep form middleware
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
};
use deepform::config::Settings;
use deepform::models::AppState;
use deepform::routes::build_router;
use deepform::deep::DEFAULT_MAX_DEPTH;
use tower::ServiceExt;

const FORM: &str = "application/x-www-form-urlencoded";

fn state() -> AppState {
    AppState::new(Settings::default())
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn encode_field(field_name: &str, payload: &str) -> String {
    format!("{}={}", urlencoding::encode(field_name), urlencoding::encode(payload))
}

fn post(path: &str, content_type: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_receive_attaches_nested_object() {
    let body = encode_field("deepFormData", r#"{"person":{"langs":["en","fr"]}}"#);
    let resp = build_router(state()).oneshot(post("/receive", FORM, body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json, serde_json::json!({"person": {"langs": ["en", "fr"]}}));
}

#[tokio::test]
async fn test_receive_passes_through_without_field() {
    let resp = build_router(state())
        .oneshot(post("/receive", FORM, "name=Ada".to_string()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "null");
}

#[tokio::test]
async fn test_receive_ignores_other_content_types() {
    let body = encode_field("deepFormData", "{not json");
    let resp = build_router(state())
        .oneshot(post("/receive", "text/plain", body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "null");
}

#[tokio::test]
async fn test_receive_rejects_malformed_payload() {
    let body = encode_field("deepFormData", "{not json");
    let resp = build_router(state()).oneshot(post("/receive", FORM, body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_receive_rejects_non_string_leaves() {
    let body = encode_field("deepFormData", r#"{"age":42}"#);
    let resp = build_router(state()).oneshot(post("/receive", FORM, body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_custom_field_name() {
    let settings = Settings {
        field_name: "payload".to_string(),
        ..Settings::default()
    };
    let body = encode_field("payload", r#"{"a":"b"}"#);
    let resp = build_router(AppState::new(settings))
        .oneshot(post("/receive", FORM, body))
        .await
        .unwrap();
    assert_eq!(body_string(resp).await, r#"{"a":"b"}"#);
}

#[tokio::test]
async fn test_body_over_limit_is_rejected() {
    let settings = Settings {
        body_limit: 16,
        ..Settings::default()
    };
    let body = encode_field("deepFormData", r#"{"a":"a long enough value"}"#);
    let resp = build_router(AppState::new(settings))
        .oneshot(post("/receive", FORM, body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_interrupted_body_is_bad_request() {
    let chunks = vec![
        Ok::<_, std::io::Error>(axum::body::Bytes::from("deepFormData=")),
        Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset")),
    ];
    let req = Request::builder()
        .method("POST")
        .uri("/receive")
        .header(CONTENT_TYPE, FORM)
        .body(Body::from_stream(futures_util::stream::iter(chunks)))
        .unwrap();
    let resp = build_router(state()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_relay_renders_self_submitting_form() {
    let resp = build_router(state())
        .oneshot(post(
            "/relay",
            FORM,
            "person.name=Ada&person.languages=en&person.languages=fr".to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    assert!(html.contains(r#"method="post""#));
    assert!(html.contains(r#"name="deepFormData""#));
    assert!(html.contains("&quot;languages&quot;:[&quot;en&quot;,&quot;fr&quot;]"));
}

#[tokio::test]
async fn test_relay_rejects_invalid_keys() {
    let resp = build_router(state())
        .oneshot(post("/relay", FORM, "a..b=1".to_string()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_relay_accepts_key_at_depth_limit() {
    let key = vec!["a"; DEFAULT_MAX_DEPTH].join(".");
    let resp = build_router(state())
        .oneshot(post("/relay", FORM, format!("{}=1", key)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_relay_rejects_too_deep_keys() {
    for depth in [DEFAULT_MAX_DEPTH + 1, 200_000] {
        let key = vec!["a"; depth].join(".");
        let resp = build_router(state())
            .oneshot(post("/relay", FORM, format!("{}=1", key)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(resp).await.contains("levels deep"));
    }
}

#[tokio::test]
async fn test_demo_form_page() {
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = build_router(state()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    assert!(html.contains(r#"name="person.languages""#));
}
