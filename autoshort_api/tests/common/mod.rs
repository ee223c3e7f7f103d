#![allow(dead_code)]

use std::net::SocketAddr;

use autoshort_api::{AppState, Config};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use redact::Secret;
use tower::ServiceExt;

pub const APP_URL: &str = "http://localhost:3000";

/// Configuration with no OpenAI key, so generation always uses the
/// built-in defaults, and a short stub delay.
pub fn test_config(token_url: &str) -> Config {
    Config {
        openai_api_key: None,
        openai_model: "gpt-4-turbo-preview".to_string(),
        openai_base_url: None,
        google_client_id: "test-client".to_string(),
        google_client_secret: Secret::new("test-secret".to_string()),
        google_auth_url: "https://accounts.google.com/o/oauth2/v2/auth"
            .to_string(),
        google_token_url: token_url.to_string(),
        youtube_upload_url: "http://127.0.0.1:9/upload".to_string(),
        app_url: APP_URL.to_string(),
        post_delay_ms: 20,
        listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        user_agent: "autoshort-tests".to_string(),
    }
}

pub fn build_test_app(config: Config) -> Router {
    autoshort_api::router(AppState::from_config(config))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Sends a body with no `Content-Type` header, as `curl --data` without
/// `-H` would.
pub async fn post_untyped(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect without Location header")
        .to_str()
        .unwrap()
        .to_string()
}
