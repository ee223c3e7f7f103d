use std::net::SocketAddr;

use axum::{
    Json, Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::TraceLayer,
};

/// Serves an Axum router on the given address until the process is stopped.
///
/// # Errors
///
/// Returns an error if the server fails to bind to the address or the
/// listener fails while serving.
pub async fn run_app(
    app: Router,
    addr: SocketAddr,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting server on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}

/// JSON 404 used as the fallback of every router.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "application/json")],
        Json(json!({
            "message": "not found",
        })),
    )
}

type RequestLogger = fn(&Request<Body>, &tracing::Span);

/// Trace layer that logs every incoming request.
#[must_use]
pub fn trace_layer()
-> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, tower_http::trace::DefaultMakeSpan, RequestLogger>
{
    TraceLayer::new_for_http().on_request(log_request as RequestLogger)
}

fn log_request(request: &Request<Body>, _: &tracing::Span) {
    tracing::info!("received request: {}", request_line(request));
}

/// Method and path only. Query strings can carry OAuth codes and are not
/// logged.
fn request_line(request: &Request<Body>) -> String {
    format!("{} {}", request.method(), request.uri().path())
}
