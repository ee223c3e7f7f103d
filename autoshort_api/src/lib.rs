/*!
 * HTTP surface of AutoShort.
 *
 * `POST /api/generate` runs the content pipeline, `POST /api/post` fans a
 * video out to the selected platforms, and the `/api/auth/youtube` routes
 * implement the Google OAuth authorization-code flow.
 */
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer};

pub mod error;
pub mod handlers;
pub mod structs;

pub use structs::{AppState, Config};

pub fn router(state: AppState) -> Router {
    let compression_layer = CompressionLayer::new().gzip(true).deflate(true);

    Router::new()
        .route("/api/generate", post(handlers::generate::generate_handler))
        .route("/api/post", post(handlers::post::post_handler))
        .route(
            "/api/auth/youtube",
            get(handlers::youtube::youtube_auth_handler),
        )
        .route(
            "/api/auth/youtube/callback",
            get(handlers::youtube::youtube_callback_handler),
        )
        .route(
            "/api/placeholder-video",
            get(handlers::placeholder::placeholder_video_handler),
        )
        .fallback(as_axum::not_found)
        .layer(as_axum::trace_layer())
        .layer(compression_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
