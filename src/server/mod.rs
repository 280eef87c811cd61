//! # HTTP Preview Server
//!
//! Renders gradients over HTTP and returns them as PNG.
//!
//! ## Usage
//!
//! ```bash
//! huefield serve --listen 0.0.0.0:8080
//! curl -X POST localhost:8080/api/render \
//!     -H 'content-type: application/json' \
//!     -d '{"width":320,"height":200,"style":"noise","noiseSeed":7,"colors":["navy","gold"]}' \
//!     -o preview.png
//! ```

mod handlers;
mod state;

pub use handlers::render::encode_png;
pub use state::{AppState, DEFAULT_MAX_PIXELS, ServerConfig};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::HuefieldError;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/styles", get(handlers::render::styles))
        .route("/api/render", post(handlers::render::render))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use huefield::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), huefield::error::HuefieldError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     ..Default::default()
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), HuefieldError> {
    let app = router(Arc::new(AppState::new(config.clone())));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            HuefieldError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    info!(addr = %config.listen_addr, "huefield server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| HuefieldError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    fn app(max_pixels: u64) -> Router {
        router(Arc::new(AppState::new(ServerConfig {
            max_pixels,
            ..Default::default()
        })))
    }

    fn render_request(json: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/render")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_styles() {
        let response = app(DEFAULT_MAX_PIXELS)
            .oneshot(Request::get("/api/styles").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let names: Vec<String> = serde_json::from_slice(&body).unwrap();
        assert_eq!(names, ["basic", "tilted", "noise"]);
    }

    #[tokio::test]
    async fn test_render_png() {
        let response = app(DEFAULT_MAX_PIXELS)
            .oneshot(render_request(
                r##"{"width":12,"height":8,"style":"basic","colors":["#ff0000","#0000ff"]}"##,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let img = image::load_from_memory(&body).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (12, 8));
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
    }

    #[tokio::test]
    async fn test_render_unknown_style() {
        let response = app(DEFAULT_MAX_PIXELS)
            .oneshot(render_request(
                r#"{"width":4,"height":4,"style":"spiral","colors":["red"]}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("spiral"));
    }

    #[tokio::test]
    async fn test_render_too_large() {
        let response = app(100)
            .oneshot(render_request(
                r#"{"width":20,"height":20,"style":"basic","colors":["red"]}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_render_tilted_canvas_counts_against_limit() {
        // 16M pixels of output, but a 6M × 6M rotation canvas
        let response = app(DEFAULT_MAX_PIXELS)
            .oneshot(render_request(
                r#"{"width":4000000,"height":4,"style":"tilted","colors":["red","blue"]}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("too large"));
    }

    #[tokio::test]
    async fn test_render_tilted_within_limit() {
        let response = app(DEFAULT_MAX_PIXELS)
            .oneshot(render_request(
                r#"{"width":64,"height":32,"style":"tilted","tiltAngle":30,"colors":["red","blue"]}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
