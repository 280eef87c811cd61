//! Gradient render API handlers.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::{io::Cursor, sync::Arc};
use tracing::warn;

use crate::{
    error::HuefieldError,
    render::{self, PixelBuffer, RenderOptions},
};

use super::super::state::AppState;

/// GET /api/styles - List recognized style names.
pub async fn styles() -> Json<Vec<&'static str>> {
    Json(render::STYLES.to_vec())
}

/// POST /api/render - Render options to a PNG.
pub async fn render(
    State(state): State<Arc<AppState>>,
    Json(options): Json<RenderOptions>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let pixels = options.peak_pixels();
    if pixels > state.config.max_pixels {
        return Err((
            StatusCode::BAD_REQUEST,
            format!(
                "Image too large: {}x{} {} needs {} pixels, limit is {}",
                options.width, options.height, options.style, pixels, state.config.max_pixels
            ),
        ));
    }

    // Rendering is CPU-bound; keep it off the async workers
    let img = tokio::task::spawn_blocking(move || render::draw(&options))
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Render task failed: {}", e),
            )
        })?
        .map_err(|e| {
            warn!(error = %e, "render rejected");
            (StatusCode::BAD_REQUEST, e.to_string())
        })?;

    let png_bytes =
        encode_png(&img).map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png_bytes))
}

/// Encode a pixel buffer as PNG bytes.
pub fn encode_png(img: &PixelBuffer) -> Result<Vec<u8>, HuefieldError> {
    let mut png_bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut png_bytes), image::ImageFormat::Png)
        .map_err(|e| HuefieldError::Image(format!("PNG encoding failed: {}", e)))?;
    Ok(png_bytes)
}
