//! # Noise Gradient
//!
//! Organic, blotchy color fields. Each pixel samples a seeded value-noise
//! field and looks the result up in a 12-band sharpened gradient, so the
//! image shows distinct color islands with short blended edges instead of a
//! smooth ramp.
//!
//! ## Formula
//!
//! ```text
//! t     = noise(x * 0.02, y * 0.02)        // in [0, 1]
//! pixel = sharpen(gradient, 12, 0.2)(t)
//! ```
//!
//! Smaller scales give larger, smoother blobs.

use super::{PixelBuffer, fill};
use crate::error::HuefieldError;
use crate::gradient::{self, Gradient, sharpen};
use crate::shader::NoiseField;

/// Spatial scale applied to pixel coordinates before sampling noise.
pub const NOISE_SCALE: f64 = 0.02;

/// Number of color bands in the sharpened gradient.
pub const NOISE_BANDS: usize = 12;

/// Width of the blend zone between bands, as a fraction of one band.
pub const NOISE_SMOOTHNESS: f64 = 0.2;

/// Render a noise-driven banded gradient.
pub fn render_noise<S: AsRef<str>>(
    width: u32,
    height: u32,
    seed: i64,
    stops: &[S],
) -> Result<PixelBuffer, HuefieldError> {
    let grad = sharpen(gradient::build(stops)?, NOISE_BANDS, NOISE_SMOOTHNESS);
    let field = NoiseField::new(seed);

    Ok(fill(width, height, |x, y| {
        let t = field.sample(f64::from(x) * NOISE_SCALE, f64::from(y) * NOISE_SCALE);
        grad.pixel_at(t)
    }))
}
