//! Banded ("sharp") gradients.
//!
//! Splits [0, 1] into `bands` equal segments and paints each segment with a
//! single color taken from the wrapped gradient. Band `i` of `n` uses the
//! base color at `i / (n - 1)`, so the outer bands keep the first and last
//! stop colors. `smoothness` sets the width of the blend zone centered on
//! each interior boundary, as a fraction of one band:
//!
//! ```text
//! smoothness = 0.0   ████░░░░▓▓▓▓     hard steps
//! smoothness = 0.2   ████▒░░░▒▓▓▓     narrow smoothstep blend at edges
//! ```

use super::{Color, Gradient};
use crate::shader::{clamp01, lerp, smoothstep};

/// A gradient quantized into discrete color bands.
#[derive(Debug, Clone)]
pub struct Sharp<G> {
    inner: G,
    bands: usize,
    smoothness: f64,
}

impl<G: Gradient> Sharp<G> {
    /// Wrap `inner`. `bands == 0` is treated as 1, `smoothness` is clamped
    /// to [0, 1].
    pub fn new(inner: G, bands: usize, smoothness: f64) -> Self {
        Self {
            inner,
            bands: bands.max(1),
            smoothness: clamp01(smoothness),
        }
    }

    fn band_color(&self, band: usize) -> Color {
        if self.bands == 1 {
            return self.inner.color_at(0.5);
        }
        self.inner.color_at(band as f64 / (self.bands - 1) as f64)
    }
}

impl<G: Gradient> Gradient for Sharp<G> {
    fn color_at(&self, t: f64) -> Color {
        let t = clamp01(t);
        let n = self.bands;
        let scaled = t * n as f64;
        let band = (scaled.floor() as usize).min(n - 1);
        let frac = scaled - band as f64;
        let half = self.smoothness / 2.0;

        if half > 0.0 {
            if frac < half && band > 0 {
                let s = smoothstep(-half, half, frac);
                return mix(&self.band_color(band - 1), &self.band_color(band), s);
            }
            if frac > 1.0 - half && band + 1 < n {
                let s = smoothstep(-half, half, frac - 1.0);
                return mix(&self.band_color(band), &self.band_color(band + 1), s);
            }
        }

        self.band_color(band)
    }
}

/// Component-wise linear blend of two band colors.
fn mix(a: &Color, b: &Color, t: f64) -> Color {
    Color::new(
        lerp(a.r, b.r, t),
        lerp(a.g, b.g, t),
        lerp(a.b, b.b, t),
        lerp(a.a, b.a, t),
    )
}

/// Quantize `gradient` into `bands` discrete colors.
pub fn sharpen<G: Gradient>(gradient: G, bands: usize, smoothness: f64) -> Sharp<G> {
    Sharp::new(gradient, bands, smoothness)
}
