//! # Gradients
//!
//! Continuous and banded color gradients over the unit interval.
//!
//! A gradient is built once from an ordered list of color stops and then
//! queried once per pixel or column. Stops are evenly spaced: stop `i` of
//! `n` sits at `i / (n - 1)`. Interpolation is linear in straight sRGB
//! component space.
//!
//! ```text
//! stops:   #ff0000        #00ff00        #0000ff
//! t:       0.0            0.5            1.0
//!          |--------------|--------------|
//! ```
//!
//! The continuous [`Linear`] gradient is built with `colorgrad`. Banded
//! variants are decorators: [`Sharp`] wraps any other [`Gradient`]
//! and quantizes `t` before delegating to it.
//!
//! ## Example
//!
//! ```
//! use huefield::gradient::{self, Gradient};
//!
//! let grad = gradient::build(&["#ff0000", "#0000ff"])?;
//! assert_eq!(grad.pixel_at(0.0).0, [255, 0, 0, 255]);
//! assert_eq!(grad.pixel_at(1.0).0, [0, 0, 255, 255]);
//!
//! let banded = gradient::sharpen(grad, 4, 0.0);
//! assert_eq!(banded.pixel_at(0.1).0, [255, 0, 0, 255]);
//! # Ok::<(), huefield::HuefieldError>(())
//! ```

mod sharp;

pub use colorgrad::Color;
pub use sharp::{Sharp, sharpen};

use std::fmt;

use image::Rgba;

use crate::error::HuefieldError;
use crate::shader::clamp01;

/// A color function over `t` in [0, 1].
///
/// Implementations clamp `t` into [0, 1]; `NaN` reads as 0.
pub trait Gradient: Send + Sync {
    /// Color at position `t`.
    fn color_at(&self, t: f64) -> Color;

    /// Color at position `t` as an 8-bit RGBA pixel.
    fn pixel_at(&self, t: f64) -> Rgba<u8> {
        to_pixel(&self.color_at(t))
    }
}

impl<G: Gradient + ?Sized> Gradient for Box<G> {
    fn color_at(&self, t: f64) -> Color {
        (**self).color_at(t)
    }
}

impl<G: Gradient + ?Sized> Gradient for &G {
    fn color_at(&self, t: f64) -> Color {
        (**self).color_at(t)
    }
}

/// Continuous gradient through evenly spaced color stops.
///
/// Backed by a `colorgrad` gradient in its default blend mode (linear RGB).
pub struct Linear {
    inner: colorgrad::Gradient,
    stop_count: usize,
}

impl fmt::Debug for Linear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Linear")
            .field("stop_count", &self.stop_count)
            .finish()
    }
}

impl Gradient for Linear {
    fn color_at(&self, t: f64) -> Color {
        self.inner.at(clamp01(t))
    }
}

/// Parse one color stop.
///
/// Accepts hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), CSS color names,
/// and CSS functional notation. `index` is only used for error reporting.
pub fn parse_color(index: usize, stop: &str) -> Result<Color, HuefieldError> {
    Color::from_html(stop.trim()).map_err(|e| HuefieldError::ColorParse {
        index,
        stop: stop.to_string(),
        reason: e.to_string(),
    })
}

/// Build a continuous gradient from color stop strings.
///
/// Every stop is parsed first so a failure names the offending stop; any
/// unparseable stop fails the whole build.
pub fn build<S: AsRef<str>>(stops: &[S]) -> Result<Linear, HuefieldError> {
    if stops.is_empty() {
        return Err(HuefieldError::EmptyColorStops);
    }

    let mut colors = stops
        .iter()
        .enumerate()
        .map(|(i, s)| parse_color(i, s.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    // A lone stop becomes a flat two-stop gradient
    if colors.len() == 1 {
        colors.push(colors[0].clone());
    }

    let inner = colorgrad::CustomGradient::new()
        .colors(&colors)
        .build()
        .map_err(|e| HuefieldError::ColorParse {
            index: 0,
            stop: stops
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join(", "),
            reason: e.to_string(),
        })?;

    Ok(Linear {
        inner,
        stop_count: stops.len(),
    })
}

/// Round a color to an 8-bit RGBA pixel.
#[inline]
pub fn to_pixel(color: &Color) -> Rgba<u8> {
    let channel = |v: f64| (clamp01(v) * 255.0).round() as u8;
    Rgba([
        channel(color.r),
        channel(color.g),
        channel(color.b),
        channel(color.a),
    ])
}
