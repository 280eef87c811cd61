//! # Basic Gradient
//!
//! Horizontal gradient: column `x` takes the color at `t = x / width`, so the
//! first column is exactly the first stop and the last column stops one step
//! short of the last stop. Every row is identical.

use image::Rgba;

use super::{PixelBuffer, fill};
use crate::error::HuefieldError;
use crate::gradient::{self, Gradient};

/// Gradient position of column `x` in a `width`-wide image.
#[inline]
pub fn column_t(x: u32, width: u32) -> f64 {
    f64::from(x) / f64::from(width)
}

/// Render a left-to-right gradient.
pub fn render_basic<S: AsRef<str>>(
    width: u32,
    height: u32,
    stops: &[S],
) -> Result<PixelBuffer, HuefieldError> {
    let grad = gradient::build(stops)?;

    let columns: Vec<Rgba<u8>> = (0..width)
        .map(|x| grad.pixel_at(column_t(x, width)))
        .collect();

    Ok(fill(width, height, |x, _| columns[x as usize]))
}
