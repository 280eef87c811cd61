//! # Rendering Module
//!
//! Turns [`RenderOptions`] into a fully rendered RGBA pixel buffer.
//!
//! ## Styles
//!
//! | Style | Module | Description |
//! |-------|--------|-------------|
//! | `basic` | [`basic`] | Left-to-right gradient, constant down each column |
//! | `tilted` | [`tilted`] | Basic gradient rotated by an angle, rendered oversize then cropped |
//! | `noise` | [`noise`] | Banded gradient sampled through coherent value noise |
//!
//! ## Usage Example
//!
//! ```
//! use huefield::render::{self, RenderOptions};
//!
//! let options = RenderOptions::new(100, 50, "basic", ["#ff0000", "#0000ff"]);
//! let img = render::draw(&options)?;
//! assert_eq!(img.dimensions(), (100, 50));
//! assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
//! # Ok::<(), huefield::HuefieldError>(())
//! ```
//!
//! ## Cost
//!
//! Every style is O(width × height) in time and memory. The tilted style
//! also allocates a square canvas of side `1.5 × max(width, height)`.

pub mod basic;
pub mod noise;
pub mod tilted;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use image::{Rgba, RgbaImage};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::HuefieldError;

pub use basic::render_basic;
pub use noise::render_noise;
pub use tilted::render_tilted;

/// Output of a render call: 8-bit RGBA, origin top-left, row-major.
pub type PixelBuffer = RgbaImage;

/// All recognized style names, in display order.
pub const STYLES: &[&str] = &["basic", "tilted", "noise"];

/// Gradient style selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Basic,
    Tilted,
    Noise,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Basic, Style::Tilted, Style::Noise];

    pub fn name(self) -> &'static str {
        match self {
            Style::Basic => "basic",
            Style::Tilted => "tilted",
            Style::Noise => "noise",
        }
    }
}

impl FromStr for Style {
    type Err = HuefieldError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Style::Basic),
            "tilted" => Ok(Style::Tilted),
            "noise" => Ok(Style::Noise),
            _ => Err(HuefieldError::UnknownStyle(s.to_string())),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input to a single [`draw`] call.
///
/// `style` stays a string so that [`draw`] can validate dimensions and
/// color stops before rejecting an unknown style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub style: String,
    /// Rotation in degrees, counter-clockwise. Only used by `tilted`.
    #[serde(default)]
    pub tilt_angle: f64,
    /// Noise seed. Only used by `noise`.
    #[serde(default)]
    pub noise_seed: i64,
    /// Ordered color stops (hex or CSS names).
    pub colors: Vec<String>,
}

impl RenderOptions {
    pub fn new<I, S>(width: u32, height: u32, style: impl Into<String>, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            width,
            height,
            style: style.into(),
            tilt_angle: 0.0,
            noise_seed: 0,
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tilt_angle(mut self, degrees: f64) -> Self {
        self.tilt_angle = degrees;
        self
    }

    pub fn noise_seed(mut self, seed: i64) -> Self {
        self.noise_seed = seed;
        self
    }

    /// Largest single pixel buffer a render of these options allocates.
    ///
    /// The tilted style renders on an oversized square canvas, so a long
    /// thin image can need far more pixels than `width × height`.
    pub fn peak_pixels(&self) -> u64 {
        let area = u64::from(self.width) * u64::from(self.height);
        match self.style.parse::<Style>() {
            Ok(Style::Tilted) => area.max(tilted::canvas_pixels(self.width, self.height)),
            _ => area,
        }
    }

    /// Load options from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, HuefieldError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            HuefieldError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&text).map_err(|e| {
            HuefieldError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}

/// Validate `options` and render the requested style.
///
/// Checks run in a fixed order: dimensions, then color stops, then style.
/// No partial buffer is ever returned.
pub fn draw(options: &RenderOptions) -> Result<PixelBuffer, HuefieldError> {
    let (width, height) = (options.width, options.height);
    let colors = options.colors.as_slice();

    if width == 0 || height == 0 {
        return Err(HuefieldError::InvalidDimensions { width, height });
    }
    if colors.is_empty() {
        return Err(HuefieldError::EmptyColorStops);
    }
    let style: Style = options.style.parse()?;

    debug!(%style, width, height, stops = colors.len(), "rendering gradient");

    match style {
        Style::Basic => render_basic(width, height, colors),
        Style::Tilted => render_tilted(width, height, options.tilt_angle, colors),
        Style::Noise => render_noise(width, height, options.noise_seed, colors),
    }
}

/// Fill a new buffer by evaluating `shade` at every pixel.
///
/// Rows are filled in parallel; `shade` must not depend on fill order.
pub fn fill<F>(width: u32, height: u32, shade: F) -> PixelBuffer
where
    F: Fn(u32, u32) -> Rgba<u8> + Sync,
{
    let mut img = RgbaImage::new(width, height);
    let row_len = width as usize * 4;
    if row_len == 0 || height == 0 {
        return img;
    }

    img.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                px.copy_from_slice(&shade(x as u32, y as u32).0);
            }
        });

    img
}
