//! # Huefield - Gradient Image Renderer
//!
//! Huefield renders raster gradient images from a list of color stops in
//! three styles:
//!
//! - **Basic**: left-to-right linear gradient
//! - **Tilted**: the basic gradient rotated by any angle, with no exposed corners
//! - **Noise**: a banded gradient sampled through seeded coherent noise
//!
//! ## Quick Start
//!
//! ```
//! use huefield::render::{self, RenderOptions};
//!
//! let options = RenderOptions::new(320, 200, "tilted", ["#0b132b", "#5bc0be", "#f4d35e"])
//!     .tilt_angle(30.0);
//!
//! let img = render::draw(&options)?;
//! assert_eq!(img.dimensions(), (320, 200));
//!
//! // The caller owns encoding:
//! // img.save("gradient.png")?;
//! # Ok::<(), huefield::error::HuefieldError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`gradient`] | Color stop parsing, continuous and banded gradients |
//! | [`render`] | `draw` entry point and the three style renderers |
//! | [`shader`] | Interpolation, noise, and coordinate primitives |
//! | [`server`] | HTTP preview server |
//! | [`error`] | Error types |
//!
//! ## Pixel Format
//!
//! Output buffers are [`image::RgbaImage`]: 8 bits per channel, origin at the
//! top-left, row-major. Rendering is pure and synchronous; fills run
//! row-parallel on the rayon thread pool.

pub mod error;
pub mod gradient;
pub mod render;
pub mod server;
pub mod shader;

// Re-exports for convenience
pub use error::HuefieldError;
pub use render::{PixelBuffer, RenderOptions, Style, draw};
