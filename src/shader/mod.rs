//! # Shader Primitives
//!
//! Scalar building blocks shared by the gradient renderers. These mirror
//! common fragment shader operations and are written against `f64` so they
//! compose with gradient positions without extra casts.
//!
//! ## Categories
//!
//! - [`blend`]: Clamping, linear interpolation, smoothstep
//! - [`noise`]: Hash functions, value noise, seeded [`NoiseField`]
//! - [`transform`]: Rotation and center-relative coordinates
//!
//! ## Example
//!
//! ```rust
//! use huefield::shader::*;
//!
//! let field = NoiseField::new(42);
//! let (cx, cy) = center_coords(10.0, 20.0, 100.0, 100.0);
//! let (rx, ry) = rotate_deg(cx, cy, 30.0);
//! let t = clamp01(field.sample(rx * 0.02, ry * 0.02));
//! assert!((0.0..=1.0).contains(&t));
//! ```

pub mod blend;
pub mod noise;
pub mod transform;

pub use blend::*;
pub use noise::*;
pub use transform::*;
