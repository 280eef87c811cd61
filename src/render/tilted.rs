//! # Tilted Gradient
//!
//! A basic gradient rotated by an arbitrary angle, built as a three-stage
//! pipeline:
//!
//! ```text
//! 1. render basic gradient on a square canvas, side = 1.5 × max(w, h)
//! 2. rotate the canvas about its center (exposed area → opaque black)
//! 3. crop the centered w × h window
//! ```
//!
//! The crop window's half-diagonal is at most `max(w, h) / √2`, inside the
//! rotated square's inscribed radius `0.75 × max(w, h)`. Bilinear sampling
//! reads up to one more pixel outward, so the fill stays out of the output
//! only once that gap of about `0.043 × max(w, h)` covers it, i.e. for
//! `max(w, h)` of roughly 24 and up. Smaller outputs can blend black into
//! edge pixels at some angles; the result is still deterministic. The
//! margin is taken from the larger side for both axes.

use image::{Rgba, imageops};
use tracing::trace;

use super::{PixelBuffer, basic::render_basic, fill};
use crate::error::HuefieldError;
use crate::shader::{center_coords, lerp, rotate_deg};

/// Canvas oversize factor relative to the larger requested dimension.
pub const OVERSIZE: f64 = 1.5;

/// Fill color for canvas area exposed by rotation.
pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Side of the square canvas rendered before rotation.
#[inline]
pub fn canvas_size(width: u32, height: u32) -> u32 {
    (f64::from(width.max(height)) * OVERSIZE) as u32
}

/// Pixel count of the square canvas, computed without narrowing to `u32`.
#[inline]
pub fn canvas_pixels(width: u32, height: u32) -> u64 {
    let side = (f64::from(width.max(height)) * OVERSIZE) as u64;
    side.saturating_mul(side)
}

/// Render a basic gradient rotated by `angle_deg` (counter-clockwise).
pub fn render_tilted<S: AsRef<str>>(
    width: u32,
    height: u32,
    angle_deg: f64,
    stops: &[S],
) -> Result<PixelBuffer, HuefieldError> {
    let size = canvas_size(width, height);
    trace!(width, height, size, angle_deg, "tilted canvas");

    let canvas = render_basic(size, size, stops)?;
    let rotated = rotate_about_center(&canvas, angle_deg, BACKGROUND);
    Ok(crop_center(&rotated, width, height))
}

/// Rotate `src` counter-clockwise about its center, keeping its dimensions.
///
/// Each output pixel samples the source bilinearly; samples outside the
/// source read `background`.
pub fn rotate_about_center(src: &PixelBuffer, angle_deg: f64, background: Rgba<u8>) -> PixelBuffer {
    let (w, h) = src.dimensions();
    let (wf, hf) = (f64::from(w), f64::from(h));

    fill(w, h, |x, y| {
        let (dx, dy) = center_coords(f64::from(x) + 0.5, f64::from(y) + 0.5, wf, hf);
        let (sx, sy) = rotate_deg(dx, dy, angle_deg);
        sample_bilinear(src, sx + wf / 2.0, sy + hf / 2.0, background)
    })
}

/// Bilinear sample at continuous coordinates, where pixel `(i, j)` covers
/// `[i, i+1) × [j, j+1)` and its center is `(i + 0.5, j + 0.5)`.
pub fn sample_bilinear(src: &PixelBuffer, x: f64, y: f64, background: Rgba<u8>) -> Rgba<u8> {
    let (w, h) = src.dimensions();
    let px = x - 0.5;
    let py = y - 0.5;
    let x0 = px.floor();
    let y0 = py.floor();
    let tx = px - x0;
    let ty = py - y0;

    let fetch = |ix: f64, iy: f64| -> Rgba<u8> {
        if ix < 0.0 || iy < 0.0 || ix >= f64::from(w) || iy >= f64::from(h) {
            background
        } else {
            *src.get_pixel(ix as u32, iy as u32)
        }
    };

    let p00 = fetch(x0, y0);
    let p10 = fetch(x0 + 1.0, y0);
    let p01 = fetch(x0, y0 + 1.0);
    let p11 = fetch(x0 + 1.0, y0 + 1.0);

    let mut out = [0u8; 4];
    for (c, slot) in out.iter_mut().enumerate() {
        let top = lerp(f64::from(p00.0[c]), f64::from(p10.0[c]), tx);
        let bottom = lerp(f64::from(p01.0[c]), f64::from(p11.0[c]), tx);
        *slot = lerp(top, bottom, ty).round().clamp(0.0, 255.0) as u8;
    }
    Rgba(out)
}

/// Crop a `width × height` window centered on `img`.
///
/// The window is clamped to the image bounds.
pub fn crop_center(img: &PixelBuffer, width: u32, height: u32) -> PixelBuffer {
    let (w, h) = img.dimensions();
    let width = width.min(w);
    let height = height.min(h);
    let left = w / 2 - width / 2;
    let top = h / 2 - height / 2;
    imageops::crop_imm(img, left, top, width, height).to_image()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STOPS: [&str; 3] = ["#ff0000", "#ffff00", "#0000ff"];

    #[test]
    fn test_canvas_size() {
        assert_eq!(canvas_size(100, 50), 150);
        assert_eq!(canvas_size(50, 100), 150);
        assert_eq!(canvas_size(7, 3), 10); // 10.5 truncates
        assert_eq!(canvas_size(1000, 1), 1500);
    }

    #[test]
    fn test_canvas_pixels() {
        assert_eq!(canvas_pixels(100, 50), 150 * 150);
        assert_eq!(canvas_pixels(4_000_000, 4), 6_000_000 * 6_000_000);
        assert_eq!(canvas_pixels(u32::MAX, 1), u64::MAX);
    }

    #[test]
    fn test_output_dimensions() {
        for angle in [0.0, 17.0, 45.0, 90.0, -33.0, 270.0] {
            let img = render_tilted(60, 25, angle, &STOPS).unwrap();
            assert_eq!(img.dimensions(), (60, 25), "angle {}", angle);
        }
    }

    #[test]
    fn test_zero_angle_is_center_of_oversized_basic() {
        let (w, h) = (40, 30);
        let size = canvas_size(w, h);
        let expected = crop_center(&render_basic(size, size, &STOPS).unwrap(), w, h);
        let actual = render_tilted(w, h, 0.0, &STOPS).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_no_black_fill_visible() {
        // Stops contain no black, so any pure black pixel would be exposed fill
        for angle in [15.0, 30.0, 45.0, 60.0, 135.0, 200.0, 315.0] {
            for (w, h) in [(50, 50), (80, 20), (20, 80)] {
                let img = render_tilted(w, h, angle, &STOPS).unwrap();
                assert!(
                    img.pixels().all(|p| p.0 != [0, 0, 0, 255]),
                    "black fill visible at {}x{} angle {}",
                    w,
                    h,
                    angle
                );
            }
        }
    }

    #[test]
    fn test_small_output_edge_blends_fill() {
        // 3x3 at 45 degrees: the canvas is only 4x4, so the bottom-right
        // pixel samples one row past the rotated square and picks up fill
        let img = render_tilted(3, 3, 45.0, &["#ffffff"]).unwrap();
        assert_eq!(img.get_pixel(2, 2).0, [97, 97, 97, 255]);
        for (x, y, px) in img.enumerate_pixels() {
            if (x, y) != (2, 2) {
                assert_eq!(px.0, [255, 255, 255, 255], "pixel ({}, {})", x, y);
            }
        }
        assert_eq!(img, render_tilted(3, 3, 45.0, &["#ffffff"]).unwrap());
    }

    #[test]
    fn test_quarter_turn_makes_vertical_gradient() {
        let img = render_tilted(30, 30, 90.0, &["#000000", "#ffffff"]).unwrap();
        // Rows are constant after a quarter turn
        for y in 0..30 {
            let first = img.get_pixel(0, y);
            for x in 1..30 {
                assert_eq!(img.get_pixel(x, y), first);
            }
        }
        // Counter-clockwise: the light end moves to the top
        assert!(img.get_pixel(0, 0).0[0] > img.get_pixel(0, 29).0[0]);
    }

    #[test]
    fn test_rotation_background() {
        let src = PixelBuffer::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        let rotated = rotate_about_center(&src, 45.0, Rgba([0, 0, 0, 255]));
        // Corners fall outside the rotated square and blend toward black
        assert!(rotated.get_pixel(0, 0).0[0] < 255);
        assert_eq!(rotated.get_pixel(1, 1).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_crop_center_bounds() {
        let img = PixelBuffer::new(10, 8);
        assert_eq!(crop_center(&img, 4, 2).dimensions(), (4, 2));
        assert_eq!(crop_center(&img, 20, 20).dimensions(), (10, 8));
    }

    #[test]
    fn test_bad_stop_propagates() {
        assert!(matches!(
            render_tilted(10, 10, 30.0, &["nope"]),
            Err(HuefieldError::ColorParse { .. })
        ));
    }
}
