//! Coordinate transformation functions.

use std::f64::consts::PI;

/// Rotate a point around the origin.
///
/// # Parameters
/// - `x`, `y`: Point coordinates
/// - `angle`: Rotation angle in radians
///
/// # Returns
/// Rotated (x, y) coordinates
#[inline]
pub fn rotate(x: f64, y: f64, angle: f64) -> (f64, f64) {
    let (sin_a, cos_a) = angle.sin_cos();
    (x * cos_a - y * sin_a, x * sin_a + y * cos_a)
}

/// Rotate a point around the origin (angle in degrees).
///
/// Multiples of 90 degrees use exact sine/cosine values so that quarter
/// turns land on pixel centers without rounding drift.
#[inline]
pub fn rotate_deg(x: f64, y: f64, angle_deg: f64) -> (f64, f64) {
    let normalized = angle_deg.rem_euclid(360.0);
    match normalized {
        a if a == 0.0 => (x, y),
        a if a == 90.0 => (-y, x),
        a if a == 180.0 => (-x, -y),
        a if a == 270.0 => (y, -x),
        _ => rotate(x, y, angle_deg * PI / 180.0),
    }
}

/// Convert pixel coordinates to center-relative coordinates.
///
/// Maps (0, 0) to (-width/2, -height/2) and (width, height) to (width/2, height/2).
#[inline]
pub fn center_coords(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    (x - width / 2.0, y - height / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_90() {
        let (x, y) = rotate(1.0, 0.0, PI / 2.0);
        assert!(x.abs() < 1e-12);
        assert!((y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_180() {
        let (x, y) = rotate(1.0, 0.0, PI);
        assert!((x + 1.0).abs() < 1e-12);
        assert!(y.abs() < 1e-12);
    }

    #[test]
    fn test_rotate_deg_quarter_turns_exact() {
        assert_eq!(rotate_deg(3.0, 4.0, 0.0), (3.0, 4.0));
        assert_eq!(rotate_deg(3.0, 4.0, 360.0), (3.0, 4.0));
        assert_eq!(rotate_deg(3.0, 4.0, 90.0), (-4.0, 3.0));
        assert_eq!(rotate_deg(3.0, 4.0, -90.0), (4.0, -3.0));
        assert_eq!(rotate_deg(3.0, 4.0, 180.0), (-3.0, -4.0));
    }

    #[test]
    fn test_rotate_deg_matches_radians() {
        let (x1, y1) = rotate_deg(2.0, 1.0, 30.0);
        let (x2, y2) = rotate(2.0, 1.0, PI / 6.0);
        assert!((x1 - x2).abs() < 1e-12);
        assert!((y1 - y2).abs() < 1e-12);
    }

    #[test]
    fn test_center_coords() {
        let (cx, cy) = center_coords(50.0, 50.0, 100.0, 100.0);
        assert!(cx.abs() < 1e-12);
        assert!(cy.abs() < 1e-12);
    }
}
