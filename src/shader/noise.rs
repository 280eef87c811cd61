//! Hash and noise functions for procedural generation.

/// Integer hash function using bit manipulation.
///
/// Produces a pseudo-random u32 from an input u32. Good for seeding
/// and deriving other random values.
#[inline]
pub fn hash(mut x: u32) -> u32 {
    x = x.wrapping_mul(0x45d9f3b);
    x ^= x >> 16;
    x = x.wrapping_mul(0x45d9f3b);
    x ^= x >> 16;
    x
}

/// Convert a 2D lattice hash to a float in [0, 1].
#[inline]
pub fn hash2_f64(x: u32, y: u32, seed: u32) -> f64 {
    let n = hash(
        seed.wrapping_add(x.wrapping_mul(374761393))
            .wrapping_add(y.wrapping_mul(668265263)),
    );
    f64::from(n) / f64::from(u32::MAX)
}

/// 2D value noise with smooth interpolation.
///
/// Returns a value in [0, 1] that varies smoothly across the plane.
/// Uses bilinear interpolation with smoothstep for continuity.
pub fn noise2d(x: f64, y: f64, seed: u32) -> f64 {
    let x0 = x.floor();
    let y0 = y.floor();
    let xi = x0 as i64 as i32;
    let yi = y0 as i64 as i32;
    let xf = x - x0;
    let yf = y - y0;

    let u = xf * xf * (3.0 - 2.0 * xf);
    let v = yf * yf * (3.0 - 2.0 * yf);

    let h = |ix: i32, iy: i32| -> f64 { hash2_f64(ix as u32, iy as u32, seed) };

    let n00 = h(xi, yi);
    let n10 = h(xi.wrapping_add(1), yi);
    let n01 = h(xi, yi.wrapping_add(1));
    let n11 = h(xi.wrapping_add(1), yi.wrapping_add(1));

    let nx0 = n00 * (1.0 - u) + n10 * u;
    let nx1 = n01 * (1.0 - u) + n11 * u;
    (nx0 * (1.0 - v) + nx1 * v).clamp(0.0, 1.0)
}

/// A seeded, coherent 2D noise field normalized to [0, 1].
///
/// Same seed and coordinates always give the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseField {
    lattice_seed: u32,
}

impl NoiseField {
    /// Create a field from a 64-bit seed.
    ///
    /// The seed runs through the SplitMix64 finalizer, a bijection on 64
    /// bits, and the two halves of the result are XORed into the 32-bit
    /// lattice seed. Seeds that differ only in one half, or by a hashed
    /// offset, land on unrelated lattices.
    pub fn new(seed: i64) -> Self {
        let mut z = seed as u64;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^= z >> 31;
        Self {
            lattice_seed: (z ^ (z >> 32)) as u32,
        }
    }

    /// Sample the field. Always returns a value in [0, 1].
    #[inline]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        noise2d(x, y, self.lattice_seed)
    }
}
