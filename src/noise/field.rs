//! Seeded Perlin noise field.
//!
//! Ken Perlin's improved noise: a shuffled permutation table (stored twice so
//! corner lookups never need a second wrap), the quintic fade curve and the
//! 12-direction gradient set. Octaves are summed and renormalized so the
//! fractal result stays in the same range as a single octave.

use noise::NoiseFn;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of distinct lattice hashes before the pattern repeats
pub const TABLE_SIZE: usize = 256;

/// Perlin noise generator over a seeded permutation lattice
///
/// Read-only after construction, so a single instance can be shared across
/// threads and sampled concurrently.
#[derive(Clone, Debug)]
pub struct NoiseField {
    /// Shuffled table followed by an identical copy (`perm[i + 256] == perm[i]`)
    perm: [u8; TABLE_SIZE * 2],
    /// Input coordinates are multiplied by this before lattice lookup
    scale: f64,
    seed: u32,
}

impl NoiseField {
    /// Build a noise field with the given coordinate scale and seed
    ///
    /// Any scale is accepted; zero collapses every input onto the origin
    /// lattice point and produces a constant 0.
    pub fn new(scale: f64, seed: u32) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(u64::from(seed));

        let mut shuffled = [0u8; TABLE_SIZE];
        for (i, slot) in shuffled.iter_mut().enumerate() {
            *slot = i as u8;
        }

        // Fisher-Yates
        for i in (1..TABLE_SIZE).rev() {
            let j = rng.gen_range(0..=i);
            shuffled.swap(i, j);
        }

        let mut perm = [0u8; TABLE_SIZE * 2];
        perm[..TABLE_SIZE].copy_from_slice(&shuffled);
        perm[TABLE_SIZE..].copy_from_slice(&shuffled);

        Self { perm, scale, seed }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// The shuffled permutation, `TABLE_SIZE` entries (first half of the
    /// lookup table)
    pub fn permutation(&self) -> &[u8] {
        &self.perm[..TABLE_SIZE]
    }

    /// Sample a single octave of noise at `(x, y, z) * scale`
    ///
    /// Returns a value in [-1, 1]. NaN coordinates yield NaN.
    pub fn noise(&self, x: f64, y: f64, z: f64) -> f64 {
        let (x, y, z) = (x * self.scale, y * self.scale, z * self.scale);
        let (x0, y0, z0) = (x.floor(), y.floor(), z.floor());

        // Lattice cell, wrapped into the table
        let xi = lattice_index(x0);
        let yi = lattice_index(y0);
        let zi = lattice_index(z0);

        // Position inside the cell, each in [0, 1)
        let xf = x - x0;
        let yf = y - y0;
        let zf = z - z0;

        let u = fade(xf);
        let v = fade(yf);
        let w = fade(zf);

        // Hash the eight cube corners
        let p = &self.perm;
        let a = p[xi] as usize + yi;
        let aa = p[a] as usize + zi;
        let ab = p[a + 1] as usize + zi;
        let b = p[xi + 1] as usize + yi;
        let ba = p[b] as usize + zi;
        let bb = p[b + 1] as usize + zi;

        let near = lerp(
            v,
            lerp(u, grad(p[aa], xf, yf, zf), grad(p[ba], xf - 1.0, yf, zf)),
            lerp(
                u,
                grad(p[ab], xf, yf - 1.0, zf),
                grad(p[bb], xf - 1.0, yf - 1.0, zf),
            ),
        );
        let far = lerp(
            v,
            lerp(
                u,
                grad(p[aa + 1], xf, yf, zf - 1.0),
                grad(p[ba + 1], xf - 1.0, yf, zf - 1.0),
            ),
            lerp(
                u,
                grad(p[ab + 1], xf, yf - 1.0, zf - 1.0),
                grad(p[bb + 1], xf - 1.0, yf - 1.0, zf - 1.0),
            ),
        );

        // Aligned gradients can overshoot to ~1.036; clamping is continuous
        lerp(w, near, far).clamp(-1.0, 1.0)
    }

    /// Fractal sum of `octaves` noise layers
    ///
    /// Octave `i` is sampled at frequency `2^i` with amplitude
    /// `persistence^i`, and the sum is divided by the total amplitude.
    /// A single octave is exactly [`NoiseField::noise`]. Zero octaves returns
    /// 0.0 without sampling.
    ///
    /// Summation stops early once the scaled coordinates overflow to
    /// infinity (around octave 1024), since no further octave can contribute
    /// a finite value. Non-finite inputs still propagate through octave 0.
    pub fn octave(&self, x: f64, y: f64, z: f64, octaves: u32, persistence: f64) -> f64 {
        if octaves == 0 {
            return 0.0;
        }

        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut max_value = 0.0;

        for i in 0..octaves {
            let (sx, sy, sz) = (x * frequency, y * frequency, z * frequency);
            if i > 0 && !self.lattice_finite(sx, sy, sz) {
                break;
            }
            total += amplitude * self.noise(sx, sy, sz);
            max_value += amplitude;
            amplitude *= persistence;
            frequency *= 2.0;
        }

        total / max_value
    }

    fn lattice_finite(&self, x: f64, y: f64, z: f64) -> bool {
        (x * self.scale).is_finite()
            && (y * self.scale).is_finite()
            && (z * self.scale).is_finite()
    }
}

impl NoiseFn<f64, 3> for NoiseField {
    fn get(&self, point: [f64; 3]) -> f64 {
        self.noise(point[0], point[1], point[2])
    }
}

/// Wrap a floored coordinate into [0, 255]
///
/// `as i64` saturates, so huge or non-finite values still index safely.
#[inline]
fn lattice_index(floored: f64) -> usize {
    (floored as i64 & (TABLE_SIZE as i64 - 1)) as usize
}

/// Quintic smoothstep: 6t^5 - 15t^4 + 10t^3
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product of the corner offset with one of the 12 edge-midpoint
/// gradients, picked by the low 4 bits of the hash (4 entries repeat).
#[inline]
fn grad(hash: u8, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}
