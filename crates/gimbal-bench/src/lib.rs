//! Shared helpers for gimbal benchmarks: seeded RNG, input generators.

use gimbal::{Quat, Vec3};

/// Simple xoshiro256** PRNG for reproducible benchmarks (no rand dependency in lib).
pub struct Rng {
    s: [u64; 4],
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        // SplitMix64 to expand seed into state
        let mut z = seed;
        let mut s = [0u64; 4];
        for slot in &mut s {
            z = z.wrapping_add(0x9e3779b97f4a7c15);
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
            *slot = z ^ (z >> 31);
        }
        Self { s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.s[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.s[1] << 17;
        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];
        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);
        result
    }

    /// Uniform f64 in [-1, 1]
    pub fn f64(&mut self) -> f64 {
        (self.next_u64() as f64) / (u64::MAX as f64) * 2.0 - 1.0
    }

    /// Uniform f32 in [-1, 1]
    pub fn f32(&mut self) -> f32 {
        self.f64() as f32
    }
}

pub fn make_rng() -> Rng {
    Rng::new(0xDEAD_BEEF_CAFE_BABE)
}

pub fn random_vec3f32(n: usize) -> Vec<Vec3<f32>> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| Vec3::new(rng.f32(), rng.f32(), rng.f32()))
        .collect()
}

pub fn random_vec3f64(n: usize) -> Vec<Vec3<f64>> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| Vec3::new(rng.f64(), rng.f64(), rng.f64()))
        .collect()
}

/// Unit quaternions. Components are drawn from [-1, 1] and normalized, which
/// cannot hit zero with this seed.
pub fn random_quatf32(n: usize) -> Vec<Quat<f32>> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| Quat::new(rng.f32(), rng.f32(), rng.f32(), rng.f32()).normalized())
        .collect()
}

pub fn random_quatf64(n: usize) -> Vec<Quat<f64>> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| Quat::new(rng.f64(), rng.f64(), rng.f64(), rng.f64()).normalized())
        .collect()
}

/// Euler triples (radians) away from gimbal lock: |z| < π/4.
pub fn random_euler_f32(n: usize) -> Vec<Vec3<f32>> {
    let mut rng = make_rng();
    let pi = core::f32::consts::PI;
    (0..n)
        .map(|_| Vec3::new(rng.f32() * pi, rng.f32() * pi, rng.f32() * pi * 0.25))
        .collect()
}

// Raw component arrays so bench files can build glam/nalgebra values from the
// same stream.

pub fn random_f32_triples(n: usize) -> Vec<[f32; 3]> {
    random_vec3f32(n).into_iter().map(Into::into).collect()
}

pub fn random_f64_triples(n: usize) -> Vec<[f64; 3]> {
    random_vec3f64(n).into_iter().map(Into::into).collect()
}
