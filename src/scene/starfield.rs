//! Decorative background starfield

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

pub const STAR_COUNT: usize = 5000;
/// Inner radius of the star shell
pub const STARFIELD_RADIUS: f32 = 300.0;
/// Thickness of the star shell
pub const STARFIELD_DEPTH: f32 = 150.0;
const STARFIELD_SEED: u64 = 0x5eed_57a2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub size: f32,
    /// Relative brightness in `[0.4, 1.0]`
    pub brightness: f32,
}

/// Static star shell surrounding the system, generated once at startup
#[derive(Resource, Clone, Debug)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Default for Starfield {
    fn default() -> Self {
        Self::generate(STAR_COUNT, STARFIELD_RADIUS, STARFIELD_DEPTH, STARFIELD_SEED)
    }
}

impl Starfield {
    /// Scatter `count` stars uniformly over directions in the shell
    /// `[radius, radius + depth]`. The same seed always yields the same sky.
    pub fn generate(count: usize, radius: f32, depth: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = (0..count)
            .map(|_| {
                // Uniform direction: z uniform in [-1, 1], azimuth uniform.
                let z: f32 = rng.gen_range(-1.0..=1.0);
                let azimuth = rng.gen_range(0.0..TAU);
                let ring = (1.0 - z * z).max(0.0).sqrt();
                let direction = Vec3::new(ring * azimuth.cos(), z, ring * azimuth.sin());
                let distance = radius + rng.gen_range(0.0..=depth);
                Star {
                    position: direction * distance,
                    size: rng.gen_range(0.3..0.8),
                    brightness: rng.gen_range(0.4..=1.0),
                }
            })
            .collect();
        Self { stars }
    }
}
