//! Random sampling helpers.
//!
//! Every sampler takes the random source explicitly so concurrent workers
//! can each own a stream (see [`stream_rng`]).

use crate::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Uniform `f32` in `[0, 1)`.
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniform `f32` in `[-1, 1)`.
#[inline]
fn gen_signed(rng: &mut dyn RngCore) -> f32 {
    gen_f32(rng) * 2.0 - 1.0
}

/// Sample a point inside the disk of the given radius.
///
/// Rejection sampling from the square `[-1, 1]^2`: the acceptance region
/// covers pi/4 of the square, so about 4/pi draws are needed per point.
pub fn random_in_disk(radius: f32, rng: &mut dyn RngCore) -> Vec2 {
    loop {
        let p = Vec2::new(gen_signed(rng), gen_signed(rng));
        if p.length_squared() <= 1.0 {
            return p * radius;
        }
    }
}

/// Sample a point inside the ball of the given radius.
///
/// Rejection sampling from the cube `[-1, 1]^3` (about 6/pi draws per point).
pub fn random_in_ball(radius: f32, rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(gen_signed(rng), gen_signed(rng), gen_signed(rng));
        if p.length_squared() <= 1.0 {
            return p * radius;
        }
    }
}

/// Generate a random unit vector on the unit sphere.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_in_ball(1.0, rng);
        let len_sq = p.length_squared();
        if len_sq > 1e-6 {
            return p / len_sq.sqrt();
        }
    }
}

/// Deterministic random stream `stream` derived from a base seed.
///
/// Distinct stream indices give independent generators, so a render can
/// hand one stream to each pixel (or sample) and stay reproducible no
/// matter how work is spread across threads.
pub fn stream_rng(seed: u64, stream: u64) -> StdRng {
    StdRng::seed_from_u64(mix64(seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15)))
}

/// SplitMix64 finalizer.
fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
