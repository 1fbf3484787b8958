//! Dielectric (glass) material.
//!
//! Each scatter event picks between reflection and refraction with
//! probability given by Schlick's approximation of the Fresnel term, and
//! always reflects past the critical angle. A blur radius perturbs the
//! outgoing direction for frosted glass.

use crate::material::{reflect, Color, Material};
use prism_math::{gen_f32, random_in_ball, Vec3};
use rand::RngCore;

/// Dielectric (glass) material.
#[derive(Debug, Clone)]
pub struct Dielectric {
    albedo: Color,
    /// Radius of the ball used to jitter scattered directions
    blur: f32,
    /// Index of the medium inside relative to the one outside
    ior: f32,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `albedo`: Attenuation applied on every bounce
    /// - `blur`: Roughness radius, 0.0 = clear glass
    /// - `ior`: Index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
    ///
    /// `ior` must be positive.
    pub fn new(albedo: Color, blur: f32, ior: f32) -> Self {
        Self {
            albedo,
            blur: blur.max(0.0),
            ior,
        }
    }

    /// Clear, colorless glass.
    pub fn clear(ior: f32) -> Self {
        Self::new(Color::ONE, 0.0, ior)
    }

    /// Schlick's approximation for reflectance.
    ///
    /// `r0` is the same for `ior` and `1 / ior`, so either may be passed.
    pub fn reflectance(cosine: f32, ior: f32) -> f32 {
        let r0 = ((1.0 - ior) / (1.0 + ior)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

impl Material for Dielectric {
    fn albedo(&self) -> Color {
        self.albedo
    }

    fn scatter(&self, incident: Vec3, normal: Vec3, rng: &mut dyn RngCore) -> Vec3 {
        let d = incident.normalize();
        let n = normal.normalize();

        // Negative when entering through the front face
        let cosine = d.dot(n);
        let ratio = if cosine < 0.0 { 1.0 / self.ior } else { self.ior };

        let sin_sq = 1.0 - cosine * cosine;
        let cos_t_sq = 1.0 - ratio * ratio * sin_sq;
        let can_refract = cosine <= 0.0 || cos_t_sq >= 0.0;

        // Both draws happen on every call, whichever branch is taken
        let choice = gen_f32(rng);
        let blur = random_in_ball(self.blur, rng);

        if can_refract && choice > Self::reflectance(cosine.abs(), self.ior) {
            refract(d, n, cosine, ratio, cos_t_sq) + blur
        } else {
            reflect(d, n) + blur
        }
    }
}

/// Refract unit `d` through a surface with outward unit normal `n`:
/// `ratio * (d + cosine * n) - n * sqrt(cos_t_sq)`.
///
/// The result is not unit length.
#[inline]
fn refract(d: Vec3, n: Vec3, cosine: f32, ratio: f32, cos_t_sq: f32) -> Vec3 {
    ratio * (d + cosine * n) - cos_t_sq.max(0.0).sqrt() * n
}
