//! Material trait for surface scattering.

use prism_math::{random_in_ball, random_unit_vector, Vec3};
use rand::RngCore;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Trait for materials that describe how light interacts with surfaces.
///
/// Materials are shared read-only across render threads; all randomness
/// comes from the `rng` handed to [`Material::scatter`].
pub trait Material: Send + Sync {
    /// Per-channel attenuation applied to light leaving this surface.
    fn albedo(&self) -> Color;

    /// New direction for a ray arriving along `incident` at a surface with
    /// outward `normal`.
    ///
    /// The result is not normalized.
    fn scatter(&self, incident: Vec3, normal: Vec3, rng: &mut dyn RngCore) -> Vec3;
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Material for Lambertian {
    fn albedo(&self) -> Color {
        self.albedo
    }

    fn scatter(&self, _incident: Vec3, normal: Vec3, rng: &mut dyn RngCore) -> Vec3 {
        let scatter_direction = normal + random_unit_vector(rng);

        // Catch degenerate scatter direction
        if scatter_direction.length_squared() < 1e-8 {
            normal
        } else {
            scatter_direction
        }
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone)]
pub struct Metal {
    albedo: Color,
    fuzz: f32,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough
    pub fn new(albedo: Color, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }
}

impl Material for Metal {
    fn albedo(&self) -> Color {
        self.albedo
    }

    fn scatter(&self, incident: Vec3, normal: Vec3, rng: &mut dyn RngCore) -> Vec3 {
        reflect(incident.normalize(), normal) + random_in_ball(self.fuzz, rng)
    }
}

/// Reflect a vector about a normal.
#[inline]
pub(crate) fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reflect_preserves_length() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..1_000 {
            let d = random_unit_vector(&mut rng);
            let n = random_unit_vector(&mut rng);
            let r = reflect(d, n);
            assert!((r.length() - d.length()).abs() < 1e-5);
        }
    }

    #[test]
    fn test_reflect_mirror() {
        let r = reflect(Vec3::new(1.0, -1.0, 0.0), Vec3::Y);
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_lambertian_scatters_into_hemisphere() {
        let material = Lambertian::new(Color::new(0.5, 0.5, 0.5));
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1_000 {
            let dir = material.scatter(-Vec3::Y, Vec3::Y, &mut rng);
            assert!(dir.dot(Vec3::Y) >= -1e-5);
        }
        assert_eq!(material.albedo(), Color::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_metal_mirror_and_fuzz_clamp() {
        let mirror = Metal::new(Color::ONE, 0.0);
        let mut rng = StdRng::seed_from_u64(11);
        let dir = mirror.scatter(Vec3::new(1.0, -1.0, 0.0), Vec3::Y, &mut rng);
        let expected = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((dir - expected).length() < 1e-5);

        let rough = Metal::new(Color::ONE, 5.0);
        for _ in 0..100 {
            let dir = rough.scatter(-Vec3::Y, Vec3::Y, &mut rng);
            // Unit reflection plus at most a unit ball of fuzz
            assert!((dir - Vec3::Y).length() <= 1.0 + 1e-5);
        }
    }
}
