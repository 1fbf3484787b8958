//! Sphere primitive for ray tracing.

use crate::hittable::{HitData, Hittable};
use crate::Material;
use prism_math::{Aabb, Interval, Vec3};

/// A sphere primitive.
pub struct Sphere<M: Material> {
    center: Vec3,
    radius: f32,
    material: M,
    bbox: Aabb,
}

impl<M: Material> Sphere<M> {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: M) -> Self {
        let radius = radius.max(0.0);
        let rvec = Vec3::splat(radius);
        let bbox = Aabb::from_points(center - rvec, center + rvec);

        Self {
            center,
            radius,
            material,
            bbox,
        }
    }
}

impl<M: Material> Hittable for Sphere<M> {
    fn hit_within(&self, origin: Vec3, direction: Vec3, ray_t: Interval) -> Option<HitData<'_>> {
        let oc = self.center - origin;
        let a = direction.length_squared();
        let h = direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let point = origin + root * direction;
        let outward_normal = (point - self.center) / self.radius;
        Some(HitData::new(root, point, outward_normal, &self.material))
    }

    fn bounds(&self) -> Aabb {
        self.bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Lambertian};

    fn grey_sphere() -> Sphere<Lambertian> {
        Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Lambertian::new(Color::new(0.5, 0.5, 0.5)),
        )
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = grey_sphere();
        let hit = sphere
            .hit(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0))
            .expect("ray should hit the sphere");

        assert!((hit.t - 0.5).abs() < 0.001); // Should hit at t=0.5
        assert!((hit.normal - Vec3::Z).length() < 1e-5);
        assert_eq!(hit.material.albedo(), Color::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_sphere_hit_unnormalized_direction() {
        let sphere = grey_sphere();
        let hit = sphere
            .hit(Vec3::ZERO, Vec3::new(0.0, 0.0, -4.0))
            .expect("ray should hit the sphere");

        assert!((hit.point - Vec3::new(0.0, 0.0, -0.5)).length() < 1e-4);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = grey_sphere();

        // Ray pointing away from sphere
        assert!(sphere.hit(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0)).is_none());
    }

    #[test]
    fn test_sphere_inside_hit_keeps_outward_normal() {
        let sphere = grey_sphere();
        let hit = sphere
            .hit(Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .expect("ray from the center should hit the shell");

        assert!((hit.point - Vec3::new(0.0, 0.5, -1.0)).length() < 1e-4);
        assert!(hit.normal.dot(Vec3::Y) > 0.99);
    }

    #[test]
    fn test_sphere_bounds() {
        let bounds = grey_sphere().bounds();
        assert_eq!(bounds.x, Interval::new(-0.5, 0.5));
        assert_eq!(bounds.z, Interval::new(-1.5, -0.5));
    }
}
