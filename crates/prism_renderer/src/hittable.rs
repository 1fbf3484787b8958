//! Hittable trait and HitData for ray-object intersection.

use crate::Material;
use prism_math::{Aabb, Interval, Vec3};

/// Smallest ray parameter accepted by [`Hittable::hit`].
///
/// Scattered rays start exactly on the surface they left; ignoring hits
/// closer than this keeps them from re-hitting it through rounding.
pub const RAY_T_MIN: f32 = 0.001;

/// A ray-object intersection.
///
/// A miss is `None` at the call site, so every field here is valid.
#[derive(Clone, Copy)]
pub struct HitData<'a> {
    /// Ray parameter of the intersection
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Outward surface normal, unit length
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a dyn Material,
}

impl<'a> HitData<'a> {
    /// Create a hit record. The normal is normalized here so geometry
    /// cannot hand out a non-unit normal.
    pub fn new(t: f32, point: Vec3, normal: Vec3, material: &'a dyn Material) -> Self {
        Self {
            t,
            point,
            normal: normal.normalize(),
            material,
        }
    }
}

/// Trait for objects that can be hit by rays.
///
/// Implementors must be pure: render threads query the same scene
/// concurrently without locking.
pub trait Hittable: Send + Sync {
    /// Nearest intersection of the ray `(origin, direction)`, if any.
    fn hit(&self, origin: Vec3, direction: Vec3) -> Option<HitData<'_>> {
        self.hit_within(origin, direction, Interval::new(RAY_T_MIN, f32::INFINITY))
    }

    /// Nearest intersection with a ray parameter strictly inside `ray_t`.
    fn hit_within(&self, origin: Vec3, direction: Vec3, ray_t: Interval) -> Option<HitData<'_>>;

    /// Get the axis-aligned bounding box of this object.
    fn bounds(&self) -> Aabb;
}

/// A list of hittable objects.
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
    bbox: Aabb,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            bbox: Aabb::EMPTY,
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.bbox = Aabb::surrounding(&self.bbox, &object.bounds());
        self.objects.push(object);
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList {
    fn hit_within(&self, origin: Vec3, direction: Vec3, ray_t: Interval) -> Option<HitData<'_>> {
        let mut closest: Option<HitData<'_>> = None;

        for object in &self.objects {
            let interval = closest.map_or(ray_t, |hit| ray_t.with_max(hit.t));
            if let Some(hit) = object.hit_within(origin, direction, interval) {
                closest = Some(hit);
            }
        }

        closest
    }

    fn bounds(&self) -> Aabb {
        self.bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Lambertian, Sphere};

    #[test]
    fn test_hit_data_normalizes_normal() {
        let material = Lambertian::new(Color::ONE);
        let hit = HitData::new(1.0, Vec3::ZERO, Vec3::new(0.0, 3.0, 4.0), &material);

        assert!((hit.normal.length() - 1.0).abs() < 1e-6);
        assert!((hit.normal - Vec3::new(0.0, 0.6, 0.8)).length() < 1e-6);
        assert_eq!(hit.t, 1.0);
    }

    #[test]
    fn test_empty_list_misses() {
        let list = HittableList::new();
        assert!(list.is_empty());
        assert!(list.hit(Vec3::ZERO, Vec3::Y).is_none());
        assert_eq!(list.bounds(), Aabb::EMPTY);
    }

    #[test]
    fn test_list_returns_nearest() {
        let mut list = HittableList::new();
        let near = Color::new(1.0, 0.0, 0.0);
        let far = Color::new(0.0, 0.0, 1.0);

        // Add the far sphere first so ordering cannot fake the result
        list.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, Lambertian::new(far))));
        list.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, Lambertian::new(near))));
        assert_eq!(list.len(), 2);

        let hit = list
            .hit(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0))
            .expect("ray should hit a sphere");
        assert!((hit.t - 2.0).abs() < 1e-4);
        assert_eq!(hit.material.albedo(), near);
    }

    #[test]
    fn test_list_bounds_cover_children() {
        let mut list = HittableList::new();
        list.add(Box::new(Sphere::new(Vec3::new(-2.0, 0.0, 0.0), 1.0, Lambertian::new(Color::ONE))));
        list.add(Box::new(Sphere::new(Vec3::new(2.0, 0.0, 0.0), 1.0, Lambertian::new(Color::ONE))));

        let bounds = list.bounds();
        assert_eq!(bounds.x, Interval::new(-3.0, 3.0));
        assert_eq!(bounds.y, Interval::new(-1.0, 1.0));
    }
}
