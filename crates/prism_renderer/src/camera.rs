//! Thin-lens camera for ray generation.

use crate::{HitData, Hittable};
use prism_math::{gen_f32, random_in_disk, Aabb, Interval, Vec3};
use rand::RngCore;

/// Camera for generating rays into the scene.
///
/// The viewport is the parallelogram `corner + i * horizon + j * vertical`
/// for `i, j` in `[0, 1]`; `j = 0` is the bottom edge. Ray origins are
/// spread over a disk of radius `aperture` around the eye for defocus blur.
#[derive(Clone, Copy)]
pub struct Camera<'w> {
    eye: Vec3,
    corner: Vec3,
    horizon: Vec3,
    vertical: Vec3,
    aperture: f32,

    // Lens basis, cached from horizon/vertical
    lens_u: Vec3,
    lens_v: Vec3,

    world: &'w dyn Hittable,
}

impl<'w> Camera<'w> {
    /// Create a camera from an explicit viewport.
    ///
    /// `horizon` and `vertical` must be non-zero.
    pub fn new(
        eye: Vec3,
        corner: Vec3,
        horizon: Vec3,
        vertical: Vec3,
        aperture: f32,
        world: &'w dyn Hittable,
    ) -> Self {
        Self {
            eye,
            corner,
            horizon,
            vertical,
            aperture: aperture.max(0.0),
            lens_u: horizon.normalize(),
            lens_v: vertical.normalize(),
            world,
        }
    }

    /// Start building a camera from look-at parameters.
    pub fn builder() -> CameraBuilder {
        CameraBuilder::new()
    }

    /// Root of the scene this camera looks at.
    pub fn world(&self) -> &'w dyn Hittable {
        self.world
    }

    /// Generate a jittered ray through pixel `(x, y)` of a `width` x `height`
    /// image. Returns `(origin, direction)`; the direction is not normalized.
    pub fn get_ray(
        &self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        rng: &mut dyn RngCore,
    ) -> (Vec3, Vec3) {
        let lens = random_in_disk(self.aperture, rng);
        let origin = self.eye + self.lens_u * lens.x + self.lens_v * lens.y;

        let i = (x as f32 + gen_f32(rng)) / width as f32;
        let j = (y as f32 + gen_f32(rng)) / height as f32;
        let target = self.corner + self.horizon * i + self.vertical * j;

        (origin, target - origin)
    }
}

impl Hittable for Camera<'_> {
    fn hit_within(&self, origin: Vec3, direction: Vec3, ray_t: Interval) -> Option<HitData<'_>> {
        self.world.hit_within(origin, direction, ray_t)
    }

    fn bounds(&self) -> Aabb {
        self.world.bounds()
    }
}

/// Builder deriving the viewport from a look-at setup.
#[derive(Debug, Clone)]
pub struct CameraBuilder {
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,
    vfov: f32,       // Vertical field of view in degrees
    aspect: f32,     // Viewport width / height
    aperture: f32,   // Lens radius
    focus_dist: f32, // Distance from camera to plane of perfect focus
}

impl CameraBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self {
            look_from: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
            aspect: 16.0 / 9.0,
            aperture: 0.0,
            focus_dist: 1.0,
        }
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f32, aperture: f32, focus_dist: f32) -> Self {
        self.vfov = vfov;
        self.aperture = aperture;
        self.focus_dist = focus_dist;
        self
    }

    /// Set the viewport aspect ratio from an image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.aspect = width as f32 / height as f32;
        self
    }

    /// Build the camera looking at `world`.
    pub fn build(self, world: &dyn Hittable) -> Camera<'_> {
        if self.aperture > 0.0 && self.focus_dist <= 0.0 {
            log::warn!(
                "Aperture {} with non-positive focus distance {}",
                self.aperture,
                self.focus_dist
            );
        }

        let theta = self.vfov.to_radians();
        let viewport_height = 2.0 * (theta / 2.0).tan();
        let viewport_width = viewport_height * self.aspect;

        // Camera basis vectors
        let w = (self.look_from - self.look_at).normalize();
        let u = self.vup.cross(w).normalize();
        let v = w.cross(u);

        let horizon = self.focus_dist * viewport_width * u;
        let vertical = self.focus_dist * viewport_height * v;
        let corner = self.look_from - horizon / 2.0 - vertical / 2.0 - self.focus_dist * w;

        Camera::new(self.look_from, corner, horizon, vertical, self.aperture, world)
    }
}

impl Default for CameraBuilder {
    fn default() -> Self {
        Self::new()
    }
}
