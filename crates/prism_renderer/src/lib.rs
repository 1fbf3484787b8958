//! Prism renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer built around a bounded bounce loop, thin-lens
//! depth of field and a glass material with Schlick-weighted
//! reflection/refraction.

mod bucket;
mod bvh;
mod camera;
mod config;
mod dielectric;
mod hittable;
mod material;
mod renderer;
mod sphere;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use bvh::BvhNode;
pub use camera::{Camera, CameraBuilder};
pub use config::{ConfigError, ConfigResult, RenderConfig};
pub use dielectric::Dielectric;
pub use hittable::{HitData, Hittable, HittableList, RAY_T_MIN};
pub use material::{Color, Lambertian, Material, Metal};
pub use renderer::{
    color_to_rgb, ray_color, render, render_pixel, render_pixel_par, sky_gradient, ImageBuffer,
};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from prism_math
pub use prism_math::{Aabb, Interval, Vec3};
