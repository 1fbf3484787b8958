//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - A bounded bounce loop with configurable depth
//! - Sky gradient lighting for escaped rays
//! - Anti-aliasing and defocus via multi-sampling
//! - Parallel rendering over pixels (buckets) or samples (rayon)

use std::path::Path;
use std::time::Instant;

use image::{ImageResult, Rgb, RgbImage};
use prism_math::{stream_rng, Vec3};
use rand::RngCore;
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult};
use crate::{Camera, Color, ConfigResult, Hittable, RenderConfig};

/// Color at the top of the sky gradient.
const SKY_BLUE: Color = Color::new(0.5, 0.7, 1.0);

/// Compute the color seen by the ray `(origin, direction)`.
///
/// Follows the ray through at most `max_depth` bounces, multiplying in the
/// albedo of every surface hit. A ray that escapes picks up the sky
/// gradient; one still bouncing after `max_depth` hits carries no light.
pub fn ray_color(
    mut origin: Vec3,
    mut direction: Vec3,
    world: &dyn Hittable,
    max_depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut color = Color::ONE;

    for _ in 0..max_depth {
        match world.hit(origin, direction) {
            Some(hit) => {
                let scattered = hit.material.scatter(direction, hit.normal, rng);
                color *= hit.material.albedo();
                origin = hit.point;
                direction = scattered;
            }
            None => return color * sky_gradient(direction),
        }
    }

    Color::ZERO
}

/// Compute sky gradient background: white looking straight down, sky blue
/// looking straight up.
pub fn sky_gradient(direction: Vec3) -> Color {
    let unit_direction = direction.normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    Color::ONE * (1.0 - a) + SKY_BLUE * a
}

/// Convert a color to 8-bit RGB.
///
/// Scales by 255.999 so a channel of exactly 1.0 still maps to 255; the
/// float-to-int cast truncates and saturates into [0, 255].
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let scaled = color * 255.999;
    [scaled.x as u8, scaled.y as u8, scaled.z as u8]
}

/// Render a single pixel with multi-sampling.
///
/// Averages `config.samples_per_pixel` samples traced to
/// `config.max_depth` bounces for pixel `(x, y)` of a
/// `config.width` x `config.height` image.
pub fn render_pixel(
    camera: &Camera<'_>,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> [u8; 3] {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let (origin, direction) = camera.get_ray(x, y, config.width, config.height, rng);
        pixel_color += ray_color(origin, direction, camera.world(), config.max_depth, rng);
    }

    color_to_rgb(pixel_color / config.samples_per_pixel as f32)
}

/// Render a single pixel with its samples spread over the rayon pool.
///
/// Sample `s` of pixel `p` draws from stream `p * samples + s` of
/// `config.seed`.
pub fn render_pixel_par(camera: &Camera<'_>, x: u32, y: u32, config: &RenderConfig) -> [u8; 3] {
    let samples = config.samples_per_pixel;
    let first_stream = (y as u64 * config.width as u64 + x as u64) * samples as u64;

    let pixel_color = (0..samples)
        .into_par_iter()
        .map(|s| {
            let mut rng = stream_rng(config.seed, first_stream + s as u64);
            let (origin, direction) = camera.get_ray(x, y, config.width, config.height, &mut rng);
            ray_color(origin, direction, camera.world(), config.max_depth, &mut rng)
        })
        .reduce(|| Color::ZERO, |a, b| a + b);

    color_to_rgb(pixel_color / samples as f32)
}

/// 8-bit RGB image buffer. Row 0 is the bottom of the viewport.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let index = self.index(x, y);
        self.pixels[index] = rgb;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (i, rgb) in result.pixels.iter().enumerate() {
            let local_x = i as u32 % bucket.width;
            let local_y = i as u32 / bucket.width;
            self.set(bucket.x + local_x, bucket.y + local_y, *rgb);
        }
    }

    /// Convert to an `image` buffer with the top of the viewport in the
    /// first row.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, row| {
            Rgb(self.get(x, self.height - 1 - row))
        })
    }

    /// Save the image; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        self.to_rgb_image().save(path)
    }
}

/// Render the entire scene, buckets in parallel.
///
/// Fails without rendering anything if `config` does not validate.
pub fn render(camera: &Camera<'_>, config: &RenderConfig) -> ConfigResult<ImageBuffer> {
    config.validate()?;

    let start = Instant::now();
    let buckets = generate_buckets(config.width, config.height, config.bucket_size);

    log::info!(
        "Rendering {}x{} @ {} spp, depth {}, {} buckets",
        config.width,
        config.height,
        config.samples_per_pixel,
        config.max_depth,
        buckets.len()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let pixels = render_bucket(bucket, camera, config);
            log::debug!("Bucket {} at ({}, {}) done", bucket.index, bucket.x, bucket.y);
            BucketResult::new(*bucket, pixels)
        })
        .collect();

    let mut image = ImageBuffer::new(config.width, config.height);
    for result in &results {
        image.write_bucket(result);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}
