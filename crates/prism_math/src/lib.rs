// Re-export glam for convenience
pub use glam::*;

// Prism math types
mod aabb;
mod interval;
mod sampling;

pub use aabb::Aabb;
pub use interval::Interval;
pub use sampling::{gen_f32, random_in_ball, random_in_disk, random_unit_vector, stream_rng};
