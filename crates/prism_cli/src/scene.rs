//! Built-in demo scene.

use prism_renderer::{
    BvhNode, Camera, Color, Dielectric, Hittable, Lambertian, Metal, RenderConfig, Sphere, Vec3,
};

const LOOK_FROM: Vec3 = Vec3::new(0.0, 0.0, 0.0);
const LOOK_AT: Vec3 = Vec3::new(0.0, 0.0, -1.0);

/// Ground, a glass ball in the middle, diffuse and metal balls to the sides.
pub fn demo_world() -> BvhNode {
    let objects: Vec<Box<dyn Hittable>> = vec![
        Box::new(Sphere::new(
            Vec3::new(0.0, -100.5, -1.0),
            100.0,
            Lambertian::new(Color::new(0.8, 0.8, 0.0)),
        )),
        Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, Dielectric::clear(1.5))),
        Box::new(Sphere::new(
            Vec3::new(-1.0, 0.0, -1.0),
            0.5,
            Lambertian::new(Color::new(0.1, 0.2, 0.5)),
        )),
        Box::new(Sphere::new(
            Vec3::new(1.0, 0.0, -1.0),
            0.5,
            Metal::new(Color::new(0.8, 0.6, 0.2), 0.1),
        )),
    ];

    BvhNode::new(objects)
}

/// Camera looking down -Z at the demo world, focused on the glass ball.
pub fn demo_camera<'w>(world: &'w dyn Hittable, config: &RenderConfig, aperture: f32) -> Camera<'w> {
    Camera::builder()
        .with_resolution(config.width, config.height)
        .with_position(LOOK_FROM, LOOK_AT, Vec3::Y)
        .with_lens(90.0, aperture, (LOOK_AT - LOOK_FROM).length())
        .build(world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_demo_world_bounds() {
        let world = demo_world();
        let bounds = world.bounds();
        assert!(bounds.x.contains(-1.5) && bounds.x.contains(1.5));
        assert!(bounds.y.contains(-100.5));
    }

    #[test]
    fn test_center_ray_hits_glass() {
        let world = demo_world();
        let hit = world
            .hit(LOOK_FROM, LOOK_AT - LOOK_FROM)
            .expect("center ray should hit the glass ball");
        assert!((hit.t - 0.5).abs() < 1e-4);
        assert!((hit.normal - Vec3::Z).length() < 1e-4);
    }

    #[test]
    fn test_demo_camera_lens() {
        let world = demo_world();
        let config = RenderConfig::default();
        let mut rng = StdRng::seed_from_u64(3);

        let pinhole = demo_camera(&world, &config, 0.0);
        let (origin, _) = pinhole.get_ray(200, 100, config.width, config.height, &mut rng);
        assert_eq!(origin, LOOK_FROM);

        let lens = demo_camera(&world, &config, 0.05);
        for _ in 0..100 {
            let (origin, _) = lens.get_ray(200, 100, config.width, config.height, &mut rng);
            assert!((origin - LOOK_FROM).length() <= 0.05 + 1e-6);
        }
    }
}
