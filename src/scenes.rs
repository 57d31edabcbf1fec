use crate::{
    camera::{CameraSettings, Float},
    hittable::{Sphere, World},
    material::{Dielectric, Lambertian, Material, Metal},
    transform::AnimatedTransform,
    vec3::{Color, Point3, Vec3, Vec3Ext},
};
use itertools::iproduct;
use log::debug;
use rand::{thread_rng, Rng};
use std::{f64::consts::PI, sync::Arc};

/// Random field of small spheres around three large ones. Most of the small diffuse spheres
/// bounce upward during the first second of the animation.
pub fn cover_scene() -> World {
    let mut rng = thread_rng();
    let mut world = World::new();

    let ground: Arc<Material> = Arc::new(Lambertian::new(Color::repeat(0.5), 0.8).into());
    world.add(Sphere::new(Vec3::new(0.0, -1000.0, 0.0), 1000.0, ground));

    let glass: Arc<Material> = Arc::new(Dielectric::new(1.5).into());
    let brown: Arc<Material> = Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1), 0.6).into());
    let polished: Arc<Material> =
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0).into());
    world.add(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, glass.clone()));
    world.add(Sphere::new(Vec3::new(-4.0, 1.0, 0.0), 1.0, brown));
    world.add(Sphere::new(Vec3::new(4.0, 1.0, 0.0), 1.0, polished));

    let small_radius = 0.2;
    let mut moving = 0;
    let keep_clear = Point3::new(4.0, 0.2, 0.0);

    for (i, j) in iproduct!(-11..11, -11..11) {
        let choose: Float = rng.gen();
        let center = Point3::new(
            i as Float + 0.9 * rng.gen::<Float>(),
            small_radius,
            j as Float + 0.9 * rng.gen::<Float>(),
        );

        // Don't put it inside the big metal sphere
        if center.metric_distance(&keep_clear) <= 0.9 {
            continue;
        }

        let sphere = if choose < 0.8 {
            let albedo = Color::random(&mut rng, 0.0, 1.0)
                .component_mul(&Color::random(&mut rng, 0.0, 1.0));
            let material = Arc::new(Lambertian::new(albedo, 0.5).into());
            let bounce = rng.gen_range(0.0..0.5) + 0.5 * (center.x * PI).sin();
            let transform =
                AnimatedTransform::new(center, center + Vec3::new(0.0, bounce, 0.0), 0.0, 1.0);
            Sphere::new_animated(transform, small_radius, material)
        } else if choose < 0.95 {
            let albedo = Color::random(&mut rng, 0.5, 1.0);
            let fuzz = rng.gen_range(0.0..0.5);
            let material = Arc::new(Metal::new(albedo, fuzz).into());
            Sphere::new(center, small_radius, material)
        } else {
            Sphere::new(center, small_radius, glass.clone())
        };
        if sphere.is_animated() {
            moving += 1;
        }
        world.add(sphere);
    }

    debug!(
        "Built cover scene with {} spheres, {} of them moving",
        world.len(),
        moving
    );
    world
}

pub fn cover_camera() -> CameraSettings {
    CameraSettings {
        aspect_ratio: 16.0 / 9.0,
        image_width: 400,
        samples_per_pixel: 100,
        max_depth: 50,
        vertical_fov: 20.0,
        lookfrom: Point3::new(13.0, 2.0, 3.0),
        lookdir: Vec3::new(-4.5, -0.65, -1.0),
        vup: Vec3::new(0.0, 1.0, 0.0),
        defocus_angle: 0.6,
        focus_distance: 13.0,
        shutter_speed: 1.0 / 15.0,
        total_frames: 24,
        fps: 24,
    }
}

/// A single gray unit sphere at the origin
pub fn single_sphere_scene() -> World {
    let gray: Arc<Material> = Arc::new(Lambertian::new(Color::repeat(0.5), 1.0).into());
    World::build(vec![Sphere::new(Point3::zeros(), 1.0, gray).into()])
}

/// Looks straight at the origin down the negative z axis
pub fn single_sphere_camera() -> CameraSettings {
    CameraSettings {
        aspect_ratio: 1.0,
        image_width: 200,
        samples_per_pixel: 50,
        max_depth: 10,
        vertical_fov: 90.0,
        lookfrom: Point3::new(0.0, 0.0, 3.0),
        lookdir: Vec3::new(0.0, 0.0, -1.0),
        vup: Vec3::new(0.0, 1.0, 0.0),
        defocus_angle: 0.0,
        focus_distance: 3.0,
        shutter_speed: 0.0,
        total_frames: 1,
        fps: 24,
    }
}
