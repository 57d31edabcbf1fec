use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use mbrt::{
    camera::{CameraSettings, Float},
    hittable::{Hit, Sphere},
    interval::Interval,
    material::{Lambertian, Material},
    ray::Ray,
    scenes,
    transform::AnimatedTransform,
    vec3::{Color, Point3, Vec3},
};

pub fn sphere_bench(c: &mut Criterion) {
    let material: Arc<Material> = Arc::new(Lambertian::new(Color::repeat(0.5), 1.0).into());
    let ray = Ray::new(Point3::new(0.0, 0.0, 3.0), Vec3::new(0.1, 0.0, -1.0), 0.5);

    c.bench_function("sphere_hit", |b| {
        let sphere = Sphere::new(Point3::zeros(), 1.0, material.clone());
        b.iter(|| black_box(sphere.hit(black_box(&ray), Interval::new(0.001, Float::INFINITY))));
    });

    c.bench_function("animated_sphere_hit", |b| {
        let transform =
            AnimatedTransform::new(Point3::zeros(), Point3::new(0.0, 1.0, 0.0), 0.0, 1.0);
        let sphere = Sphere::new_animated(transform, 1.0, material.clone());
        b.iter(|| black_box(sphere.hit(black_box(&ray), Interval::new(0.001, Float::INFINITY))));
    });
}

pub fn render_bench(c: &mut Criterion) {
    let world = scenes::cover_scene();
    let camera = scenes::cover_camera().build().unwrap();

    c.bench_function("cover_scene_ray_color", |b| {
        b.iter(|| {
            let ray = camera.get_ray(200, 112, 0.0);
            black_box(camera.ray_color(&ray, camera.max_depth(), &world))
        });
    });

    c.bench_function("cover_scene_pixel", |b| {
        let camera = CameraSettings {
            samples_per_pixel: 16,
            ..scenes::cover_camera()
        }
        .build()
        .unwrap();
        b.iter(|| black_box(camera.render_pixel(&world, 200, 112, 0.0)));
    });
}

criterion_group!(benches, sphere_bench, render_bench);
criterion_main!(benches);
