use crate::{
    camera::Float,
    interval::Interval,
    intersection::Intersection,
    material::Material,
    ray::Ray,
    transform::AnimatedTransform,
    vec3::Point3,
};
use enum_dispatch::enum_dispatch;
use std::sync::Arc;

#[enum_dispatch]
pub trait Hit: Send + Sync {
    /// Nearest intersection strictly inside `interval`, if any
    fn hit(&self, ray: &Ray, interval: Interval) -> Option<Intersection<'_>>;
}

#[enum_dispatch(Hit)]
#[derive(Debug, Clone)]
pub enum Shape {
    Sphere,
}

#[derive(Debug, Clone)]
pub struct Sphere {
    transform: AnimatedTransform,
    radius: Float,
    material: Arc<Material>,
}

impl Sphere {
    pub fn new(center: Point3, radius: Float, material: Arc<Material>) -> Self {
        Self::new_animated(AnimatedTransform::stationary(center), radius, material)
    }

    pub fn new_animated(transform: AnimatedTransform, radius: Float, material: Arc<Material>) -> Self {
        Sphere {
            transform,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn radius(&self) -> Float {
        self.radius
    }

    pub fn is_animated(&self) -> bool {
        self.transform.is_animated()
    }

    /// Center of the sphere at scene time `time`
    pub fn center_at(&self, time: Float) -> Point3 {
        self.transform.apply_inverse(time)
    }
}

impl Hit for Sphere {
    fn hit(&self, ray: &Ray, interval: Interval) -> Option<Intersection<'_>> {
        if self.radius <= 0.0 {
            return None; // a point has no surface to scatter from
        }

        let center = self.center_at(ray.time);
        let oc = center - ray.origin;
        let a = ray.direction.norm_squared();
        let h = ray.direction.dot(&oc);
        let c = oc.norm_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None; // no point hit on the sphere
        }

        let sqrt_disc = discriminant.sqrt();
        // Find either root (hit point) in range
        let mut t = (h - sqrt_disc) / a; // min root
        if !interval.surrounds(t) {
            t = (h + sqrt_disc) / a; // max root if min is out of range
            if !interval.surrounds(t) {
                return None; // both out of range
            }
        }

        let outward_normal = (ray.at(t) - center) / self.radius;
        Some(Intersection::new(ray, t, outward_normal, &self.material))
    }
}

/// Every shape in the scene, tested linearly
#[derive(Debug, Clone, Default)]
pub struct World {
    shapes: Vec<Shape>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(shapes: Vec<Shape>) -> Self {
        World { shapes }
    }

    pub fn add(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

impl Hit for World {
    /// Returns nearest hit to camera for the given ray within the given view range
    fn hit(&self, ray: &Ray, interval: Interval) -> Option<Intersection<'_>> {
        // Shrink the range to the nearest hit so far so obscured shapes are rejected early
        let mut nearest_hit = None;
        let mut closest_so_far = interval.max;

        for shape in &self.shapes {
            if let Some(hit) = shape.hit(ray, interval.with_max(closest_so_far)) {
                closest_so_far = hit.t;
                nearest_hit = Some(hit);
            }
        }

        nearest_hit
    }
}
