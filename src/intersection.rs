use crate::{
    camera::Float,
    material::Material,
    ray::Ray,
    vec3::{Point3, Vec3},
};

#[derive(Debug, Clone)]
pub struct Intersection<'a> {
    pub point: Point3,
    /// Unit length, always facing against the incoming ray
    pub normal: Vec3,
    pub material: &'a Material,
    pub t: Float,
    pub is_front_face: bool,
}

impl<'a> Intersection<'a> {
    /// Builds the record for a hit at `t` along `ray`, orienting `outward_normal` against the ray.
    /// `outward_normal` is expected to have unit length.
    pub fn new(ray: &Ray, t: Float, outward_normal: Vec3, material: &'a Material) -> Self {
        let mut hit = Intersection {
            point: ray.at(t),
            normal: outward_normal,
            material,
            t,
            is_front_face: true,
        };
        hit.set_face_normal(ray, outward_normal);
        hit
    }

    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        self.is_front_face = Self::is_front_face(ray, &outward_normal);
        self.normal = if self.is_front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }

    pub fn is_front_face(ray: &Ray, outward_normal: &Vec3) -> bool {
        ray.direction.dot(outward_normal) < 0.0
    }
}
