use crate::{
    camera::Float,
    vec3::{Point3, Vec3},
};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
    /// Absolute scene time at which the ray samples the world
    pub time: Float,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3, time: Float) -> Self {
        Self {
            origin,
            direction,
            time,
        }
    }

    pub fn at(&self, t: Float) -> Point3 {
        self.origin + self.direction * t
    }
}
