use crate::camera::Float;
use nalgebra::Vector3;
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

/// x: red, right
///
/// y: green, up
///
/// z: blue, backward (the camera looks down -z by default)
pub type Vec3 = Vector3<Float>;
pub type Point3 = Vec3;
pub type Color = Vec3;

pub trait Vec3Ext {
    fn near_zero(&self) -> bool;
    fn random<R: Rng + ?Sized>(rng: &mut R, min: Float, max: Float) -> Self;
    fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Self;
    fn random_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Self;
    fn random_in_unit_disc<R: Rng + ?Sized>(rng: &mut R) -> Self;
    fn reflect(&self, normal: &Self) -> Self;
    fn refract(&self, normal: &Self, refractive_ratio: Float) -> Self;
}

impl Vec3Ext for Vec3 {
    /// Each component drawn uniformly from `[min, max)`
    fn random<R: Rng + ?Sized>(rng: &mut R, min: Float, max: Float) -> Self {
        let range = Uniform::from(min..max);
        Vec3::new(range.sample(rng), range.sample(rng), range.sample(rng))
    }

    /// Uniformly distributed direction on the unit sphere
    fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::random_in_unit_sphere(rng).normalize()
    }

    /// Rejection-sampled point strictly inside the unit sphere, excluding a tiny ball around
    /// the origin so that normalizing it is always safe
    fn random_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let v = Self::random(rng, -1.0, 1.0);
            let len_sq = v.norm_squared();
            if 1e-160 < len_sq && len_sq < 1.0 {
                return v;
            }
        }
    }

    /// Returns random point in the x-y unit disc
    fn random_in_unit_disc<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let range = Uniform::from(-1.0..1.0);
        loop {
            let v = Vec3::new(range.sample(rng), range.sample(rng), 0.0);
            if v.norm_squared() < 1.0 {
                return v;
            }
        }
    }

    fn reflect(&self, normal: &Self) -> Self {
        // Subtract twice the projection of the incoming direction onto the normal
        self - normal * (2.0 * self.dot(normal))
    }

    /// Expects `self` and `normal` to be unit vectors
    fn refract(&self, normal: &Self, refractive_ratio: Float) -> Self {
        let cos_theta = (-self.dot(normal)).min(1.0);
        let r_out_perp = (self + normal * cos_theta) * refractive_ratio;
        let r_out_parallel = normal * -((1.0 - r_out_perp.norm_squared()).abs().sqrt());
        r_out_perp + r_out_parallel
    }

    fn near_zero(&self) -> bool {
        let e = 1e-8;
        self.x.abs() < e && self.y.abs() < e && self.z.abs() < e
    }
}
