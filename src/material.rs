use crate::{
    camera::Float,
    intersection::Intersection,
    ray::Ray,
    vec3::{Color, Vec3, Vec3Ext},
};
use enum_dispatch::enum_dispatch;
use rand::{thread_rng, Rng};

#[enum_dispatch]
pub trait Scatter: Send + Sync {
    /// Returns the attenuation and the outgoing ray, or `None` if the ray is absorbed
    fn scatter(&self, ray_in: &Ray, hit: &Intersection<'_>) -> Option<(Color, Ray)>;
}

#[enum_dispatch(Scatter)]
#[derive(Debug, Clone)]
pub enum Material {
    Lambertian,
    Metal,
    Dielectric,
}

#[derive(Debug, Clone, Copy)]
pub struct Lambertian {
    pub albedo: Color,
    /// Scales the albedo, so a surface can be dimmed without changing its hue
    pub diffuse_strength: Float,
}

impl Lambertian {
    pub fn new(albedo: Color, diffuse_strength: Float) -> Self {
        Lambertian {
            albedo,
            diffuse_strength,
        }
    }

    pub fn new_rgb(r: Float, g: Float, b: Float) -> Self {
        Self::new(Color::new(r, g, b), 1.0)
    }
}

impl Scatter for Lambertian {
    fn scatter(&self, ray_in: &Ray, hit: &Intersection<'_>) -> Option<(Color, Ray)> {
        let mut scatter_dir = hit.normal + Vec3::random_unit(&mut thread_rng());
        if scatter_dir.near_zero() {
            scatter_dir = hit.normal;
        }
        let scattered = Ray::new(hit.point, scatter_dir, ray_in.time);
        Some((self.albedo * self.diffuse_strength, scattered))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Metal {
    pub albedo: Color,
    /// Radius of the sphere the reflected direction is perturbed within, in `[0, 1]`
    pub fuzz: Float,
}

impl Metal {
    /// Zero fuzz is a perfect mirror
    pub fn new(albedo: Color, fuzz: Float) -> Self {
        Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }
}

impl Scatter for Metal {
    fn scatter(&self, ray_in: &Ray, hit: &Intersection<'_>) -> Option<(Color, Ray)> {
        let reflected = ray_in.direction.reflect(&hit.normal).normalize()
            + Vec3::random_unit(&mut thread_rng()) * self.fuzz;
        if reflected.dot(&hit.normal) <= 0.0 {
            return None; // fuzzed below the surface
        }
        Some((self.albedo, Ray::new(hit.point, reflected, ray_in.time)))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Dielectric {
    /// Refractive index in vacuum or air, or the ratio of the material's
    /// refractive index over the refractive index of the enclosing media
    pub refractive_index: Float,
}

impl Dielectric {
    pub fn new(refractive_index: Float) -> Self {
        Dielectric { refractive_index }
    }
}

impl Scatter for Dielectric {
    fn scatter(&self, ray_in: &Ray, hit: &Intersection<'_>) -> Option<(Color, Ray)> {
        let ri = if hit.is_front_face {
            1.0 / self.refractive_index
        } else {
            self.refractive_index
        };

        let unit_direction = ray_in.direction.normalize();
        let cos_theta = (-unit_direction.dot(&hit.normal)).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
        let cannot_refract = ri * sin_theta > 1.0;

        let noise: Float = thread_rng().gen();
        let direction = if cannot_refract || reflectance(cos_theta, ri) > noise {
            unit_direction.reflect(&hit.normal)
        } else {
            unit_direction.refract(&hit.normal, ri)
        };
        Some((Color::repeat(1.0), Ray::new(hit.point, direction, ray_in.time)))
    }
}

/// Returns Schlick's approximation for reflectance at a given angle.
fn reflectance(cosine: Float, refractive_index: Float) -> Float {
    let r0 = (1.0 - refractive_index) / (1.0 + refractive_index);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn hit_on_floor(material: &Material, is_front_face: bool) -> Intersection<'_> {
        Intersection {
            point: Vec3::zeros(),
            normal: Vec3::new(0.0, 1.0, 0.0),
            material,
            t: 1.0,
            is_front_face,
        }
    }

    #[test]
    fn test_lambertian_attenuation_and_direction() {
        let material: Material = Lambertian::new(Color::new(0.4, 0.2, 0.1), 0.5).into();
        let hit = hit_on_floor(&material, true);
        let ray_in = Ray::new(Vec3::new(0.0, 1.0, 1.0), Vec3::new(0.0, -1.0, -1.0), 0.25);
        for _ in 0..1000 {
            let (attenuation, scattered) = material.scatter(&ray_in, &hit).unwrap();
            assert_abs_diff_eq!(attenuation, Color::new(0.2, 0.1, 0.05), epsilon = 1e-12);
            assert!(scattered.direction.dot(&hit.normal) >= 0.0);
            assert!(!scattered.direction.near_zero());
            assert_eq!(scattered.time, 0.25);
            assert_eq!(scattered.origin, hit.point);
        }
    }

    #[test]
    fn test_metal_mirror_reflection() {
        let albedo = Color::new(0.7, 0.6, 0.5);
        let material: Material = Metal::new(albedo, 0.0).into();
        let hit = hit_on_floor(&material, true);
        let ray_in = Ray::new(Vec3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0), 0.5);
        let (attenuation, scattered) = material.scatter(&ray_in, &hit).unwrap();
        assert_eq!(attenuation, albedo);
        assert_abs_diff_eq!(
            scattered.direction,
            Vec3::new(1.0, 1.0, 0.0).normalize(),
            epsilon = 1e-12
        );
        assert_eq!(scattered.time, 0.5);
    }

    #[test]
    fn test_metal_absorbs_grazing_reflection() {
        let material: Material = Metal::new(Color::new(0.7, 0.6, 0.5), 0.0).into();
        let hit = hit_on_floor(&material, true);
        // Parallel to the surface: the reflection has zero component along the normal
        let ray_in = Ray::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 0.0);
        assert!(material.scatter(&ray_in, &hit).is_none());
    }

    #[test]
    fn test_metal_fuzzy_scatter_is_above_surface_or_absorbed() {
        let albedo = Color::new(0.9, 0.1, 0.3);
        let material: Material = Metal::new(albedo, 1.0).into();
        let hit = hit_on_floor(&material, true);
        let ray_in = Ray::new(Vec3::new(-1.0, 0.1, 0.0), Vec3::new(1.0, -0.1, 0.0), 0.0);
        let mut absorbed = 0;
        for _ in 0..2000 {
            match material.scatter(&ray_in, &hit) {
                Some((attenuation, scattered)) => {
                    assert_eq!(attenuation, albedo);
                    assert!(scattered.direction.dot(&hit.normal) > 0.0);
                }
                None => absorbed += 1,
            }
        }
        // A nearly grazing ray with maximum fuzz goes below the surface a good share of the time
        assert!(absorbed > 0);
    }

    #[test]
    fn test_metal_fuzz_is_clamped() {
        assert_eq!(Metal::new(Color::zeros(), 3.0).fuzz, 1.0);
        assert_eq!(Metal::new(Color::zeros(), -1.0).fuzz, 0.0);
        assert_eq!(Metal::new(Color::zeros(), 0.3).fuzz, 0.3);
    }

    #[test]
    fn test_dielectric_never_absorbs_or_tints() {
        let material: Material = Dielectric::new(1.5).into();
        let ray_in = Ray::new(Vec3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0), 0.75);
        for front in [true, false] {
            let hit = hit_on_floor(&material, front);
            for _ in 0..500 {
                let (attenuation, scattered) = material.scatter(&ray_in, &hit).unwrap();
                assert_eq!(attenuation, Color::repeat(1.0));
                assert_eq!(scattered.time, 0.75);
            }
        }
    }

    #[test]
    fn test_dielectric_total_internal_reflection() {
        let material: Material = Dielectric::new(1.5).into();
        // Inside the glass (back face), at 60 degrees from the normal: 1.5 * sin(60) > 1
        let hit = hit_on_floor(&material, false);
        let direction = Vec3::new(60f64.to_radians().sin(), -60f64.to_radians().cos(), 0.0);
        let ray_in = Ray::new(Vec3::new(0.0, 1.0, 0.0), direction, 0.0);
        for _ in 0..100 {
            let (_, scattered) = material.scatter(&ray_in, &hit).unwrap();
            assert_abs_diff_eq!(
                scattered.direction,
                direction.reflect(&hit.normal),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_dielectric_head_on_mostly_refracts() {
        let material: Material = Dielectric::new(1.5).into();
        let hit = hit_on_floor(&material, true);
        let ray_in = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0), 0.0);
        let refracted = (0..2000)
            .filter_map(|_| material.scatter(&ray_in, &hit))
            .filter(|(_, scattered)| scattered.direction.y < 0.0)
            .count();
        // Schlick reflectance at normal incidence is 0.04
        assert!(refracted > 1800);
    }

    #[test]
    fn test_reflectance_at_normal_incidence() {
        assert_abs_diff_eq!(reflectance(1.0, 1.5), 0.04, epsilon = 1e-12);
        assert_abs_diff_eq!(reflectance(0.0, 1.5), 1.0, epsilon = 1e-12);
    }
}
