use crate::{
    error::{RenderError, Result},
    hittable::{Hit, World},
    interval::Interval,
    material::Scatter,
    ray::Ray,
    vec3::{Color, Point3, Vec3, Vec3Ext},
};
use indicatif::{ParallelProgressIterator, ProgressBar};
use log::debug;
use rand::{
    distributions::{Distribution, Uniform},
    thread_rng, Rng,
};
use rayon::prelude::*;

pub type Float = f64;

// Min and max distances for rendering. The lower bound skips the surface a ray just left.
pub const T_MIN: Float = 0.001;
pub const T_MAX: Float = Float::INFINITY;

/// User-facing camera parameters. `build` derives the viewport from them.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraSettings {
    /// Ratio of image width over height
    pub aspect_ratio: Float,
    pub image_width: usize,
    pub samples_per_pixel: u32,
    /// Maximum number of ray bounces into the scene
    pub max_depth: u32,
    /// Vertical view angle in degrees
    pub vertical_fov: Float,
    pub lookfrom: Point3,
    /// Direction the camera looks into
    pub lookdir: Vec3,
    /// Camera-relative up direction
    pub vup: Vec3,
    /// Variation angle of rays through each pixel, in degrees
    pub defocus_angle: Float,
    /// Distance from `lookfrom` to the plane of perfect focus
    pub focus_distance: Float,
    /// Seconds the shutter stays open each frame
    pub shutter_speed: Float,
    pub total_frames: u32,
    pub fps: u32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        CameraSettings {
            aspect_ratio: 1.0,
            image_width: 100,
            samples_per_pixel: 10,
            max_depth: 10,
            vertical_fov: 90.0,
            lookfrom: Point3::zeros(),
            lookdir: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::new(0.0, 1.0, 0.0),
            defocus_angle: 0.0,
            focus_distance: 10.0,
            shutter_speed: 1.0 / 60.0,
            total_frames: 100,
            fps: 24,
        }
    }
}

impl CameraSettings {
    pub fn build(&self) -> Result<Camera> {
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidSettings(
                "samples per pixel must be at least 1".into(),
            ));
        }
        if self.image_width == 0 {
            return Err(RenderError::InvalidSettings(
                "image width must be at least 1".into(),
            ));
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(RenderError::InvalidSettings(format!(
                "aspect ratio must be positive, got {}",
                self.aspect_ratio
            )));
        }
        if self.fps == 0 {
            return Err(RenderError::InvalidSettings("fps must be at least 1".into()));
        }
        if !(self.vertical_fov > 0.0 && self.vertical_fov < 180.0) {
            return Err(RenderError::InvalidSettings(format!(
                "vertical fov must be between 0 and 180 degrees, got {}",
                self.vertical_fov
            )));
        }
        if !(self.focus_distance.is_finite() && self.focus_distance > 0.0) {
            return Err(RenderError::InvalidSettings(format!(
                "focus distance must be positive, got {}",
                self.focus_distance
            )));
        }
        if !(self.shutter_speed.is_finite() && self.shutter_speed >= 0.0) {
            return Err(RenderError::InvalidSettings(format!(
                "shutter speed must not be negative, got {}",
                self.shutter_speed
            )));
        }
        if self.lookdir.near_zero() {
            return Err(RenderError::InvalidSettings(
                "look direction must be non-zero".into(),
            ));
        }

        let image_height = ((self.image_width as Float / self.aspect_ratio) as usize).max(1);
        let pixel_samples_scale = 1.0 / self.samples_per_pixel as Float;

        let center = self.lookfrom;

        // Orthonormal camera basis: u right, v up, w opposite the view direction
        let w = (-self.lookdir).normalize();
        let right = self.vup.cross(&w);
        if right.near_zero() {
            return Err(RenderError::InvalidSettings(
                "up vector must not be parallel to the look direction".into(),
            ));
        }
        let u = right.normalize();
        let v = w.cross(&u);

        let h = (self.vertical_fov.to_radians() / 2.0).tan();
        let viewport_height = 2.0 * h * self.focus_distance;
        let viewport_width = viewport_height * (self.image_width as Float / image_height as Float);

        // Displacement vectors from left to right and top to bottom of viewport
        let viewport_u = u * viewport_width;
        let viewport_v = -v * viewport_height;

        let pixel_du = viewport_u / self.image_width as Float;
        let pixel_dv = viewport_v / image_height as Float;

        let vp_upper_left = center - w * self.focus_distance - viewport_u / 2.0 - viewport_v / 2.0;
        // Top left pixel center
        let pixel00_loc = vp_upper_left + (pixel_du + pixel_dv) / 2.0;

        let defocus_radius = self.focus_distance * (self.defocus_angle / 2.0).to_radians().tan();

        debug!(
            "camera {}x{} at {:?}, viewport {:.3}x{:.3}, defocus radius {:.4}",
            self.image_width, image_height, center, viewport_width, viewport_height, defocus_radius
        );

        Ok(Camera {
            center,
            image_width: self.image_width,
            image_height,
            samples_per_pixel: self.samples_per_pixel,
            max_depth: self.max_depth,
            pixel_samples_scale,
            pixel00_loc,
            pixel_du,
            pixel_dv,
            defocus_angle: self.defocus_angle,
            defocus_disk_u: u * defocus_radius,
            defocus_disk_v: v * defocus_radius,
            shutter_speed: self.shutter_speed,
            total_frames: self.total_frames,
            fps: self.fps,
        })
    }
}

/// A camera with its viewport fully derived. Immutable, so it can be shared across threads.
#[derive(Debug, Clone)]
pub struct Camera {
    pub center: Point3,
    image_width: usize,
    image_height: usize,
    samples_per_pixel: u32,
    max_depth: u32,
    pixel_samples_scale: Float,
    pixel00_loc: Point3,
    pixel_du: Vec3,
    pixel_dv: Vec3,
    defocus_angle: Float,
    defocus_disk_u: Vec3,
    defocus_disk_v: Vec3,
    shutter_speed: Float,
    total_frames: u32,
    fps: u32,
}

/// Linear-space pixel colors, row-major from the top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pixels: Vec<Color>,
    width: usize,
    height: usize,
}

impl Image {
    pub fn new(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self> {
        if pixels.len() != width * height {
            return Err(RenderError::BufferSize {
                expected: width * height,
                actual: pixels.len(),
            });
        }
        Ok(Image {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}

/// Vertical white to light-blue gradient seen by rays that escape the scene
pub fn sky_color(ray: &Ray) -> Color {
    let unit_dir = ray.direction.normalize();
    let a = 0.5 * (unit_dir.y + 1.0);
    Color::repeat(1.0) * (1.0 - a) + Color::new(0.5, 0.7, 1.0) * a
}

impl Camera {
    pub fn image_width(&self) -> usize {
        self.image_width
    }

    pub fn image_height(&self) -> usize {
        self.image_height
    }

    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    /// Scene time at which `frame` opens its shutter
    pub fn frame_time(&self, frame: u32) -> Float {
        frame as Float / self.fps as Float
    }

    /// Every `(frame, frame_time)` pair of the animation, in order
    pub fn frame_times(&self) -> impl Iterator<Item = (u32, Float)> + '_ {
        (0..self.total_frames).map(move |frame| (frame, self.frame_time(frame)))
    }

    /// Center of pixel `x, y` on the plane of focus
    pub fn pixel_center(&self, x: usize, y: usize) -> Point3 {
        self.pixel00_loc + self.pixel_du * x as Float + self.pixel_dv * y as Float
    }

    /// Return a camera ray originating from the defocus disk and directed at a random
    /// point around the pixel location `x, y`, stamped with a random time inside the
    /// shutter interval opening at `frame_time`.
    pub fn get_ray(&self, x: usize, y: usize, frame_time: Float) -> Ray {
        // Offsets uniformly distributed within 1/2 pixel ensure 100% coverage with 0 overlap
        let range = Uniform::from(-0.5..0.5);
        let mut rng = thread_rng();
        let x_offset: Float = range.sample(&mut rng);
        let y_offset: Float = range.sample(&mut rng);
        let pixel_sample =
            self.pixel_center(x, y) + self.pixel_du * x_offset + self.pixel_dv * y_offset;

        let ray_origin = if self.defocus_angle <= 0.0 {
            self.center // no blur
        } else {
            self.defocus_disk_sample() // random blur
        };
        let ray_dir = pixel_sample - ray_origin;
        let ray_time = frame_time + rng.gen::<Float>() * self.shutter_speed;
        Ray::new(ray_origin, ray_dir, ray_time)
    }

    /// Monte Carlo estimate of the light arriving along `ray`, following at most `depth` bounces
    pub fn ray_color(&self, ray: &Ray, depth: u32, world: &World) -> Color {
        let mut throughput = Color::repeat(1.0);
        let mut ray = *ray;

        for _ in 0..depth {
            let Some(hit) = world.hit(&ray, Interval::new(T_MIN, T_MAX)) else {
                return throughput.component_mul(&sky_color(&ray));
            };
            let Some((attenuation, scattered)) = hit.material.scatter(&ray, &hit) else {
                return Color::zeros(); // absorbed
            };
            throughput = throughput.component_mul(&attenuation);
            ray = scattered;
        }

        Color::zeros() // bounce limit reached, no more light is gathered
    }

    /// Average color across all samples of pixel `x, y`
    pub fn render_pixel(&self, world: &World, x: usize, y: usize, frame_time: Float) -> Color {
        let sum: Color = (0..self.samples_per_pixel)
            .map(|_| {
                let ray = self.get_ray(x, y, frame_time);
                self.ray_color(&ray, self.max_depth, world)
            })
            .sum();
        sum * self.pixel_samples_scale
    }

    /// Renders one frame whose shutter opens at `frame_time`, ticking `progress_bar` once
    /// per finished scanline
    pub fn render(
        &self,
        world: &World,
        frame_time: Float,
        progress_bar: ProgressBar,
    ) -> Result<Image> {
        let pixels = (0..self.image_height)
            .into_par_iter()
            .progress_with(progress_bar)
            .flat_map_iter(|y| {
                (0..self.image_width).map(move |x| self.render_pixel(world, x, y, frame_time))
            })
            .collect();

        Image::new(self.image_width, self.image_height, pixels)
    }

    /// Returns a random point in the camera's defocus disk
    fn defocus_disk_sample(&self) -> Point3 {
        let p = Vec3::random_in_unit_disc(&mut thread_rng());
        self.center + (self.defocus_disk_u * p.x) + (self.defocus_disk_v * p.y)
    }
}
