pub mod camera;
pub mod cli;
pub mod error;
pub mod hittable;
pub mod interval;
pub mod intersection;
pub mod material;
pub mod output;
pub mod ray;
pub mod scenes;
pub mod transform;
pub mod vec3;
