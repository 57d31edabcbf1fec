use crate::{
    camera::{CameraSettings, Float},
    hittable::World,
    scenes,
};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Field of random spheres, many of them bouncing
    Cover,
    /// One diffuse sphere seen head on
    Single,
}

impl SceneKind {
    pub fn build(self) -> (World, CameraSettings) {
        match self {
            SceneKind::Cover => (scenes::cover_scene(), scenes::cover_camera()),
            SceneKind::Single => (scenes::single_sphere_scene(), scenes::single_sphere_camera()),
        }
    }
}

/// Renders an animated sequence of ray traced frames
#[derive(Debug, Parser)]
#[command(name = "mbrt", version)]
pub struct Args {
    /// Output file; .bmp uses the built-in writer, .png/.jpg/.tga/.tiff the image crate.
    /// Animations get a frame number appended to the file stem.
    #[arg(default_value = "image.bmp")]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value_t = SceneKind::Cover)]
    pub scene: SceneKind,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<usize>,

    /// Image width over height
    #[arg(long)]
    pub aspect_ratio: Option<Float>,

    /// Random samples per pixel
    #[arg(long, short = 's')]
    pub samples: Option<u32>,

    /// Maximum ray bounces
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Number of frames to render
    #[arg(long)]
    pub frames: Option<u32>,

    #[arg(long)]
    pub fps: Option<u32>,

    /// Seconds the shutter stays open per frame
    #[arg(long)]
    pub shutter_speed: Option<Float>,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    /// Layers any explicitly given options over the scene's camera preset
    pub fn apply(&self, settings: &mut CameraSettings) {
        if let Some(width) = self.width {
            settings.image_width = width;
        }
        if let Some(aspect_ratio) = self.aspect_ratio {
            settings.aspect_ratio = aspect_ratio;
        }
        if let Some(samples) = self.samples {
            settings.samples_per_pixel = samples;
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = max_depth;
        }
        if let Some(frames) = self.frames {
            settings.total_frames = frames;
        }
        if let Some(fps) = self.fps {
            settings.fps = fps;
        }
        if let Some(shutter_speed) = self.shutter_speed {
            settings.shutter_speed = shutter_speed;
        }
    }
}
