use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid camera settings: {0}")]
    InvalidSettings(String),

    #[error("pixel buffer holds {actual} colors, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("{width}x{height} image is too large to encode")]
    ImageTooLarge { width: usize, height: usize },

    #[error("unsupported output format `{0}`")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T, E = RenderError> = std::result::Result<T, E>;
