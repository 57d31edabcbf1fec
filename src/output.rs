use crate::{
    camera::{Float, Image},
    error::{RenderError, Result},
    interval::Interval,
    vec3::Color,
};
use image::{codecs::bmp::BmpEncoder, ExtendedColorType, RgbImage};
use log::info;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Take a color value in linear space and convert it to gamma 2. Non-positive values map to 0.
pub fn linear_to_gamma(linear_color_value: Float) -> Float {
    if linear_color_value > 0.0 {
        linear_color_value.sqrt()
    } else {
        0.0
    }
}

/// Gamma-corrected, 8-bit `[r, g, b]`
pub fn to_rgb8(color: &Color) -> [u8; 3] {
    let intensity = Interval::new(0.0, 1.0);
    let cmax = 255.999;
    let quantize = |c: Float| (intensity.clamp(linear_to_gamma(c)) * cmax) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Writes a 24-bit uncompressed bitmap: rows bottom-up, BGR, each row padded to 4 bytes
pub fn write_bmp<W: Write>(writer: &mut W, image: &Image) -> Result<()> {
    let rgb = to_rgb_image(image)?;
    BmpEncoder::new(writer).encode(
        rgb.as_raw(),
        rgb.width(),
        rgb.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(())
}

pub fn to_rgb_image(image: &Image) -> Result<RgbImage> {
    let too_large = || RenderError::ImageTooLarge {
        width: image.width(),
        height: image.height(),
    };
    let width = u32::try_from(image.width()).map_err(|_| too_large())?;
    let height = u32::try_from(image.height()).map_err(|_| too_large())?;
    let bytes: Vec<u8> = image.pixels().iter().flat_map(to_rgb8).collect();
    let actual = bytes.len();
    RgbImage::from_raw(width, height, bytes).ok_or(RenderError::BufferSize {
        expected: image.width() * image.height() * 3,
        actual,
    })
}

/// Writes `image` to `path`, picking the encoder from the file extension.
/// Bitmaps are buffered through `write_bmp`, other formats are saved by the `image` crate.
pub fn write_image(image: &Image, path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "bmp" => {
            let mut buf_writer = BufWriter::new(File::create(path)?);
            write_bmp(&mut buf_writer, image)?;
            buf_writer.flush()?;
        }
        "png" | "jpg" | "jpeg" | "tga" | "tif" | "tiff" => to_rgb_image(image)?.save(path)?,
        other => return Err(RenderError::UnsupportedFormat(other.to_string())),
    }

    info!(
        "Wrote {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

/// Output path of `frame`. Single-frame renders use `base` as is, animations number each
/// frame from 1 before the extension, e.g. `image_0001.bmp`.
pub fn frame_path(base: &Path, frame: u32, total_frames: u32) -> PathBuf {
    if total_frames <= 1 {
        return base.to_path_buf();
    }
    let digits = total_frames.to_string().len().max(4);
    let stem = base
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("image");
    let name = match base.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{stem}_{:0digits$}.{ext}", frame + 1),
        None => format!("{stem}_{:0digits$}", frame + 1),
    };
    base.with_file_name(name)
}
