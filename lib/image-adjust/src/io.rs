//! Loading images into a [`PixelBuffer`] and writing them back to disk.

use crate::{AdjustError, AdjustResult, PixelBuffer};
use image::{
    ExtendedColorType, ImageEncoder, ImageReader,
    codecs::{
        jpeg::JpegEncoder,
        png::{CompressionType, FilterType, PngEncoder},
    },
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// JPEG quality used when the caller does not pick one.
pub const DEFAULT_QUALITY: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    /// Anything else, left to the `image` crate to resolve from the extension.
    Other,
}

impl OutputFormat {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match ext.as_deref() {
            Some("jpg") | Some("jpeg") => OutputFormat::Jpeg,
            Some("png") => OutputFormat::Png,
            _ => OutputFormat::Other,
        }
    }
}

/// Decode any supported raster file and normalise it to 8-bit RGB.
pub fn load(path: impl AsRef<Path>) -> AdjustResult<PixelBuffer> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AdjustError::NotFound(path.to_path_buf()));
    }

    let image = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| AdjustError::Decode(format!("{}: {e}", path.display())))?
        .to_rgb8();

    log::debug!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(image)
}

/// Encode `image` in the format implied by the extension of `path`.
///
/// JPEG is written at `quality` (clamped to 1..=100) without chroma
/// subsampling, PNG with the fastest compression setting.
pub fn save(image: &PixelBuffer, path: impl AsRef<Path>, quality: u8) -> AdjustResult<()> {
    let path = path.as_ref();
    let (width, height) = image.dimensions();

    match OutputFormat::from_path(path) {
        OutputFormat::Jpeg => {
            let mut writer = BufWriter::new(File::create(path)?);
            let mut encoder = JpegEncoder::new_with_quality(&mut writer, quality.clamp(1, 100));
            encoder.encode(image.as_raw(), width, height, ExtendedColorType::Rgb8)?;
            writer.flush()?;
        }
        OutputFormat::Png => {
            let mut writer = BufWriter::new(File::create(path)?);
            let encoder = PngEncoder::new_with_quality(
                &mut writer,
                CompressionType::Fast,
                FilterType::Adaptive,
            );
            encoder.write_image(image.as_raw(), width, height, ExtendedColorType::Rgb8)?;
            writer.flush()?;
        }
        OutputFormat::Other => image.save(path)?,
    }

    log::info!("saved {} ({width}x{height})", path.display());
    Ok(())
}
