pub mod enhance;
pub mod histogram;
pub mod io;
pub mod tone;

use image::RgbImage;
use std::path::PathBuf;

/// Decoded 8-bit RGB image, row-major.
pub type PixelBuffer = RgbImage;

pub type AdjustResult<T> = Result<T, AdjustError>;

#[derive(thiserror::Error, Debug)]
pub enum AdjustError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// A photometric adjustment. Implementations never touch their input and
/// always hand back a freshly allocated buffer.
pub trait Adjust {
    fn apply(&self, image: &PixelBuffer) -> AdjustResult<PixelBuffer>;
}

#[derive(Debug, Clone)]
pub enum Adjustment {
    // Tone curves
    Gamma(tone::GammaConfig),
    Exposure(tone::ExposureConfig),

    // Histogram
    HistogramEqualization,

    // Enhancers
    Brightness(enhance::BrightnessConfig),
    Contrast(enhance::ContrastConfig),
    Sharpness(enhance::SharpnessConfig),
    Saturation(enhance::SaturationConfig),
}

impl Adjustment {
    pub fn name(&self) -> &'static str {
        match self {
            Adjustment::Gamma(_) => "Gamma",
            Adjustment::Exposure(_) => "Exposure",
            Adjustment::HistogramEqualization => "HistEq",
            Adjustment::Brightness(_) => "Brightness",
            Adjustment::Contrast(_) => "Contrast",
            Adjustment::Sharpness(_) => "Sharpness",
            Adjustment::Saturation(_) => "Saturation",
        }
    }
}

impl Adjust for Adjustment {
    fn apply(&self, image: &PixelBuffer) -> AdjustResult<PixelBuffer> {
        log::debug!(
            "applying {} to {}x{} image",
            self.name(),
            image.width(),
            image.height()
        );

        match self {
            Adjustment::Gamma(config) => config.apply(image),
            Adjustment::Exposure(config) => config.apply(image),
            Adjustment::HistogramEqualization => histogram::equalize(image),
            Adjustment::Brightness(config) => config.apply(image),
            Adjustment::Contrast(config) => config.apply(image),
            Adjustment::Sharpness(config) => config.apply(image),
            Adjustment::Saturation(config) => config.apply(image),
        }
    }
}

pub(crate) fn ensure_finite(name: &str, value: f32) -> AdjustResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AdjustError::InvalidParameter(format!(
            "{name} must be a finite number, got {value}"
        )))
    }
}
