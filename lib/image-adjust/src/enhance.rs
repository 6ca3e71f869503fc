//! Enhancers that interpolate between a "degenerate" image and the input.
//!
//! `out = degenerate + (input - degenerate) * factor`
//!
//! A factor of `1.0` returns the input, `0.0` returns the degenerate image and
//! anything outside `[0, 1]` extrapolates. Results are clamped to 8 bits.

use crate::{Adjust, AdjustResult, PixelBuffer, ensure_finite};
use derivative::Derivative;
use derive_setters::Setters;
use image::Rgb;

/// ITU-R 601-2 luma in 16.16 fixed point, rounded.
pub fn luma(pixel: &Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

#[inline]
fn blend(degenerate: u8, value: u8, factor: f32) -> u8 {
    let d = degenerate as f32;
    (d + (value as f32 - d) * factor).round().clamp(0.0, 255.0) as u8
}

fn blend_images(degenerate: &PixelBuffer, image: &PixelBuffer, factor: f32) -> PixelBuffer {
    let mut out = image.clone();
    for (sample, d) in out.iter_mut().zip(degenerate.iter()) {
        *sample = blend(*d, *sample, factor);
    }
    out
}

/// Brightness adjustment configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct BrightnessConfig {
    /// 0 = black, 1 = unchanged
    #[derivative(Default(value = "1.0"))]
    factor: f32,
}

impl BrightnessConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Adjust for BrightnessConfig {
    fn apply(&self, image: &PixelBuffer) -> AdjustResult<PixelBuffer> {
        ensure_finite("Brightness", self.factor)?;

        let mut out = image.clone();
        for sample in out.iter_mut() {
            *sample = blend(0, *sample, self.factor);
        }

        Ok(out)
    }
}

/// Contrast adjustment configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct ContrastConfig {
    /// 0 = flat gray at the mean luma, 1 = unchanged
    #[derivative(Default(value = "1.0"))]
    factor: f32,
}

impl ContrastConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Adjust for ContrastConfig {
    fn apply(&self, image: &PixelBuffer) -> AdjustResult<PixelBuffer> {
        ensure_finite("Contrast", self.factor)?;

        let count = image.width() as u64 * image.height() as u64;
        if count == 0 {
            return Ok(image.clone());
        }

        let sum: u64 = image.pixels().map(|p| luma(p) as u64).sum();
        let mean = ((sum as f64 / count as f64) + 0.5) as u8;

        let mut out = image.clone();
        for sample in out.iter_mut() {
            *sample = blend(mean, *sample, self.factor);
        }

        Ok(out)
    }
}

/// Sharpness adjustment configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct SharpnessConfig {
    /// 0 = smoothed, 1 = unchanged, 2 = sharpened
    #[derivative(Default(value = "1.0"))]
    factor: f32,
}

impl SharpnessConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Adjust for SharpnessConfig {
    fn apply(&self, image: &PixelBuffer) -> AdjustResult<PixelBuffer> {
        ensure_finite("Sharpness", self.factor)?;

        let smoothed = smooth(image);
        Ok(blend_images(&smoothed, image, self.factor))
    }
}

/// 3x3 smoothing filter, centre weighted. Border pixels are copied as is.
fn smooth(image: &PixelBuffer) -> PixelBuffer {
    const KERNEL: [u32; 9] = [1, 1, 1, 1, 5, 1, 1, 1, 1];
    const DIVISOR: u32 = 13;

    let (width, height) = image.dimensions();
    let mut result = image.clone();

    if width < 3 || height < 3 {
        return result;
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut sum = [0u32; 3];

            for ky in 0..3 {
                for kx in 0..3 {
                    let pixel = image.get_pixel(x + kx - 1, y + ky - 1);
                    let weight = KERNEL[(ky * 3 + kx) as usize];
                    for c in 0..3 {
                        sum[c] += pixel[c] as u32 * weight;
                    }
                }
            }

            let pixel = result.get_pixel_mut(x, y);
            for c in 0..3 {
                pixel[c] = ((sum[c] + DIVISOR / 2) / DIVISOR) as u8;
            }
        }
    }

    result
}

/// Saturation adjustment configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct SaturationConfig {
    /// 0 = grayscale, 1 = unchanged
    #[derivative(Default(value = "1.0"))]
    factor: f32,
}

impl SaturationConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Adjust for SaturationConfig {
    fn apply(&self, image: &PixelBuffer) -> AdjustResult<PixelBuffer> {
        ensure_finite("Saturation", self.factor)?;

        let mut out = image.clone();
        for pixel in out.pixels_mut() {
            let gray = luma(pixel);
            for c in 0..3 {
                pixel[c] = blend(gray, pixel[c], self.factor);
            }
        }

        Ok(out)
    }
}
