//! Per-channel tone curves evaluated on normalized `[0, 1]` values.
//!
//! Both curves depend only on the input sample, so they are baked into a
//! 256-entry lookup table once per call and then mapped over the buffer.

use crate::{Adjust, AdjustError, AdjustResult, PixelBuffer, ensure_finite};
use derivative::Derivative;
use derive_setters::Setters;

/// Gamma correction configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct GammaConfig {
    /// `< 1` brightens, `> 1` darkens
    #[derivative(Default(value = "1.0"))]
    gamma: f32,
}

impl GammaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gamma(&self) -> f32 {
        self.gamma
    }
}

impl Adjust for GammaConfig {
    fn apply(&self, image: &PixelBuffer) -> AdjustResult<PixelBuffer> {
        ensure_finite("Gamma", self.gamma)?;
        if self.gamma < 0.0 {
            return Err(AdjustError::InvalidParameter(format!(
                "Gamma should be a non-negative number, got {}",
                self.gamma
            )));
        }

        let lut = build_lut(|x| x.powf(self.gamma));
        Ok(map_lut(image, &lut))
    }
}

/// Logarithmic exposure configuration
///
/// `out = ln(1 + gain * in) / ln(1 + gain)`
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct ExposureConfig {
    #[derivative(Default(value = "1.0"))]
    gain: f32,
}

impl ExposureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }
}

impl Adjust for ExposureConfig {
    fn apply(&self, image: &PixelBuffer) -> AdjustResult<PixelBuffer> {
        ensure_finite("Exposure gain", self.gain)?;
        if self.gain <= -1.0 {
            return Err(AdjustError::InvalidParameter(format!(
                "Exposure gain must be greater than -1, got {}",
                self.gain
            )));
        }

        // The curve tends to the identity as the gain approaches zero.
        if self.gain.abs() < 1e-6 {
            return Ok(image.clone());
        }

        let gain = self.gain as f64;
        let norm = gain.ln_1p();
        let lut = build_lut(|x| ((gain * x as f64).ln_1p() / norm) as f32);
        Ok(map_lut(image, &lut))
    }
}

fn build_lut(curve: impl Fn(f32) -> f32) -> [u8; 256] {
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let out = curve(i as f32 / 255.0);
        // NaN falls through clamp, map it to black instead of relying on the cast.
        let out = if out.is_nan() { 0.0 } else { out.clamp(0.0, 1.0) };
        *entry = (out * 255.0).round() as u8;
    }
    lut
}

fn map_lut(image: &PixelBuffer, lut: &[u8; 256]) -> PixelBuffer {
    let mut out = image.clone();
    for sample in out.iter_mut() {
        *sample = lut[*sample as usize];
    }
    out
}
