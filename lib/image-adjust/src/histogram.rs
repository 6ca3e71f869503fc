//! Luma histogram equalization in YCrCb space.
//!
//! Only the Y plane is remapped; Cr and Cb pass through unchanged so hue and
//! saturation survive while luma contrast is stretched.

use crate::{AdjustResult, PixelBuffer};
use image::{GrayImage, Luma, Rgb};

const CHROMA_OFFSET: f32 = 128.0;

#[inline]
fn clamp_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// RGB -> (Y, Cr, Cb), 8-bit full range.
pub fn rgb_to_ycrcb(pixel: &Rgb<u8>) -> [u8; 3] {
    let [r, g, b] = pixel.0.map(|v| v as f32);
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let cr = (r - y) * 0.713 + CHROMA_OFFSET;
    let cb = (b - y) * 0.564 + CHROMA_OFFSET;
    [clamp_u8(y), clamp_u8(cr), clamp_u8(cb)]
}

/// (Y, Cr, Cb) -> RGB, 8-bit full range.
pub fn ycrcb_to_rgb(ycrcb: [u8; 3]) -> Rgb<u8> {
    let y = ycrcb[0] as f32;
    let cr = ycrcb[1] as f32 - CHROMA_OFFSET;
    let cb = ycrcb[2] as f32 - CHROMA_OFFSET;
    Rgb([
        clamp_u8(y + 1.403 * cr),
        clamp_u8(y - 0.714 * cr - 0.344 * cb),
        clamp_u8(y + 1.773 * cb),
    ])
}

/// Lookup table spreading the occupied luma levels over the full 0..=255
/// range. The darkest level maps to 0 and the brightest to 255.
///
/// `None` when the plane holds a single level (nothing to spread).
pub fn equalization_lut(luma_plane: &GrayImage) -> Option<[u8; 256]> {
    let cdf = imageproc::stats::cumulative_histogram(luma_plane).channels[0];
    let total = cdf[255];
    let cdf_min = cdf.iter().copied().find(|&v| v > 0).unwrap_or(0);

    let denom = total.checked_sub(cdf_min).filter(|&d| d > 0)? as f32;

    let mut lut = [0u8; 256];
    for (entry, count) in lut.iter_mut().zip(cdf.iter()) {
        let above_min = count.saturating_sub(cdf_min) as f32;
        *entry = clamp_u8(above_min * 255.0 / denom);
    }
    Some(lut)
}

pub fn equalize(image: &PixelBuffer) -> AdjustResult<PixelBuffer> {
    let (width, height) = image.dimensions();
    let ycrcb: Vec<[u8; 3]> = image.pixels().map(rgb_to_ycrcb).collect();

    let luma_plane = GrayImage::from_fn(width, height, |x, y| {
        Luma([ycrcb[(y * width + x) as usize][0]])
    });

    let Some(lut) = equalization_lut(&luma_plane) else {
        log::debug!("single luma level, histogram equalization is a no-op");
        return Ok(image.clone());
    };

    let mut out = PixelBuffer::new(width, height);
    for (pixel, source) in out.pixels_mut().zip(ycrcb.iter()) {
        *pixel = ycrcb_to_rgb([lut[source[0] as usize], source[1], source[2]]);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::gradient;

    fn luma_range(image: &PixelBuffer) -> (u8, u8) {
        image
            .pixels()
            .map(|p| rgb_to_ycrcb(p)[0])
            .fold((u8::MAX, u8::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)))
    }

    fn luma_histogram(image: &PixelBuffer) -> [u32; 256] {
        let mut hist = [0u32; 256];
        for pixel in image.pixels() {
            hist[rgb_to_ycrcb(pixel)[0] as usize] += 1;
        }
        hist
    }

    fn entropy(hist: &[u32; 256]) -> f64 {
        let total: u32 = hist.iter().sum();
        hist.iter()
            .filter(|&&n| n > 0)
            .map(|&n| {
                let p = n as f64 / total as f64;
                -p * p.log2()
            })
            .sum()
    }

    /// Largest gap between the luma CDF and the CDF of a perfectly flat histogram.
    fn distance_from_flat(hist: &[u32; 256]) -> f64 {
        let total: u32 = hist.iter().sum();
        let mut cdf = 0u32;
        let mut worst = 0.0_f64;
        for (level, n) in hist.iter().enumerate() {
            cdf += n;
            let flat = (level + 1) as f64 / 256.0;
            worst = worst.max((cdf as f64 / total as f64 - flat).abs());
        }
        worst
    }

    fn gray(v: u8) -> Rgb<u8> {
        Rgb([v, v, v])
    }

    #[test]
    fn test_preserves_dimensions() {
        let img = gradient(37, 21);
        let out = equalize(&img).unwrap();
        assert_eq!(out.dimensions(), img.dimensions());
        assert_eq!(out.as_raw().len(), img.as_raw().len());
    }

    #[test]
    fn test_uniform_image_is_unchanged() {
        let img = PixelBuffer::from_pixel(10, 10, gray(128));
        assert_eq!(equalize(&img).unwrap(), img);

        let img = PixelBuffer::from_pixel(7, 3, Rgb([200, 40, 90]));
        assert_eq!(equalize(&img).unwrap(), img);
    }

    #[test]
    fn test_two_levels_map_to_extremes() {
        let img = PixelBuffer::from_fn(2, 1, |x, _| if x == 0 { gray(100) } else { gray(156) });
        let out = equalize(&img).unwrap();

        assert_eq!(out.get_pixel(0, 0), &gray(0));
        assert_eq!(out.get_pixel(1, 0), &gray(255));
    }

    #[test]
    fn test_black_background_stays_black() {
        let img = PixelBuffer::from_fn(100, 10, |x, y| {
            if x < 40 {
                Rgb([0, 0, 0])
            } else {
                Rgb([(x * 2) as u8, (y * 20) as u8, 90])
            }
        });
        let out = equalize(&img).unwrap();

        for y in 0..10 {
            for x in 0..40 {
                assert_eq!(out.get_pixel(x, y), &Rgb([0, 0, 0]));
            }
        }
        assert_eq!(luma_range(&out).1, 255);
    }

    #[test]
    fn test_stretches_low_contrast_gray() {
        let img = PixelBuffer::from_fn(20, 5, |x, _| gray(100 + x as u8));

        let out = equalize(&img).unwrap();
        let (lo_in, hi_in) = luma_range(&img);
        let (lo_out, hi_out) = luma_range(&out);

        assert_eq!((lo_out, hi_out), (0, 255));
        assert!(hi_out - lo_out > hi_in - lo_in);

        // Gray stays gray and the ordering of intensities is kept
        for x in 0..20 {
            let p = out.get_pixel(x, 0);
            assert_eq!(p[0], p[1]);
            assert_eq!(p[1], p[2]);
            if x > 0 {
                assert!(p[0] > out.get_pixel(x - 1, 0)[0]);
            }
        }
    }

    #[test]
    fn test_output_histogram_is_flatter() {
        // Level 100 + i appears i + 1 times: skewed and squeezed into 20 levels
        let levels: Vec<u8> = (0..20u8)
            .flat_map(|i| std::iter::repeat_n(100 + i, i as usize + 1))
            .collect();
        let img = PixelBuffer::from_fn(levels.len() as u32, 1, |x, _| gray(levels[x as usize]));

        let out = equalize(&img).unwrap();
        let hist_in = luma_histogram(&img);
        let hist_out = luma_histogram(&out);

        assert!(entropy(&hist_out) >= entropy(&hist_in) - 1e-9);
        assert!(distance_from_flat(&hist_out) < distance_from_flat(&hist_in));
        assert!(distance_from_flat(&hist_out) < 0.15);
        assert_eq!(hist_out[0], 1);
        assert_eq!(hist_out[255], 20);
    }

    #[test]
    fn test_lut_normalises_by_darkest_level() {
        let plane = GrayImage::from_fn(4, 1, |x, _| Luma([[10, 10, 20, 30][x as usize]]));
        let lut = equalization_lut(&plane).unwrap();

        assert_eq!(lut[10], 0);
        assert_eq!(lut[20], 128);
        assert_eq!(lut[30], 255);

        let flat = GrayImage::from_pixel(3, 3, Luma([42]));
        assert!(equalization_lut(&flat).is_none());
    }

    #[test]
    fn test_ycrcb_round_trip_is_close() {
        let img = gradient(32, 32);
        for pixel in img.pixels() {
            let back = ycrcb_to_rgb(rgb_to_ycrcb(pixel));
            for c in 0..3 {
                assert!((pixel[c] as i32 - back[c] as i32).abs() <= 3);
            }
        }
    }
}
