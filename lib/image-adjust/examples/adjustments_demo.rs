/// Adjustments example
/// Renders every adjustment at a few strengths into tmp/
use image::Rgb;
use image_adjust::{
    Adjust, Adjustment, PixelBuffer,
    enhance::{BrightnessConfig, ContrastConfig, SaturationConfig, SharpnessConfig},
    io,
    tone::{ExposureConfig, GammaConfig},
};
use std::path::Path;

fn test_image() -> PixelBuffer {
    PixelBuffer::from_fn(800, 600, |x, y| {
        let r = (x * 255 / 800) as u8;
        let g = (y * 255 / 600) as u8;
        let b = ((x + y) * 255 / 1400) as u8;
        Rgb([r, g, b])
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let img_path = Path::new("data/test.png");
    let img = if img_path.exists() {
        io::load(img_path)?
    } else {
        test_image()
    };

    let mut effects = vec![("histeq".to_string(), Adjustment::HistogramEqualization)];
    for level in [0.5_f32, 1.5, 2.5] {
        effects.extend([
            (
                format!("gamma_{level}"),
                Adjustment::Gamma(GammaConfig::new().with_gamma(level)),
            ),
            (
                format!("exposure_{level}"),
                Adjustment::Exposure(ExposureConfig::new().with_gain(level)),
            ),
            (
                format!("brightness_{level}"),
                Adjustment::Brightness(BrightnessConfig::new().with_factor(level)),
            ),
            (
                format!("contrast_{level}"),
                Adjustment::Contrast(ContrastConfig::new().with_factor(level)),
            ),
            (
                format!("sharpness_{level}"),
                Adjustment::Sharpness(SharpnessConfig::new().with_factor(level)),
            ),
            (
                format!("saturation_{level}"),
                Adjustment::Saturation(SaturationConfig::new().with_factor(level)),
            ),
        ]);
    }

    for (name, effect) in effects {
        let out = effect.apply(&img)?;
        let filename = format!("{name}.png");
        io::save(&out, output_dir.join(&filename), io::DEFAULT_QUALITY)?;
        println!("✓ Generated {}", filename);
    }

    println!("\n✓ All adjustments applied successfully!");
    println!("  Images saved to: tmp/");

    Ok(())
}
