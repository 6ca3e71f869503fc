use image_adjust::{
    Adjustment,
    enhance::{BrightnessConfig, ContrastConfig, SaturationConfig, SharpnessConfig},
    tone::{ExposureConfig, GammaConfig},
};
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Value used when the parameter prompt is left blank.
pub const DEFAULT_PARAMETER: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum MenuChoice {
    Exit = 0,
    Gamma,
    HistEq,
    Brightness,
    Contrast,
    Sharpness,
    Saturation,
    Exposure,
    Show,
    Save,
}

impl MenuChoice {
    pub fn name(&self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit",
            MenuChoice::Gamma => "Gamma",
            MenuChoice::HistEq => "HistEq",
            MenuChoice::Brightness => "Brightness",
            MenuChoice::Contrast => "Contrast",
            MenuChoice::Sharpness => "Sharpness",
            MenuChoice::Saturation => "Saturation",
            MenuChoice::Exposure => "Exposure",
            MenuChoice::Show => "Show",
            MenuChoice::Save => "Save",
        }
    }

    /// Menu order: the numbered entries first, exit last.
    pub fn all() -> &'static [MenuChoice] {
        &[
            MenuChoice::Gamma,
            MenuChoice::HistEq,
            MenuChoice::Brightness,
            MenuChoice::Contrast,
            MenuChoice::Sharpness,
            MenuChoice::Saturation,
            MenuChoice::Exposure,
            MenuChoice::Show,
            MenuChoice::Save,
            MenuChoice::Exit,
        ]
    }

    /// Parses a single menu digit. The line must hold exactly that digit.
    pub fn parse(input: &str) -> Option<Self> {
        if input.len() != 1 {
            return None;
        }

        input
            .parse::<u8>()
            .ok()
            .and_then(|v| MenuChoice::try_from(v).ok())
    }

    /// Label of the numeric parameter the choice asks for, if any.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            MenuChoice::Gamma
            | MenuChoice::Brightness
            | MenuChoice::Contrast
            | MenuChoice::Sharpness
            | MenuChoice::Saturation
            | MenuChoice::Exposure => Some(self.name()),
            _ => None,
        }
    }

    pub fn adjustment(&self, value: f32) -> Option<Adjustment> {
        let adjustment = match self {
            MenuChoice::Gamma => Adjustment::Gamma(GammaConfig::new().with_gamma(value)),
            MenuChoice::HistEq => Adjustment::HistogramEqualization,
            MenuChoice::Brightness => {
                Adjustment::Brightness(BrightnessConfig::new().with_factor(value))
            }
            MenuChoice::Contrast => Adjustment::Contrast(ContrastConfig::new().with_factor(value)),
            MenuChoice::Sharpness => {
                Adjustment::Sharpness(SharpnessConfig::new().with_factor(value))
            }
            MenuChoice::Saturation => {
                Adjustment::Saturation(SaturationConfig::new().with_factor(value))
            }
            MenuChoice::Exposure => Adjustment::Exposure(ExposureConfig::new().with_gain(value)),
            MenuChoice::Exit | MenuChoice::Show | MenuChoice::Save => return None,
        };

        Some(adjustment)
    }
}

pub fn render() -> String {
    let mut menu = String::new();
    for choice in MenuChoice::all() {
        let number: u8 = (*choice).into();
        menu.push_str(&format!("\n{number}: {}", choice.name()));
    }
    menu
}

/// Blank input means [`DEFAULT_PARAMETER`]; anything else must be a finite number.
pub fn parse_parameter(input: &str) -> Result<f32, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(DEFAULT_PARAMETER);
    }

    match input.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!("Invalid number: '{input}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Gamma));
        assert_eq!(MenuChoice::parse("9"), Some(MenuChoice::Save));
        assert_eq!(MenuChoice::parse(" 1 "), None);
        assert_eq!(MenuChoice::parse("1 "), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("10"), None);
        assert_eq!(MenuChoice::parse("01"), None);
        assert_eq!(MenuChoice::parse("a"), None);
    }

    #[test]
    fn test_render_lists_every_choice() {
        let menu = render();
        assert!(menu.starts_with("\n1: Gamma"));
        assert!(menu.ends_with("\n0: Exit"));
        assert_eq!(menu.lines().filter(|l| !l.is_empty()).count(), 10);
    }

    #[test]
    fn test_parameters() {
        assert_eq!(MenuChoice::Gamma.parameter(), Some("Gamma"));
        assert_eq!(MenuChoice::Exposure.parameter(), Some("Exposure"));
        assert_eq!(MenuChoice::HistEq.parameter(), None);
        assert_eq!(MenuChoice::Save.parameter(), None);
    }

    #[test]
    fn test_adjustment_mapping() {
        assert!(matches!(
            MenuChoice::HistEq.adjustment(DEFAULT_PARAMETER),
            Some(Adjustment::HistogramEqualization)
        ));
        assert!(matches!(
            MenuChoice::Saturation.adjustment(0.0),
            Some(Adjustment::Saturation(_))
        ));
        assert!(MenuChoice::Show.adjustment(1.0).is_none());
    }

    #[test]
    fn test_parse_parameter() {
        assert_eq!(parse_parameter(""), Ok(1.0));
        assert_eq!(parse_parameter("  \n"), Ok(1.0));
        assert_eq!(parse_parameter("0.5"), Ok(0.5));
        assert_eq!(parse_parameter("-2"), Ok(-2.0));
        assert!(parse_parameter("abc").is_err());
        assert!(parse_parameter("NaN").is_err());
        assert!(parse_parameter("inf").is_err());
    }
}
