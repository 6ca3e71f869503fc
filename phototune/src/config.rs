use clap::{ArgAction, Parser};
use derivative::Derivative;
use derive_setters::Setters;
use image_adjust::io::DEFAULT_QUALITY;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[command(name = "phototune", version, about = "Interactive photo adjustments")]
pub struct Settings {
    /// Image to open. Asked for interactively when omitted
    pub path: Option<PathBuf>,

    /// JPEG quality used when saving (1-100)
    #[arg(short, long, default_value_t = DEFAULT_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    #[derivative(Default(value = "DEFAULT_QUALITY"))]
    pub quality: u8,

    /// Don't open the viewer after every adjustment
    #[arg(long = "no-show", action = ArgAction::SetFalse)]
    #[derivative(Default(value = "true"))]
    pub auto_show: bool,
}
