//! Phototune
//!
//! An interactive command-line photo editor. It loads one image, applies
//! photometric adjustments chosen from a numbered menu, shows the result in
//! the desktop's image viewer and saves it on request.
//!
//! # Architecture
//! - `config`: command line settings
//! - `session`: the working image and its "modified since last save" flag
//! - `menu`: menu choices and their parameters
//! - `viewer`: displaying the working image
//! - `controller`: the prompt loop tying everything together

pub mod config;
pub mod controller;
pub mod menu;
pub mod session;
pub mod viewer;

pub use config::Settings;
pub use controller::Controller;
pub use session::Session;
pub use viewer::{SystemViewer, Viewer};

/// Initializes the logger.
///
/// Sets up a custom logger format with timestamp, log level, file name, line number,
/// and log message. Uses local time format for timestamps.
pub fn init_logger() {
    use std::io::Write;

    env_logger::builder()
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
