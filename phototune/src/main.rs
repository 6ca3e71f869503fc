use anyhow::Result;
use clap::Parser;
use phototune::{Controller, Settings, SystemViewer};

fn main() -> Result<()> {
    phototune::init_logger();

    let settings = Settings::parse();
    log::debug!("{settings:?}");

    let viewer = SystemViewer::new()?;
    let stdin = std::io::stdin();
    let mut controller = Controller::new(stdin.lock(), std::io::stdout(), viewer, settings);
    controller.run()?;

    Ok(())
}
