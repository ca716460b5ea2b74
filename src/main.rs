use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use cellbrush::core::config;
use cellbrush::tui;

#[derive(Parser)]
#[command(name = "cellbrush", about = "Terminal cell painting tool")]
struct Args {
    /// Path to an alternate config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // File logger - the terminal itself belongs to the canvas.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("cellbrush.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Cellbrush starting up");

    let file_config =
        config::load_config(args.config.as_deref()).map_err(std::io::Error::other)?;
    let resolved = config::resolve(&file_config);

    tui::run(resolved)
}
