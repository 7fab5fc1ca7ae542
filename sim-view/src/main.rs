//! Application entry point for the 2D gravity viewer.
//!
//! This binary parses the command line, sets up logging and eframe/egui,
//! and delegates all interactive logic and rendering to [`Viewer`].

mod render;
mod viewer;

use clap::Parser;
use sim_core::Config;
use std::path::PathBuf;
use viewer::Viewer;

#[derive(Parser, Debug)]
#[command(about = "Interactive 2D N-body gravity simulator")]
struct Args {
    /// YAML file with simulation settings; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Loads the configuration, falling back to defaults if the file is
/// missing or invalid.
fn load_config(path: Option<PathBuf>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    match Config::load(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("{}: {e}; using defaults", path.display());
            Config::default()
        }
    }
}

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let cfg = load_config(args.config);

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "2D Gravity",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::new(cfg)))),
    )
}
