//! ptymon - live activity monitor for pseudo-terminal devices
//!
//! Binary entry point: parses the CLI, sets up error reporting, logging and
//! settings, then hands off to the TUI or headless runner.

mod headless;

use std::path::{Path, PathBuf};

use clap::Parser;
use ptymon_app::config::load_settings;
use ptymon_core::{logging, PTS_DIR};

/// ptymon - watch pseudo-terminal devices come, go, and get used
#[derive(Parser, Debug)]
#[command(name = "ptymon", version)]
#[command(about = "Live activity monitor for pseudo-terminal devices", long_about = None)]
struct Args {
    /// Run in headless mode (NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Path to config.toml (default: <config dir>/ptymon/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    let settings = load_settings(args.config.as_deref());

    let result = if args.headless {
        headless::runner::run_headless(Path::new(PTS_DIR)).await
    } else {
        ptymon_tui::run(settings).await
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) if e.is_fatal() => {
            eprintln!("❌ {}", e);
            eprintln!("   Logs: {}", logging::get_log_directory().display());
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
