//! Isoview - Main entry point

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use isoview_core::ViewerConfig;

#[derive(Parser, Debug)]
#[command(name = "isoview")]
#[command(about = "Interactive isometric 3D model viewer")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "isoview.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Isoview v{}", env!("CARGO_PKG_VERSION"));

    let config = ViewerConfig::load_or_default(&args.config)?;
    info!(
        asset = %config.asset.path,
        points_of_interest = config.viewer.points_of_interest,
        "Configuration loaded"
    );

    isoview_viewer::run(config);

    Ok(())
}
