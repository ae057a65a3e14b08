//! Retro Panel - a CRT-styled status console for the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use rpanel_app::config;

/// Retro Panel - a CRT-styled status console for the terminal
#[derive(Parser, Debug)]
#[command(name = "rpanel")]
#[command(version)]
#[command(about = "A CRT-styled status console for the terminal", long_about = None)]
struct Args {
    /// Panel directory containing .rpanel/config.toml
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Override the boot step interval in milliseconds
    #[arg(long, value_name = "MS")]
    boot_interval_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    rpanel_core::logging::init()?;

    let args = Args::parse();

    let panel_dir = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let mut settings = config::load_settings(&panel_dir);
    if let Some(ms) = args.boot_interval_ms {
        settings.boot.interval_ms = ms;
    }

    rpanel_tui::run(settings).await?;
    Ok(())
}
