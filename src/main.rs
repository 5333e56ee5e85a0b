//! Gomoku GUI client
//!
//! Plays online through the relay, against the computer, or hotseat.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use gomoku::ui::GomokuApp;
use gomoku::{AppConfig, PlayMode};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Gomoku client with relay matchmaking")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Game to start with (overrides `game.mode`)
    #[arg(short, long, value_enum)]
    mode: Option<PlayMode>,

    /// Relay address `host:port` (overrides `network.server_addr`)
    #[arg(short, long)]
    server: Option<String>,

    /// Seconds to wait for a match (overrides `network.match_deadline_secs`)
    #[arg(long)]
    deadline_secs: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(server) = cli.server {
        config.network.server_addr = server;
    }
    if let Some(secs) = cli.deadline_secs {
        config.network.match_deadline_secs = secs;
    }
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.filter)))
        .init();

    let mode = cli.mode.unwrap_or(config.game.mode);
    info!(?mode, server = %config.network.server_addr, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config, mode)))),
    )?;
    Ok(())
}
