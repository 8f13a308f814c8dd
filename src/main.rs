use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use esther::config::PortalConfig;
use esther::tui::app::PortalApp;
use esther::tui::runner::run_tui;

#[derive(Parser)]
#[command(name = "esther", about = "University student portal, in the terminal.")]
struct Cli {
    /// Config file (defaults to .esther/config.yaml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seconds between carousel advances
    #[arg(long)]
    autoplay_secs: Option<u64>,

    /// Write logs to this file (the TUI owns the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Page to open at startup
    #[arg(long, default_value = "/")]
    start: String,
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("esther=info".parse()?);
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let work_dir = std::env::current_dir()?;
    let config = PortalConfig::load(cli.config.as_deref(), &work_dir)?
        .with_autoplay_secs(cli.autoplay_secs);
    config.validate()?;

    let mut app = PortalApp::from_config(&config)?;
    app.start_at(&cli.start)?;

    info!(
        start = %cli.start,
        autoplay = ?config.autoplay_period(),
        "Esther starting in {}",
        work_dir.display()
    );

    run_tui(&mut app).await
}
