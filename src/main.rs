use anyhow::Context;
use clap::Parser;
use etf_nexus::application::session::Session;
use etf_nexus::config::Config;
use etf_nexus::domain::repositories::InstrumentRepository;
use etf_nexus::infrastructure::repositories::InMemoryInstrumentRepository;
use etf_nexus::infrastructure::snapshot_loader::SnapshotLoader;
use etf_nexus::interfaces::view_models::ScreenViewModel;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level, info, warn};

/// Headless driver: loads the market snapshot and prints the derived view-model
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Snapshot file (overrides ETF_DATA_PATH)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Viewport width in pixels (overrides VIEWPORT_WIDTH_PX)
    #[arg(long)]
    width: Option<u32>,

    /// Print the view-model as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load config")?;
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    if let Some(width) = cli.width {
        config.viewport_width_px = width;
    }

    let snapshot = SnapshotLoader::load(&config.data_path)
        .with_context(|| format!("Failed to load snapshot {:?}", config.data_path))?;
    let repository = Arc::new(InMemoryInstrumentRepository::new(snapshot));
    let session = Session::new(repository.clone());

    let layout = config.layout_mode();
    info!(
        "Session ready: {} instruments, {:?} layout (width {}px, breakpoint {}px)",
        repository.len(),
        layout,
        config.viewport_width_px,
        config.compact_breakpoint_px
    );

    if session.is_unavailable() {
        warn!("Snapshot holds no instruments, data unavailable");
    } else {
        log_signals(&session);
    }

    if cli.json {
        let view_model = ScreenViewModel::build(&session, layout);
        println!("{}", serde_json::to_string_pretty(&view_model)?);
    }

    Ok(())
}

fn log_signals(session: &Session) {
    for etf in session.repository().get_all() {
        for view in ScreenViewModel::holdings(etf)
            .iter()
            .filter(|h| h.signal.is_actionable())
        {
            info!("{} / {}: {}", etf.id, view.holding.name, view.signal.label);
        }
    }
}
