//! Ridgeback cooling — replay harness entry point.
//!
//! Drives the cooling service from recorded bus traffic instead of a live
//! middleware connection.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  JSON lines (file/stdin) ──▶ LocalBus ──▶ CoolingService       │
//! │                                               │                │
//! │            stdout ◀── JsonLinesPublisher ◀────┤                │
//! │            stderr ◀── LogEventSink       ◀────┘                │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use ridgeback_cooling::adapters::file_config::FileConfig;
use ridgeback_cooling::adapters::log_sink::LogEventSink;
use ridgeback_cooling::adapters::publisher::JsonLinesPublisher;
use ridgeback_cooling::app::ports::ConfigPort;
use ridgeback_cooling::app::service::CoolingService;
use ridgeback_cooling::bus::LocalBus;
use ridgeback_cooling::config::CoolingConfig;
use ridgeback_cooling::replay;

#[derive(Parser)]
#[command(version, about = "Replay status and cmd_vel traffic through the cooling controller")]
struct Opts {
    /// JSON config file; defaults are used when absent or invalid
    #[arg(long)]
    config: Option<PathBuf>,

    /// Recorded traffic, one envelope per line (stdin when omitted)
    #[arg(long)]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();

    info!("ridgeback-cooling v{}", env!("CARGO_PKG_VERSION"));

    // ── Config ────────────────────────────────────────────────
    let config = match &opts.config {
        Some(path) => match FileConfig::new(path).load() {
            Ok(cfg) => {
                info!("Config loaded from {}", path.display());
                cfg
            }
            Err(e) => {
                warn!("Config load {} failed ({}), using defaults", path.display(), e);
                CoolingConfig::default()
            }
        },
        None => CoolingConfig::default(),
    };

    // ── Wiring ────────────────────────────────────────────────
    let bus: LocalBus = LocalBus::new(&config).context("building topic table")?;
    let mut service = CoolingService::new(&config);
    let stdout = io::stdout();
    let mut publisher = JsonLinesPublisher::new(stdout.lock(), config.fans_topic.clone());
    let mut sink = LogEventSink::new();

    service.start(&mut sink);

    // ── Replay ────────────────────────────────────────────────
    let stats = match &opts.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening replay input {}", path.display()))?;
            replay::run(BufReader::new(file), &bus, &mut service, &mut publisher, &mut sink)?
        }
        None => replay::run(io::stdin().lock(), &bus, &mut service, &mut publisher, &mut sink)?,
    };

    info!(
        "Replay done: {} lines, {} dispatched, {} rejected, {} published ({} write failures)",
        stats.lines,
        stats.dispatched,
        stats.rejected,
        service.publish_count(),
        publisher.failures()
    );
    Ok(())
}
