use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use folio::config::{Config, Prefs};
use folio::ui::runtime;

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "A personal portfolio page for the terminal"
)]
struct Args {
    /// Path to the page config (defaults to ~/.config/folio/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append logs to this file; the TUI owns stdout.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Event-loop tick interval in milliseconds.
    #[arg(long, default_value_t = 50)]
    tick_ms: u64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file '{}'", path.display()))?;
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let prefs_path = Prefs::prefs_path();
    let prefs = Prefs::load_from(&prefs_path).unwrap_or_else(|err| {
        warn!(error = %err, "could not read prefs, falling back to defaults");
        Prefs::default()
    });

    // The original page greets visitors on the console; we greet the log.
    info!(
        version = env!("CARGO_PKG_VERSION"),
        contact = %config.profile.email,
        "hi there, thanks for stopping by"
    );

    runtime::run(
        config,
        prefs,
        prefs_path,
        Duration::from_millis(args.tick_ms.max(10)),
    )?;
    Ok(())
}
