//! Pool Dash server binary.
//!
//! Resolves the pool configuration once at startup, projects the theme, and
//! serves the dashboard until interrupted.

use anyhow::Result;
use clap::Parser;
use pool_dash::config::{ConfigCache, ConfigSource};
use pool_dash::dashboard;
use pool_dash::theme::{FontRegistry, StyleRoot, project};
use std::fs::OpenOptions;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

/// Default port for the dashboard.
const DEFAULT_PORT: u16 = 8080;

/// Mining pool status dashboard with YAML-driven branding
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to pool.config.yml (overrides candidate discovery)
    #[arg(short, long)]
    config: Option<String>,

    /// Port to serve the dashboard on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2")]
    log: String,
}

fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            let file = OpenOptions::new().create(true).append(true).open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let source = match &cli.config {
        Some(path) => ConfigSource::explicit(path),
        None => ConfigSource::discover(),
    };

    // Resolve once up front so the theme is projected before anything renders.
    let cache = Arc::new(ConfigCache::new(source));
    let config = cache.get().await?;

    let mut theme = StyleRoot::new();
    let mut fonts = FontRegistry::new();
    project(&config.theme, &config.coins, &mut theme, &mut fonts);
    info!(
        "fonts requested: {}",
        fonts.requested().collect::<Vec<_>>().join(", ")
    );

    let (shutdown_tx, _addr) =
        dashboard::start_server(Arc::clone(&cache), Arc::new(theme), cli.port).await?;

    tokio::signal::ctrl_c().await?;
    let _ = shutdown_tx.send(());

    Ok(())
}
