use anyhow::Result;
use clap::Parser;
use moltbot::{cli, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file before anything else (silently ignore if missing)
    dotenvy::dotenv().ok();

    // Parse CLI arguments first to check for debug flag
    let cli_args = cli::Cli::parse();

    let config = cli::load_config(cli_args.config.as_deref())?;

    // Initialize logging based on --debug flag
    // Log directory honours DEBUG_LOGS_LOCATION
    let log_config = logging::LogConfig::new()
        .with_debug_mode(cli_args.debug)
        .with_level(config.logging.level.clone());

    let _guard = logging::init_logging(log_config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    // Config is read before the subscriber exists; report it now
    let sources = match cli_args.config.as_deref() {
        Some(path) => vec![std::path::PathBuf::from(path)],
        None => moltbot::config::Config::sources(),
    };
    tracing::debug!(
        ?sources,
        level = %config.logging.level,
        tick_rate_ms = config.ui.tick_rate_ms,
        "Configuration loaded"
    );

    // Clean up old log files (keep last 7 days)
    if cli_args.debug
        && let Ok(removed) = logging::cleanup_old_logs(7)
        && removed > 0
    {
        tracing::info!("Cleaned up {} old log file(s)", removed);
    }

    cli::run(cli_args, config).await
}
