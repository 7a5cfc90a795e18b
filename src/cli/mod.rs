//! CLI Module
//!
//! Command-line interface for Moltbot using Clap v4.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::Config;

/// Moltbot Negotiator - terminal onboarding for your Deals Wingman
#[derive(Parser, Debug)]
#[command(name = "moltbot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug mode (writes log files to .moltbot/logs/)
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the onboarding setup wizard (default)
    Setup,

    /// Write a default configuration file
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show the effective configuration
    Config,

    /// Log management operations
    Logs {
        #[command(subcommand)]
        operation: LogCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum LogCommands {
    /// Show log file location and status
    Status,
    /// Clean up old log files
    Clean {
        /// Maximum age in days (default: 7)
        #[arg(short = 'a', long, default_value = "7")]
        days: u64,
    },
}

/// Load configuration from file or defaults
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config = if let Some(path) = config_path {
        Config::load_from_path(path)?
    } else {
        Config::load()?
    };

    config.validate()?;
    Ok(config)
}

/// Main CLI entry point
pub async fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        None | Some(Commands::Setup) => cmd_setup(&config).await,
        Some(Commands::Init { force }) => cmd_init(force),
        Some(Commands::Config) => cmd_config(&config),
        Some(Commands::Logs { operation }) => cmd_logs(operation),
    }
}

/// Run the onboarding wizard in the terminal
async fn cmd_setup(config: &Config) -> Result<()> {
    use crate::tui::{self, App};

    tracing::info!("Starting onboarding wizard");
    let app = tui::run(App::new(), config.ui.tick_interval())
        .await
        .context("TUI error")?;

    tracing::info!(
        complete = app.wizard.is_complete(),
        step = app.wizard.current_step().number(),
        "Onboarding wizard closed"
    );
    Ok(())
}

/// Initialize configuration file
fn cmd_init(force: bool) -> Result<()> {
    let config_path =
        Config::system_config_path().context("Could not determine config directory")?;

    if config_path.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists at: {}\nUse --force to overwrite",
            config_path.display()
        );
    }

    Config::default().save(&config_path)?;
    println!("Configuration initialized at: {}", config_path.display());
    Ok(())
}

/// Show configuration
fn cmd_config(config: &Config) -> Result<()> {
    println!("Moltbot Configuration\n");
    println!("Log level: {}", config.logging.level);
    println!("Tick rate: {} ms", config.ui.tick_rate_ms);
    if let Some(path) = Config::system_config_path() {
        println!(
            "System config: {} ({})",
            path.display(),
            if path.exists() { "found" } else { "not found" }
        );
    }
    Ok(())
}

fn cmd_logs(operation: LogCommands) -> Result<()> {
    use crate::logging;

    let log_dir = logging::default_log_dir();

    match operation {
        LogCommands::Status => {
            println!("Log directory: {}", log_dir.display());
            match logging::newest_log_in(&log_dir) {
                Some(latest) => println!("Latest log: {}", latest.display()),
                None => {
                    println!("No logs found.");
                    println!("\nRun with -d to enable debug logging:");
                    println!("   moltbot -d");
                }
            }
            Ok(())
        }

        LogCommands::Clean { days } => {
            println!("Cleaning up log files older than {} days...", days);
            let removed =
                logging::cleanup_old_logs_in(&log_dir, days).context("Failed to clean logs")?;
            if removed > 0 {
                println!("Removed {} old log file(s)", removed);
            } else {
                println!("No old log files to remove");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_setup() {
        let cli = Cli::try_parse_from(["moltbot"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.debug);

        let cli = Cli::try_parse_from(["moltbot", "-d", "setup"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Setup)));
        assert!(cli.debug);
    }

    #[test]
    fn test_logs_clean_days() {
        let cli = Cli::try_parse_from(["moltbot", "logs", "clean", "--days", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Logs {
                operation: LogCommands::Clean { days: 3 },
            })
        ));
    }

    #[test]
    fn test_init_and_config_subcommands() {
        let cli = Cli::try_parse_from(["moltbot", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Init { force: true })));

        let cli = Cli::try_parse_from(["moltbot", "config"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Config)));
    }

    #[test]
    fn test_logs_clean_accepts_huge_days() {
        let cli = Cli::try_parse_from(["moltbot", "logs", "clean", "--days", "18446744073709551615"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Logs {
                operation: LogCommands::Clean { days: u64::MAX },
            })
        ));
    }

    #[test]
    fn test_load_config_rejects_missing_file() {
        assert!(load_config(Some("/definitely/not/here.toml")).is_err());
    }
}
