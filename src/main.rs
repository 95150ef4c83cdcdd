mod analytics;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod format;
mod logging;
mod session;
mod ui;
mod workers;

use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the analytics dashboard
    Start {
        /// Analytics API base URL, overriding the saved configuration
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// Run without the terminal UI, printing results to the console
        #[arg(long)]
        headless: bool,

        /// Only count product sales on or after this date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        start_date: Option<NaiveDate>,

        /// Only count product sales on or before this date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        end_date: Option<NaiveDate>,

        /// Disable the dashboard background color
        #[arg(long)]
        no_background_color: bool,
    },
    /// Save a default analytics API base URL
    SetBaseUrl {
        /// Base URL of the analytics API, e.g. http://localhost:8000/api/v1/analytics
        #[arg(value_name = "URL")]
        base_url: String,
    },
    /// Clear the saved configuration
    ClearConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment_str = std::env::var("STOREPULSE_ENVIRONMENT").unwrap_or_default();
    let environment = environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            base_url,
            headless,
            start_date,
            end_date,
            no_background_color,
        } => {
            // Base URL resolution: CLI flag, then saved config, then the
            // environment default.
            let mut environment = environment;
            if let Some(url) = base_url {
                environment = Environment::custom(url);
            } else if config_path.exists() {
                match Config::load_from_file(&config_path) {
                    Ok(config) => environment = Environment::custom(config.api_base_url),
                    Err(e) => {
                        // Fall back to the environment default rather than abort.
                        crate::print_cmd_error!("Failed to load config", &e.to_string());
                    }
                }
            }

            let session = setup_session(environment, start_date, end_date);
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, !no_background_color).await
            }
        }
        Command::SetBaseUrl { base_url } => {
            let config = Config::new(base_url);
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            crate::print_cmd_success!(
                "Configuration saved",
                "default base URL is now {}",
                config.api_base_url
            );
            Ok(())
        }
        Command::ClearConfig => {
            Config::clear(&config_path).map_err(|e| format!("Failed to clear config: {}", e))?;
            crate::print_cmd_info!("Configuration cleared", "{}", config_path.display());
            Ok(())
        }
    }
}
