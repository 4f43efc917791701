//! # beauty-console
//!
//! Without a subcommand the interactive TUI starts. Subcommands run once,
//! print to stdout and log to stderr.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use beauty_api::ApiClient;
use beauty_console::config::ConsoleConfig;
use beauty_console::state::Theme;
use beauty_console::{commands, logging, tui, VERSION};

#[derive(Debug, Parser)]
#[command(name = "beauty-console", version, about = "BeautyData inventory console")]
struct Cli {
    /// Base URL of the products API (overrides config and environment).
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Path to console.toml.
    #[arg(long, value_name = "PATH", env = "BEAUTYDATA_CONFIG")]
    config: Option<PathBuf>,

    /// Start with the light theme.
    #[arg(long)]
    light: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every product.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Print one product by id.
    Get {
        id: i64,
        #[arg(long)]
        json: bool,
    },
    /// Print inventory statistics.
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Check that the API answers.
    Ping,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive until the terminal is restored.
    let _log_guard = match cli.command {
        None => Some(logging::init_tui()?),
        Some(_) => {
            logging::init_stderr()?;
            None
        }
    };
    info!(version = VERSION, "beauty-console starting");

    let mut config = ConsoleConfig::load(cli.config.clone()).context("Loading configuration")?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    if cli.light {
        config.ui.theme = Theme::Light;
    }
    config.validate()?;

    let client = ApiClient::new(config.api_config())?;
    let mut out = io::stdout();

    match cli.command {
        None => tui::run(client, &config).await?,
        Some(Command::List { json }) => commands::list(&client.products(), json, &mut out).await?,
        Some(Command::Get { id, json }) => {
            commands::get(&client.products(), id, json, &mut out).await?
        }
        Some(Command::Stats { json }) => {
            commands::stats(&client.products(), json, &mut out).await?
        }
        Some(Command::Ping) => commands::ping(&client, &mut out).await?,
    }

    Ok(())
}
