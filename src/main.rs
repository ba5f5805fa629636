//! GoFinances dashboard entry point

use anyhow::Context;
use clap::Parser;
use gofinances_api::start_server;
use gofinances_config::{Config, ConfigError};
use gofinances_core::HttpTransactionsApi;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "gofinances")]
#[command(version)]
#[command(about = "A lightweight server-rendered dashboard for a GoFinances transactions API", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn init_logger(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let (config, found) = match Config::load(&args.config) {
        Ok(config) => (config, true),
        Err(ConfigError::FileNotFound { .. }) => (Config::default(), false),
        Err(e) => {
            eprintln!("{}", e.to_details());
            return Err(e).context("Failed to load configuration");
        }
    };
    init_logger(&config.logging.level);

    if found {
        log::info!("Config loaded from {}", args.config.display());
    } else {
        log::warn!("Config file {} not found, using defaults", args.config.display());
    }
    log::info!("Transactions API: {}", config.transactions_url());

    let api = HttpTransactionsApi::from_config(&config).context("Failed to create API client")?;
    start_server(config, Arc::new(api)).await.context("Server error")?;

    Ok(())
}
