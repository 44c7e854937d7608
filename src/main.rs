use clap::Parser;
use tracing_subscriber::EnvFilter;

use fastbreak::{
    cli::{self, Cli},
    config::Config,
    startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let client = match startup::build_stats_client(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("failed to build provider client: {e}");
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("failed to open database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = cli::execute(cli.command, &db, &client).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
