use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{config::Config, error::Error};

/// Build the stats provider client from configuration.
pub fn build_stats_client(config: &Config) -> Result<nba_api::Client, Error> {
    let mut builder = nba_api::Client::builder()
        .request_interval(Duration::from_millis(config.rate_limit_ms))
        .requests_per_minute(config.requests_per_minute);

    if let Some(base_url) = &config.api_base_url {
        builder = builder.base_url(base_url);
    }
    if let Some(api_key) = &config.api_key {
        builder = builder.api_key(api_key);
    }
    if let Some(token) = &config.access_token {
        builder = builder.access_token(token);
    }

    Ok(builder.build()?)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
