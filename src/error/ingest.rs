use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("invalid year range: start year {start} is after end year {end}")]
    InvalidYearRange { start: i32, end: i32 },
    // Box scores can only be fetched for games already in the database,
    // since the provider is queried per game ID.
    #[error("no games stored for season {season} ({season_type}); run ingest-games first")]
    NoGamesForSeason { season: i32, season_type: String },
}
