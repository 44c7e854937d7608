use clap::{Parser, Subcommand, ValueEnum};
use sea_orm::DatabaseConnection;

use crate::{
    error::{ingest::IngestError, Error},
    service::ingest::{
        game_stats::GameStatsIngest, games::GameIngest, player_stats::PlayerStatsIngest,
        players::PlayerIngest, team_stats::TeamStatsIngest, teams::TeamIngest,
    },
};

#[derive(Parser)]
#[command(name = "fastbreak", about = "NBA statistics ingestion pipeline", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize database tables
    InitDb,
    /// Ingest team information
    IngestTeams,
    /// Ingest games for a season
    IngestGames {
        /// Season starting year, e.g. 2023 for the 2023-24 season
        #[arg(long)]
        season: i32,
        #[arg(long, value_enum, default_value_t = SeasonType::RegularSeason)]
        season_type: SeasonType,
    },
    /// Ingest player rosters
    IngestPlayers {
        /// Restrict to players active in this season
        #[arg(long)]
        season: Option<i32>,
        /// Restrict to one team's roster
        #[arg(long)]
        team_id: Option<String>,
    },
    /// Ingest team statistics for a season
    IngestTeamStats {
        #[arg(long)]
        season: i32,
        #[arg(long, value_enum, default_value_t = SeasonType::RegularSeason)]
        season_type: SeasonType,
    },
    /// Ingest player statistics for a season
    IngestPlayerStats {
        #[arg(long)]
        season: i32,
        #[arg(long, value_enum, default_value_t = SeasonType::RegularSeason)]
        season_type: SeasonType,
    },
    /// Ingest a range of seasons in dependency order
    IngestHistorical {
        #[arg(long, default_value_t = 2020)]
        start_year: i32,
        /// Defaults to the start year
        #[arg(long)]
        end_year: Option<i32>,
        #[arg(
            long = "data-types",
            value_enum,
            num_args = 1..,
            default_values_t = [DataType::Teams, DataType::Games, DataType::TeamStats]
        )]
        data_types: Vec<DataType>,
        #[arg(long, value_enum, default_value_t = SeasonType::RegularSeason)]
        season_type: SeasonType,
    },
    /// Run analysis over ingested data (placeholder)
    Analyze {
        #[arg(long)]
        season: Option<i32>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SeasonType {
    RegularSeason,
    Playoffs,
    AllStar,
}

impl SeasonType {
    /// Label the provider expects and the schema stores.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonType::RegularSeason => "Regular Season",
            SeasonType::Playoffs => "Playoffs",
            SeasonType::AllStar => "All-Star",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DataType {
    Teams,
    Games,
    Players,
    TeamStats,
    PlayerStats,
    GameStats,
}

/// Fixed execution order for historical ingestion. Stats reference teams,
/// games, and players, so those are always processed first regardless of
/// the order the flags were given in.
const HISTORICAL_ORDER: [DataType; 6] = [
    DataType::Teams,
    DataType::Games,
    DataType::Players,
    DataType::TeamStats,
    DataType::PlayerStats,
    DataType::GameStats,
];

pub async fn execute(
    command: Command,
    db: &DatabaseConnection,
    client: &nba_api::Client,
) -> Result<(), Error> {
    match command {
        Command::InitDb => {
            // Migrations already ran while connecting.
            tracing::info!("database initialized");
            Ok(())
        }
        Command::IngestTeams => {
            TeamIngest::new(db, client).run().await?;
            Ok(())
        }
        Command::IngestGames {
            season,
            season_type,
        } => {
            GameIngest::new(db, client)
                .run(season, season_type.as_str())
                .await?;
            Ok(())
        }
        Command::IngestPlayers { season, team_id } => {
            PlayerIngest::new(db, client)
                .run(season, team_id.as_deref())
                .await?;
            Ok(())
        }
        Command::IngestTeamStats {
            season,
            season_type,
        } => {
            TeamStatsIngest::new(db, client)
                .run(season, season_type.as_str())
                .await?;
            Ok(())
        }
        Command::IngestPlayerStats {
            season,
            season_type,
        } => {
            PlayerStatsIngest::new(db, client)
                .run(season, season_type.as_str())
                .await?;
            Ok(())
        }
        Command::IngestHistorical {
            start_year,
            end_year,
            data_types,
            season_type,
        } => {
            let end_year = end_year.unwrap_or(start_year);
            if start_year > end_year {
                return Err(IngestError::InvalidYearRange {
                    start: start_year,
                    end: end_year,
                }
                .into());
            }

            for year in start_year..=end_year {
                tracing::info!(year, "processing season");
                for data_type in HISTORICAL_ORDER {
                    if !data_types.contains(&data_type) {
                        continue;
                    }
                    match data_type {
                        DataType::Teams => {
                            TeamIngest::new(db, client).run().await?;
                        }
                        DataType::Games => {
                            GameIngest::new(db, client)
                                .run(year, season_type.as_str())
                                .await?;
                        }
                        DataType::Players => {
                            PlayerIngest::new(db, client).run(Some(year), None).await?;
                        }
                        DataType::TeamStats => {
                            TeamStatsIngest::new(db, client)
                                .run(year, season_type.as_str())
                                .await?;
                        }
                        DataType::PlayerStats => {
                            PlayerStatsIngest::new(db, client)
                                .run(year, season_type.as_str())
                                .await?;
                        }
                        DataType::GameStats => {
                            GameStatsIngest::new(db, client)
                                .run(year, season_type.as_str())
                                .await?;
                        }
                    }
                }
            }

            tracing::info!(start_year, end_year, "historical ingestion complete");
            Ok(())
        }
        Command::Analyze { season } => {
            tracing::info!(?season, "analysis is not implemented yet");
            Ok(())
        }
    }
}
