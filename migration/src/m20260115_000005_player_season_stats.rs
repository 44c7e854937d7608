use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260115_000001_team::Team, m20260115_000002_player::Player};

static IDX_PLAYER_SEASON_STATS_NATURAL_KEY: &str =
    "idx-player_season_stats-player_id-season-season_type";
static FK_PLAYER_SEASON_STATS_PLAYER_ID: &str = "fk-player_season_stats-player_id";
static FK_PLAYER_SEASON_STATS_TEAM_ID: &str = "fk-player_season_stats-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerSeasonStats::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerSeasonStats::Id))
                    .col(integer(PlayerSeasonStats::PlayerId))
                    .col(integer_null(PlayerSeasonStats::TeamId))
                    .col(integer(PlayerSeasonStats::Season))
                    .col(string(PlayerSeasonStats::SeasonType))
                    .col(integer(PlayerSeasonStats::GamesPlayed))
                    .col(integer(PlayerSeasonStats::GamesStarted))
                    .col(double_null(PlayerSeasonStats::MinutesPerGame))
                    .col(double_null(PlayerSeasonStats::PointsPerGame))
                    .col(double_null(PlayerSeasonStats::ReboundsPerGame))
                    .col(double_null(PlayerSeasonStats::AssistsPerGame))
                    .col(double_null(PlayerSeasonStats::StealsPerGame))
                    .col(double_null(PlayerSeasonStats::BlocksPerGame))
                    .col(double_null(PlayerSeasonStats::TurnoversPerGame))
                    .col(double_null(PlayerSeasonStats::FgPct))
                    .col(double_null(PlayerSeasonStats::Fg3Pct))
                    .col(double_null(PlayerSeasonStats::FtPct))
                    .col(timestamp(PlayerSeasonStats::CreatedAt))
                    .col(timestamp(PlayerSeasonStats::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_SEASON_STATS_NATURAL_KEY)
                    .table(PlayerSeasonStats::Table)
                    .col(PlayerSeasonStats::PlayerId)
                    .col(PlayerSeasonStats::Season)
                    .col(PlayerSeasonStats::SeasonType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_SEASON_STATS_PLAYER_ID)
                    .from_tbl(PlayerSeasonStats::Table)
                    .from_col(PlayerSeasonStats::PlayerId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_SEASON_STATS_TEAM_ID)
                    .from_tbl(PlayerSeasonStats::Table)
                    .from_col(PlayerSeasonStats::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLAYER_SEASON_STATS_TEAM_ID)
                    .table(PlayerSeasonStats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLAYER_SEASON_STATS_PLAYER_ID)
                    .table(PlayerSeasonStats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_SEASON_STATS_NATURAL_KEY)
                    .table(PlayerSeasonStats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlayerSeasonStats::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PlayerSeasonStats {
    Table,
    Id,
    PlayerId,
    TeamId,
    Season,
    SeasonType,
    GamesPlayed,
    GamesStarted,
    MinutesPerGame,
    PointsPerGame,
    ReboundsPerGame,
    AssistsPerGame,
    StealsPerGame,
    BlocksPerGame,
    TurnoversPerGame,
    FgPct,
    Fg3Pct,
    FtPct,
    CreatedAt,
    UpdatedAt,
}
