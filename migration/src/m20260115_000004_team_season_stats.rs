use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_team::Team;

static IDX_TEAM_SEASON_STATS_NATURAL_KEY: &str = "idx-team_season_stats-team_id-season-season_type";
static FK_TEAM_SEASON_STATS_TEAM_ID: &str = "fk-team_season_stats-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamSeasonStats::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamSeasonStats::Id))
                    .col(integer(TeamSeasonStats::TeamId))
                    .col(integer(TeamSeasonStats::Season))
                    .col(string(TeamSeasonStats::SeasonType))
                    .col(integer(TeamSeasonStats::GamesPlayed))
                    .col(integer(TeamSeasonStats::Wins))
                    .col(integer(TeamSeasonStats::Losses))
                    .col(double_null(TeamSeasonStats::WinPct))
                    .col(double_null(TeamSeasonStats::PointsPerGame))
                    .col(double_null(TeamSeasonStats::ReboundsPerGame))
                    .col(double_null(TeamSeasonStats::AssistsPerGame))
                    .col(double_null(TeamSeasonStats::StealsPerGame))
                    .col(double_null(TeamSeasonStats::BlocksPerGame))
                    .col(double_null(TeamSeasonStats::TurnoversPerGame))
                    .col(double_null(TeamSeasonStats::FgPct))
                    .col(double_null(TeamSeasonStats::Fg3Pct))
                    .col(double_null(TeamSeasonStats::FtPct))
                    .col(timestamp(TeamSeasonStats::CreatedAt))
                    .col(timestamp(TeamSeasonStats::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_SEASON_STATS_NATURAL_KEY)
                    .table(TeamSeasonStats::Table)
                    .col(TeamSeasonStats::TeamId)
                    .col(TeamSeasonStats::Season)
                    .col(TeamSeasonStats::SeasonType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_SEASON_STATS_TEAM_ID)
                    .from_tbl(TeamSeasonStats::Table)
                    .from_col(TeamSeasonStats::TeamId)
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
                    .name(FK_TEAM_SEASON_STATS_TEAM_ID)
                    .table(TeamSeasonStats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_SEASON_STATS_NATURAL_KEY)
                    .table(TeamSeasonStats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TeamSeasonStats::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TeamSeasonStats {
    Table,
    Id,
    TeamId,
    Season,
    SeasonType,
    GamesPlayed,
    Wins,
    Losses,
    WinPct,
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
