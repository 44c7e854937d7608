use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260115_000001_team::Team, m20260115_000003_game::Game};

static IDX_GAME_STATS_NATURAL_KEY: &str = "idx-game_stats-game_id-team_id";
static FK_GAME_STATS_GAME_ID: &str = "fk-game_stats-game_id";
static FK_GAME_STATS_TEAM_ID: &str = "fk-game_stats-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameStats::Table)
                    .if_not_exists()
                    .col(pk_auto(GameStats::Id))
                    .col(string(GameStats::GameId))
                    .col(integer(GameStats::TeamId))
                    .col(boolean(GameStats::IsHome))
                    .col(integer(GameStats::Points))
                    .col(integer(GameStats::Fgm))
                    .col(integer(GameStats::Fga))
                    .col(double_null(GameStats::FgPct))
                    .col(integer(GameStats::Fg3m))
                    .col(integer(GameStats::Fg3a))
                    .col(double_null(GameStats::Fg3Pct))
                    .col(integer(GameStats::Ftm))
                    .col(integer(GameStats::Fta))
                    .col(double_null(GameStats::FtPct))
                    .col(integer(GameStats::Oreb))
                    .col(integer(GameStats::Dreb))
                    .col(integer(GameStats::Reb))
                    .col(integer(GameStats::Ast))
                    .col(integer(GameStats::Stl))
                    .col(integer(GameStats::Blk))
                    .col(integer(GameStats::Tov))
                    .col(integer(GameStats::Pf))
                    .col(integer_null(GameStats::PlusMinus))
                    .col(timestamp(GameStats::CreatedAt))
                    .col(timestamp(GameStats::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAME_STATS_NATURAL_KEY)
                    .table(GameStats::Table)
                    .col(GameStats::GameId)
                    .col(GameStats::TeamId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GAME_STATS_GAME_ID)
                    .from_tbl(GameStats::Table)
                    .from_col(GameStats::GameId)
                    .to_tbl(Game::Table)
                    .to_col(Game::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GAME_STATS_TEAM_ID)
                    .from_tbl(GameStats::Table)
                    .from_col(GameStats::TeamId)
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
                    .name(FK_GAME_STATS_TEAM_ID)
                    .table(GameStats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_GAME_STATS_GAME_ID)
                    .table(GameStats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAME_STATS_NATURAL_KEY)
                    .table(GameStats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GameStats::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum GameStats {
    Table,
    Id,
    GameId,
    TeamId,
    IsHome,
    Points,
    Fgm,
    Fga,
    FgPct,
    Fg3m,
    Fg3a,
    Fg3Pct,
    Ftm,
    Fta,
    FtPct,
    Oreb,
    Dreb,
    Reb,
    Ast,
    Stl,
    Blk,
    Tov,
    Pf,
    PlusMinus,
    CreatedAt,
    UpdatedAt,
}
