use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_team::Team;

static IDX_GAME_SEASON_DATE: &str = "idx-game-season-game_date";
static IDX_GAME_HOME_TEAM_ABBR: &str = "idx-game-home_team_abbr";
static IDX_GAME_AWAY_TEAM_ABBR: &str = "idx-game-away_team_abbr";
static FK_GAME_HOME_TEAM_ID: &str = "fk-game-home_team_id";
static FK_GAME_AWAY_TEAM_ID: &str = "fk-game-away_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(string(Game::Id).primary_key())
                    .col(date(Game::GameDate))
                    .col(integer(Game::Season))
                    .col(string(Game::SeasonType))
                    .col(integer_null(Game::HomeTeamId))
                    .col(integer_null(Game::AwayTeamId))
                    .col(string(Game::HomeTeamAbbr))
                    .col(string(Game::AwayTeamAbbr))
                    .col(integer_null(Game::HomeScore))
                    .col(integer_null(Game::AwayScore))
                    .col(boolean_null(Game::HomeWin))
                    .col(string_null(Game::Arena))
                    .col(integer_null(Game::Attendance))
                    .col(integer_null(Game::HomeRestDays))
                    .col(integer_null(Game::AwayRestDays))
                    .col(boolean(Game::HomeBackToBack))
                    .col(boolean(Game::AwayBackToBack))
                    .col(timestamp(Game::CreatedAt))
                    .col(timestamp(Game::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAME_SEASON_DATE)
                    .table(Game::Table)
                    .col(Game::Season)
                    .col(Game::GameDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAME_HOME_TEAM_ABBR)
                    .table(Game::Table)
                    .col(Game::HomeTeamAbbr)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAME_AWAY_TEAM_ABBR)
                    .table(Game::Table)
                    .col(Game::AwayTeamAbbr)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GAME_HOME_TEAM_ID)
                    .from_tbl(Game::Table)
                    .from_col(Game::HomeTeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GAME_AWAY_TEAM_ID)
                    .from_tbl(Game::Table)
                    .from_col(Game::AwayTeamId)
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
                    .name(FK_GAME_AWAY_TEAM_ID)
                    .table(Game::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_GAME_HOME_TEAM_ID)
                    .table(Game::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAME_AWAY_TEAM_ABBR)
                    .table(Game::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAME_HOME_TEAM_ABBR)
                    .table(Game::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAME_SEASON_DATE)
                    .table(Game::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Id,
    GameDate,
    Season,
    SeasonType,
    HomeTeamId,
    AwayTeamId,
    HomeTeamAbbr,
    AwayTeamAbbr,
    HomeScore,
    AwayScore,
    HomeWin,
    Arena,
    Attendance,
    HomeRestDays,
    AwayRestDays,
    HomeBackToBack,
    AwayBackToBack,
    CreatedAt,
    UpdatedAt,
}
