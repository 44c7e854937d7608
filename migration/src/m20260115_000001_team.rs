use sea_orm_migration::{prelude::*, schema::*};

static IDX_TEAM_CONFERENCE: &str = "idx-team-conference";
static IDX_TEAM_DIVISION: &str = "idx-team-division";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(string_uniq(Team::TeamId))
                    .col(string(Team::Name))
                    .col(string_uniq(Team::Abbreviation))
                    .col(string_null(Team::City))
                    .col(string_null(Team::State))
                    .col(string_null(Team::Conference))
                    .col(string_null(Team::Division))
                    .col(string_null(Team::Arena))
                    .col(integer_null(Team::ArenaCapacity))
                    .col(integer_null(Team::YearFounded))
                    .col(timestamp(Team::CreatedAt))
                    .col(timestamp(Team::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_CONFERENCE)
                    .table(Team::Table)
                    .col(Team::Conference)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_DIVISION)
                    .table(Team::Table)
                    .col(Team::Division)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_DIVISION)
                    .table(Team::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_CONFERENCE)
                    .table(Team::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    TeamId,
    Name,
    Abbreviation,
    City,
    State,
    Conference,
    Division,
    Arena,
    ArenaCapacity,
    YearFounded,
    CreatedAt,
    UpdatedAt,
}
