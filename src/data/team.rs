use chrono::Utc;
use nba_api::model::Team;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert or update teams keyed on the provider team ID. Descriptive
    /// fields are overwritten; `created_at` survives updates.
    pub async fn upsert_many(&self, teams: Vec<Team>) -> Result<Vec<entity::team::Model>, DbErr> {
        if teams.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let teams = teams.into_iter().map(|team| entity::team::ActiveModel {
            team_id: ActiveValue::Set(team.team_id),
            name: ActiveValue::Set(team.name),
            abbreviation: ActiveValue::Set(team.abbreviation),
            city: ActiveValue::Set(team.city),
            state: ActiveValue::Set(team.state),
            conference: ActiveValue::Set(team.conference),
            division: ActiveValue::Set(team.division),
            arena: ActiveValue::Set(team.arena),
            arena_capacity: ActiveValue::Set(team.arena_capacity),
            year_founded: ActiveValue::Set(team.year_founded),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::Team::insert_many(teams)
            .on_conflict(
                OnConflict::column(entity::team::Column::TeamId)
                    .update_columns([
                        entity::team::Column::Name,
                        entity::team::Column::Abbreviation,
                        entity::team::Column::City,
                        entity::team::Column::State,
                        entity::team::Column::Conference,
                        entity::team::Column::Division,
                        entity::team::Column::Arena,
                        entity::team::Column::ArenaCapacity,
                        entity::team::Column::YearFounded,
                        entity::team::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_team_id(
        &self,
        team_id: &str,
    ) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::TeamId.eq(team_id))
            .one(self.db)
            .await
    }

    pub async fn find_by_abbreviation(
        &self,
        abbreviation: &str,
    ) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::Abbreviation.eq(abbreviation.to_uppercase()))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::team::Model>, DbErr> {
        entity::prelude::Team::find().all(self.db).await
    }

    /// Map provider team IDs to database record ids.
    pub async fn get_record_ids_by_team_ids(
        &self,
        team_ids: &[String],
    ) -> Result<Vec<(i32, String)>, DbErr> {
        entity::prelude::Team::find()
            .select_only()
            .column(entity::team::Column::Id)
            .column(entity::team::Column::TeamId)
            .filter(entity::team::Column::TeamId.is_in(team_ids.iter().cloned()))
            .into_tuple::<(i32, String)>()
            .all(self.db)
            .await
    }

    /// Map team abbreviations to database record ids.
    pub async fn get_record_ids_by_abbreviations(
        &self,
        abbreviations: &[String],
    ) -> Result<Vec<(i32, String)>, DbErr> {
        entity::prelude::Team::find()
            .select_only()
            .column(entity::team::Column::Id)
            .column(entity::team::Column::Abbreviation)
            .filter(entity::team::Column::Abbreviation.is_in(abbreviations.iter().cloned()))
            .into_tuple::<(i32, String)>()
            .all(self.db)
            .await
    }
}
