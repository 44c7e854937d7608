use chrono::Utc;
use nba_api::model::Player;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert or update players keyed on the provider player ID.
    ///
    /// Each entry pairs the fetched player with its resolved team record
    /// id; `None` keeps the roster reference NULL (free agents, or teams
    /// not yet ingested).
    pub async fn upsert_many(
        &self,
        players: Vec<(Player, Option<i32>)>,
    ) -> Result<Vec<entity::player::Model>, DbErr> {
        if players.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let players = players
            .into_iter()
            .map(|(player, team_id)| entity::player::ActiveModel {
                player_id: ActiveValue::Set(player.player_id),
                name: ActiveValue::Set(player.name),
                first_name: ActiveValue::Set(player.first_name),
                last_name: ActiveValue::Set(player.last_name),
                team_id: ActiveValue::Set(team_id),
                position: ActiveValue::Set(player.position),
                height: ActiveValue::Set(player.height),
                weight: ActiveValue::Set(player.weight),
                birth_date: ActiveValue::Set(player.birth_date),
                college: ActiveValue::Set(player.college),
                draft_year: ActiveValue::Set(player.draft_year),
                draft_round: ActiveValue::Set(player.draft_round),
                draft_number: ActiveValue::Set(player.draft_number),
                jersey_number: ActiveValue::Set(player.jersey_number),
                is_active: ActiveValue::Set(player.is_active),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::Player::insert_many(players)
            .on_conflict(
                OnConflict::column(entity::player::Column::PlayerId)
                    .update_columns([
                        entity::player::Column::Name,
                        entity::player::Column::FirstName,
                        entity::player::Column::LastName,
                        entity::player::Column::TeamId,
                        entity::player::Column::Position,
                        entity::player::Column::Height,
                        entity::player::Column::Weight,
                        entity::player::Column::BirthDate,
                        entity::player::Column::College,
                        entity::player::Column::DraftYear,
                        entity::player::Column::DraftRound,
                        entity::player::Column::DraftNumber,
                        entity::player::Column::JerseyNumber,
                        entity::player::Column::IsActive,
                        entity::player::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_player_id(
        &self,
        player_id: &str,
    ) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::PlayerId.eq(player_id))
            .one(self.db)
            .await
    }

    /// Map provider player IDs to database record ids.
    pub async fn get_record_ids_by_player_ids(
        &self,
        player_ids: &[String],
    ) -> Result<Vec<(i32, String)>, DbErr> {
        entity::prelude::Player::find()
            .select_only()
            .column(entity::player::Column::Id)
            .column(entity::player::Column::PlayerId)
            .filter(entity::player::Column::PlayerId.is_in(player_ids.iter().cloned()))
            .into_tuple::<(i32, String)>()
            .all(self.db)
            .await
    }
}
