use chrono::Utc;
use nba_api::model::GameSummary;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

/// A fetched game plus everything the ingest layer resolved for it:
/// season labels, team record ids, and schedule context.
pub struct GameRecord {
    pub summary: GameSummary,
    pub season: i32,
    pub season_type: String,
    pub home_team_id: Option<i32>,
    pub away_team_id: Option<i32>,
    pub home_rest_days: Option<i32>,
    pub away_rest_days: Option<i32>,
    pub home_back_to_back: bool,
    pub away_back_to_back: bool,
}

pub struct GameRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert or update games keyed on the provider game ID.
    pub async fn upsert_many(
        &self,
        games: Vec<GameRecord>,
    ) -> Result<Vec<entity::game::Model>, DbErr> {
        if games.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let games = games.into_iter().map(|game| {
            let home_win = match (game.summary.home_score, game.summary.away_score) {
                (Some(home), Some(away)) => Some(home > away),
                _ => None,
            };

            entity::game::ActiveModel {
                id: ActiveValue::Set(game.summary.game_id),
                game_date: ActiveValue::Set(game.summary.game_date),
                season: ActiveValue::Set(game.season),
                season_type: ActiveValue::Set(game.season_type),
                home_team_id: ActiveValue::Set(game.home_team_id),
                away_team_id: ActiveValue::Set(game.away_team_id),
                home_team_abbr: ActiveValue::Set(game.summary.home_team_abbr),
                away_team_abbr: ActiveValue::Set(game.summary.away_team_abbr),
                home_score: ActiveValue::Set(game.summary.home_score),
                away_score: ActiveValue::Set(game.summary.away_score),
                home_win: ActiveValue::Set(home_win),
                arena: ActiveValue::Set(game.summary.arena),
                attendance: ActiveValue::Set(game.summary.attendance),
                home_rest_days: ActiveValue::Set(game.home_rest_days),
                away_rest_days: ActiveValue::Set(game.away_rest_days),
                home_back_to_back: ActiveValue::Set(game.home_back_to_back),
                away_back_to_back: ActiveValue::Set(game.away_back_to_back),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            }
        });

        entity::prelude::Game::insert_many(games)
            .on_conflict(
                OnConflict::column(entity::game::Column::Id)
                    .update_columns([
                        entity::game::Column::GameDate,
                        entity::game::Column::Season,
                        entity::game::Column::SeasonType,
                        entity::game::Column::HomeTeamId,
                        entity::game::Column::AwayTeamId,
                        entity::game::Column::HomeTeamAbbr,
                        entity::game::Column::AwayTeamAbbr,
                        entity::game::Column::HomeScore,
                        entity::game::Column::AwayScore,
                        entity::game::Column::HomeWin,
                        entity::game::Column::Arena,
                        entity::game::Column::Attendance,
                        entity::game::Column::HomeRestDays,
                        entity::game::Column::AwayRestDays,
                        entity::game::Column::HomeBackToBack,
                        entity::game::Column::AwayBackToBack,
                        entity::game::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_id(&self, game_id: &str) -> Result<Option<entity::game::Model>, DbErr> {
        entity::prelude::Game::find_by_id(game_id).one(self.db).await
    }

    pub async fn get_by_season(
        &self,
        season: i32,
        season_type: &str,
    ) -> Result<Vec<entity::game::Model>, DbErr> {
        entity::prelude::Game::find()
            .filter(entity::game::Column::Season.eq(season))
            .filter(entity::game::Column::SeasonType.eq(season_type))
            .all(self.db)
            .await
    }

    /// Game IDs only, for per-game follow-up fetches.
    pub async fn get_ids_by_season(
        &self,
        season: i32,
        season_type: &str,
    ) -> Result<Vec<String>, DbErr> {
        entity::prelude::Game::find()
            .select_only()
            .column(entity::game::Column::Id)
            .filter(entity::game::Column::Season.eq(season))
            .filter(entity::game::Column::SeasonType.eq(season_type))
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}
