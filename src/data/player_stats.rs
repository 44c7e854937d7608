use chrono::Utc;
use nba_api::model::PlayerSeasonTotals;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct PlayerStatsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerStatsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert or update season averages keyed on (player, season, season
    /// type). Each entry carries the resolved player record id and an
    /// optional team record id.
    pub async fn upsert_many(
        &self,
        rows: Vec<(i32, Option<i32>, PlayerSeasonTotals)>,
        season: i32,
        season_type: &str,
    ) -> Result<Vec<entity::player_season_stats::Model>, DbErr> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let rows = rows.into_iter().map(|(player_id, team_id, totals)| {
            entity::player_season_stats::ActiveModel {
                player_id: ActiveValue::Set(player_id),
                team_id: ActiveValue::Set(team_id),
                season: ActiveValue::Set(season),
                season_type: ActiveValue::Set(season_type.to_string()),
                games_played: ActiveValue::Set(totals.games_played.unwrap_or(0)),
                games_started: ActiveValue::Set(totals.games_started.unwrap_or(0)),
                minutes_per_game: ActiveValue::Set(totals.minutes_per_game),
                points_per_game: ActiveValue::Set(totals.points_per_game),
                rebounds_per_game: ActiveValue::Set(totals.rebounds_per_game),
                assists_per_game: ActiveValue::Set(totals.assists_per_game),
                steals_per_game: ActiveValue::Set(totals.steals_per_game),
                blocks_per_game: ActiveValue::Set(totals.blocks_per_game),
                turnovers_per_game: ActiveValue::Set(totals.turnovers_per_game),
                fg_pct: ActiveValue::Set(totals.fg_pct),
                fg3_pct: ActiveValue::Set(totals.fg3_pct),
                ft_pct: ActiveValue::Set(totals.ft_pct),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            }
        });

        entity::prelude::PlayerSeasonStats::insert_many(rows)
            .on_conflict(
                OnConflict::columns([
                    entity::player_season_stats::Column::PlayerId,
                    entity::player_season_stats::Column::Season,
                    entity::player_season_stats::Column::SeasonType,
                ])
                .update_columns([
                    entity::player_season_stats::Column::TeamId,
                    entity::player_season_stats::Column::GamesPlayed,
                    entity::player_season_stats::Column::GamesStarted,
                    entity::player_season_stats::Column::MinutesPerGame,
                    entity::player_season_stats::Column::PointsPerGame,
                    entity::player_season_stats::Column::ReboundsPerGame,
                    entity::player_season_stats::Column::AssistsPerGame,
                    entity::player_season_stats::Column::StealsPerGame,
                    entity::player_season_stats::Column::BlocksPerGame,
                    entity::player_season_stats::Column::TurnoversPerGame,
                    entity::player_season_stats::Column::FgPct,
                    entity::player_season_stats::Column::Fg3Pct,
                    entity::player_season_stats::Column::FtPct,
                    entity::player_season_stats::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_by_player_and_season(
        &self,
        player_id: i32,
        season: i32,
        season_type: &str,
    ) -> Result<Option<entity::player_season_stats::Model>, DbErr> {
        entity::prelude::PlayerSeasonStats::find()
            .filter(entity::player_season_stats::Column::PlayerId.eq(player_id))
            .filter(entity::player_season_stats::Column::Season.eq(season))
            .filter(entity::player_season_stats::Column::SeasonType.eq(season_type))
            .one(self.db)
            .await
    }
}
