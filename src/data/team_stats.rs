use chrono::Utc;
use nba_api::model::TeamSeasonTotals;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct TeamStatsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamStatsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert or update season aggregates keyed on (team, season, season
    /// type). Each entry pairs a resolved team record id with the fetched
    /// totals; counting stats default to zero when the provider omits
    /// them, percentages stay NULL.
    pub async fn upsert_many(
        &self,
        rows: Vec<(i32, TeamSeasonTotals)>,
        season: i32,
        season_type: &str,
    ) -> Result<Vec<entity::team_season_stats::Model>, DbErr> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let rows = rows
            .into_iter()
            .map(|(team_id, totals)| entity::team_season_stats::ActiveModel {
                team_id: ActiveValue::Set(team_id),
                season: ActiveValue::Set(season),
                season_type: ActiveValue::Set(season_type.to_string()),
                games_played: ActiveValue::Set(totals.games_played.unwrap_or(0)),
                wins: ActiveValue::Set(totals.wins.unwrap_or(0)),
                losses: ActiveValue::Set(totals.losses.unwrap_or(0)),
                win_pct: ActiveValue::Set(totals.win_pct),
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
            });

        entity::prelude::TeamSeasonStats::insert_many(rows)
            .on_conflict(
                OnConflict::columns([
                    entity::team_season_stats::Column::TeamId,
                    entity::team_season_stats::Column::Season,
                    entity::team_season_stats::Column::SeasonType,
                ])
                .update_columns([
                    entity::team_season_stats::Column::GamesPlayed,
                    entity::team_season_stats::Column::Wins,
                    entity::team_season_stats::Column::Losses,
                    entity::team_season_stats::Column::WinPct,
                    entity::team_season_stats::Column::PointsPerGame,
                    entity::team_season_stats::Column::ReboundsPerGame,
                    entity::team_season_stats::Column::AssistsPerGame,
                    entity::team_season_stats::Column::StealsPerGame,
                    entity::team_season_stats::Column::BlocksPerGame,
                    entity::team_season_stats::Column::TurnoversPerGame,
                    entity::team_season_stats::Column::FgPct,
                    entity::team_season_stats::Column::Fg3Pct,
                    entity::team_season_stats::Column::FtPct,
                    entity::team_season_stats::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_by_team_and_season(
        &self,
        team_id: i32,
        season: i32,
        season_type: &str,
    ) -> Result<Option<entity::team_season_stats::Model>, DbErr> {
        entity::prelude::TeamSeasonStats::find()
            .filter(entity::team_season_stats::Column::TeamId.eq(team_id))
            .filter(entity::team_season_stats::Column::Season.eq(season))
            .filter(entity::team_season_stats::Column::SeasonType.eq(season_type))
            .one(self.db)
            .await
    }
}
