use chrono::Utc;
use nba_api::model::GameTeamLine;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct GameStatsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameStatsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert or update box-score lines keyed on (game, team). Each entry
    /// is (game id, resolved team record id, home flag, fetched line).
    pub async fn upsert_many(
        &self,
        rows: Vec<(String, i32, bool, GameTeamLine)>,
    ) -> Result<Vec<entity::game_stats::Model>, DbErr> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let rows = rows.into_iter().map(|(game_id, team_id, is_home, line)| {
            entity::game_stats::ActiveModel {
                game_id: ActiveValue::Set(game_id),
                team_id: ActiveValue::Set(team_id),
                is_home: ActiveValue::Set(is_home),
                points: ActiveValue::Set(line.points.unwrap_or(0)),
                fgm: ActiveValue::Set(line.fgm.unwrap_or(0)),
                fga: ActiveValue::Set(line.fga.unwrap_or(0)),
                fg_pct: ActiveValue::Set(line.fg_pct),
                fg3m: ActiveValue::Set(line.fg3m.unwrap_or(0)),
                fg3a: ActiveValue::Set(line.fg3a.unwrap_or(0)),
                fg3_pct: ActiveValue::Set(line.fg3_pct),
                ftm: ActiveValue::Set(line.ftm.unwrap_or(0)),
                fta: ActiveValue::Set(line.fta.unwrap_or(0)),
                ft_pct: ActiveValue::Set(line.ft_pct),
                oreb: ActiveValue::Set(line.oreb.unwrap_or(0)),
                dreb: ActiveValue::Set(line.dreb.unwrap_or(0)),
                reb: ActiveValue::Set(line.reb.unwrap_or(0)),
                ast: ActiveValue::Set(line.ast.unwrap_or(0)),
                stl: ActiveValue::Set(line.stl.unwrap_or(0)),
                blk: ActiveValue::Set(line.blk.unwrap_or(0)),
                tov: ActiveValue::Set(line.tov.unwrap_or(0)),
                pf: ActiveValue::Set(line.pf.unwrap_or(0)),
                plus_minus: ActiveValue::Set(line.plus_minus),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            }
        });

        entity::prelude::GameStats::insert_many(rows)
            .on_conflict(
                OnConflict::columns([
                    entity::game_stats::Column::GameId,
                    entity::game_stats::Column::TeamId,
                ])
                .update_columns([
                    entity::game_stats::Column::IsHome,
                    entity::game_stats::Column::Points,
                    entity::game_stats::Column::Fgm,
                    entity::game_stats::Column::Fga,
                    entity::game_stats::Column::FgPct,
                    entity::game_stats::Column::Fg3m,
                    entity::game_stats::Column::Fg3a,
                    entity::game_stats::Column::Fg3Pct,
                    entity::game_stats::Column::Ftm,
                    entity::game_stats::Column::Fta,
                    entity::game_stats::Column::FtPct,
                    entity::game_stats::Column::Oreb,
                    entity::game_stats::Column::Dreb,
                    entity::game_stats::Column::Reb,
                    entity::game_stats::Column::Ast,
                    entity::game_stats::Column::Stl,
                    entity::game_stats::Column::Blk,
                    entity::game_stats::Column::Tov,
                    entity::game_stats::Column::Pf,
                    entity::game_stats::Column::PlusMinus,
                    entity::game_stats::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_by_game(
        &self,
        game_id: &str,
    ) -> Result<Vec<entity::game_stats::Model>, DbErr> {
        entity::prelude::GameStats::find()
            .filter(entity::game_stats::Column::GameId.eq(game_id))
            .all(self.db)
            .await
    }
}
