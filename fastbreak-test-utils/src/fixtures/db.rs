//! Direct database fixture insertion.
//!
//! Inserts rows through the entity layer with natural keys matching the
//! [`factory`](crate::fixtures::factory) records, so provider fixtures and
//! pre-seeded database state line up in tests.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::fixtures::factory;

pub async fn insert_team(db: &DatabaseConnection, n: i64) -> Result<entity::team::Model, DbErr> {
    let team = factory::mock_team(n);
    let now = Utc::now().naive_utc();

    entity::team::ActiveModel {
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
    }
    .insert(db)
    .await
}

pub async fn insert_player(
    db: &DatabaseConnection,
    n: i64,
    team_record_id: Option<i32>,
) -> Result<entity::player::Model, DbErr> {
    let player = factory::mock_player(n, None);
    let now = Utc::now().naive_utc();

    entity::player::ActiveModel {
        player_id: ActiveValue::Set(player.player_id),
        name: ActiveValue::Set(player.name),
        first_name: ActiveValue::Set(player.first_name),
        last_name: ActiveValue::Set(player.last_name),
        team_id: ActiveValue::Set(team_record_id),
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
    }
    .insert(db)
    .await
}

/// Insert game `n` between fixture teams `home` and `away`. Team record
/// references stay NULL; tests that need them resolved should ingest
/// through the service layer instead.
pub async fn insert_game(
    db: &DatabaseConnection,
    n: i64,
    home: i64,
    away: i64,
    season: i32,
) -> Result<entity::game::Model, DbErr> {
    let game = factory::mock_game(n, home, away);
    let now = Utc::now().naive_utc();

    entity::game::ActiveModel {
        id: ActiveValue::Set(game.game_id),
        game_date: ActiveValue::Set(game.game_date),
        season: ActiveValue::Set(season),
        season_type: ActiveValue::Set("Regular Season".to_string()),
        home_team_id: ActiveValue::Set(None),
        away_team_id: ActiveValue::Set(None),
        home_team_abbr: ActiveValue::Set(game.home_team_abbr),
        away_team_abbr: ActiveValue::Set(game.away_team_abbr),
        home_score: ActiveValue::Set(game.home_score),
        away_score: ActiveValue::Set(game.away_score),
        home_win: ActiveValue::Set(Some(true)),
        arena: ActiveValue::Set(game.arena),
        attendance: ActiveValue::Set(game.attendance),
        home_rest_days: ActiveValue::Set(None),
        away_rest_days: ActiveValue::Set(None),
        home_back_to_back: ActiveValue::Set(false),
        away_back_to_back: ActiveValue::Set(false),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
