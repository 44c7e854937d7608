use fastbreak_test_utils::{factory, TestBuilder, TestError};

use crate::data::game::{GameRecord, GameRepository};

/// Bare game record with no resolved references or schedule context.
fn game_record(n: i64, home: i64, away: i64, season: i32) -> GameRecord {
    GameRecord {
        summary: factory::mock_game(n, home, away),
        season,
        season_type: "Regular Season".to_string(),
        home_team_id: None,
        away_team_id: None,
        home_rest_days: None,
        away_rest_days: None,
        home_back_to_back: false,
        away_back_to_back: false,
    }
}

mod get_by_season;
mod upsert_many;
