//! Mock HTTP endpoint helpers for the provider API.
//!
//! Each helper registers a mockito endpoint that serves fixture data in
//! the provider's wire format and verifies it was called exactly
//! `expected_requests` times.

use mockito::{Matcher, Mock, ServerGuard};
use nba_api::model::{
    GameSummary, GameTeamLine, Player, PlayerSeasonTotals, Team, TeamSeasonTotals,
};

use crate::fixtures::wire;

fn json_endpoint(
    server: &mut ServerGuard,
    path: &str,
    body: serde_json::Value,
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", path)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(expected_requests)
        .create()
}

pub fn create_teams_endpoint(
    server: &mut ServerGuard,
    teams: &[Team],
    expected_requests: usize,
) -> Mock {
    json_endpoint(
        server,
        "/commonallteams",
        wire::teams_envelope(teams),
        expected_requests,
    )
}

pub fn create_players_endpoint(
    server: &mut ServerGuard,
    players: &[Player],
    expected_requests: usize,
) -> Mock {
    json_endpoint(
        server,
        "/commonallplayers",
        wire::players_envelope(players),
        expected_requests,
    )
}

pub fn create_games_endpoint(
    server: &mut ServerGuard,
    games: &[GameSummary],
    expected_requests: usize,
) -> Mock {
    json_endpoint(
        server,
        "/scoreboardv2",
        wire::games_envelope(games),
        expected_requests,
    )
}

pub fn create_team_stats_endpoint(
    server: &mut ServerGuard,
    totals: &[TeamSeasonTotals],
    expected_requests: usize,
) -> Mock {
    json_endpoint(
        server,
        "/leaguedashteamstats",
        wire::team_stats_envelope(totals),
        expected_requests,
    )
}

pub fn create_player_stats_endpoint(
    server: &mut ServerGuard,
    totals: &[PlayerSeasonTotals],
    expected_requests: usize,
) -> Mock {
    json_endpoint(
        server,
        "/leaguedashplayerstats",
        wire::player_stats_envelope(totals),
        expected_requests,
    )
}

/// Box score endpoint for one specific game ID.
pub fn create_box_score_endpoint(
    server: &mut ServerGuard,
    game_id: &str,
    lines: &[GameTeamLine],
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", "/boxscoretraditionalv2")
        .match_query(Matcher::UrlEncoded("GameID".into(), game_id.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(wire::box_score_envelope(lines).to_string())
        .expect(expected_requests)
        .create()
}

/// Endpoint that always fails with the given status, for retry tests.
pub fn create_error_endpoint(
    server: &mut ServerGuard,
    path: &str,
    status: usize,
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", path)
        .match_query(Matcher::Any)
        .with_status(status)
        .expect(expected_requests)
        .create()
}
