//! Builders for the provider's `resultSets` response envelope.
//!
//! Each function serializes typed records back into the tabular wire
//! format the client decodes, so endpoint mocks exercise the real
//! header-indexed row extraction.

use nba_api::model::{
    GameSummary, GameTeamLine, Player, PlayerSeasonTotals, Team, TeamSeasonTotals,
};
use serde_json::{json, Value};

fn envelope(resource: &str, set_name: &str, headers: Vec<&str>, rows: Vec<Value>) -> Value {
    json!({
        "resource": resource,
        "parameters": {},
        "resultSets": [{
            "name": set_name,
            "headers": headers,
            "rowSet": rows,
        }]
    })
}

pub fn teams_envelope(teams: &[Team]) -> Value {
    let rows = teams
        .iter()
        .map(|t| {
            json!([
                t.team_id,
                t.name,
                t.abbreviation,
                t.city,
                t.state,
                t.conference,
                t.division,
                t.arena,
                t.arena_capacity,
                t.year_founded,
            ])
        })
        .collect();

    envelope(
        "commonallteams",
        "Teams",
        vec![
            "TEAM_ID",
            "TEAM_NAME",
            "ABBREVIATION",
            "TEAM_CITY",
            "TEAM_STATE",
            "CONFERENCE",
            "DIVISION",
            "ARENA",
            "ARENA_CAPACITY",
            "YEAR_FOUNDED",
        ],
        rows,
    )
}

pub fn players_envelope(players: &[Player]) -> Value {
    let rows = players
        .iter()
        .map(|p| {
            json!([
                p.player_id,
                p.name,
                p.first_name,
                p.last_name,
                p.team_id,
                p.position,
                p.height,
                p.weight,
                p.birth_date.map(|d| d.format("%Y-%m-%d").to_string()),
                p.college,
                p.draft_year,
                p.draft_round,
                p.draft_number,
                p.jersey_number,
                if p.is_active { "Active" } else { "Inactive" },
            ])
        })
        .collect();

    envelope(
        "commonallplayers",
        "Players",
        vec![
            "PERSON_ID",
            "DISPLAY_FIRST_LAST",
            "FIRST_NAME",
            "LAST_NAME",
            "TEAM_ID",
            "POSITION",
            "HEIGHT",
            "WEIGHT",
            "BIRTH_DATE",
            "COLLEGE",
            "DRAFT_YEAR",
            "DRAFT_ROUND",
            "DRAFT_NUMBER",
            "JERSEY_NUMBER",
            "ROSTER_STATUS",
        ],
        rows,
    )
}

pub fn games_envelope(games: &[GameSummary]) -> Value {
    let rows = games
        .iter()
        .map(|g| {
            json!([
                g.game_id,
                g.game_date.format("%Y-%m-%d").to_string(),
                g.home_team_abbr,
                g.away_team_abbr,
                g.home_score,
                g.away_score,
                g.arena,
                g.attendance,
            ])
        })
        .collect();

    envelope(
        "scoreboardv2",
        "Games",
        vec![
            "GAME_ID",
            "GAME_DATE_EST",
            "HOME_TEAM_ABBREVIATION",
            "VISITOR_TEAM_ABBREVIATION",
            "HOME_TEAM_SCORE",
            "VISITOR_TEAM_SCORE",
            "ARENA",
            "ATTENDANCE",
        ],
        rows,
    )
}

pub fn team_stats_envelope(totals: &[TeamSeasonTotals]) -> Value {
    let rows = totals
        .iter()
        .map(|t| {
            json!([
                t.team_id,
                t.team_name,
                t.games_played,
                t.wins,
                t.losses,
                t.win_pct,
                t.points_per_game,
                t.rebounds_per_game,
                t.assists_per_game,
                t.steals_per_game,
                t.blocks_per_game,
                t.turnovers_per_game,
                t.fg_pct,
                t.fg3_pct,
                t.ft_pct,
            ])
        })
        .collect();

    envelope(
        "leaguedashteamstats",
        "LeagueDashTeamStats",
        vec![
            "TEAM_ID", "TEAM_NAME", "GP", "W", "L", "W_PCT", "PTS", "REB", "AST", "STL", "BLK",
            "TOV", "FG_PCT", "FG3_PCT", "FT_PCT",
        ],
        rows,
    )
}

pub fn player_stats_envelope(totals: &[PlayerSeasonTotals]) -> Value {
    let rows = totals
        .iter()
        .map(|t| {
            json!([
                t.player_id,
                t.player_name,
                t.team_id,
                t.games_played,
                t.games_started,
                t.minutes_per_game,
                t.points_per_game,
                t.rebounds_per_game,
                t.assists_per_game,
                t.steals_per_game,
                t.blocks_per_game,
                t.turnovers_per_game,
                t.fg_pct,
                t.fg3_pct,
                t.ft_pct,
            ])
        })
        .collect();

    envelope(
        "leaguedashplayerstats",
        "LeagueDashPlayerStats",
        vec![
            "PLAYER_ID",
            "PLAYER_NAME",
            "TEAM_ID",
            "GP",
            "GS",
            "MIN",
            "PTS",
            "REB",
            "AST",
            "STL",
            "BLK",
            "TOV",
            "FG_PCT",
            "FG3_PCT",
            "FT_PCT",
        ],
        rows,
    )
}

pub fn box_score_envelope(lines: &[GameTeamLine]) -> Value {
    let rows = lines
        .iter()
        .map(|l| {
            json!([
                l.team_id,
                l.team_abbreviation,
                l.points,
                l.fgm,
                l.fga,
                l.fg_pct,
                l.fg3m,
                l.fg3a,
                l.fg3_pct,
                l.ftm,
                l.fta,
                l.ft_pct,
                l.oreb,
                l.dreb,
                l.reb,
                l.ast,
                l.stl,
                l.blk,
                l.tov,
                l.pf,
                l.plus_minus,
            ])
        })
        .collect();

    envelope(
        "boxscoretraditionalv2",
        "TeamStats",
        vec![
            "TEAM_ID",
            "TEAM_ABBREVIATION",
            "PTS",
            "FGM",
            "FGA",
            "FG_PCT",
            "FG3M",
            "FG3A",
            "FG3_PCT",
            "FTM",
            "FTA",
            "FT_PCT",
            "OREB",
            "DREB",
            "REB",
            "AST",
            "STL",
            "BLK",
            "TO",
            "PF",
            "PLUS_MINUS",
        ],
        rows,
    )
}
