//! Factories for provider-side mock records.
//!
//! Identifiers are derived from the fixture number, so the same `n` always
//! produces the same natural keys across factories: `mock_team(1)`,
//! `mock_player(5, Some(1))`, and `mock_box_line(1)` all agree on team 1's
//! provider ID and abbreviation.

use chrono::NaiveDate;
use nba_api::model::{
    GameSummary, GameTeamLine, Player, PlayerSeasonTotals, Team, TeamSeasonTotals,
};

pub fn team_id(n: i64) -> String {
    (1610612700 + n).to_string()
}

pub fn team_abbreviation(n: i64) -> String {
    format!("T{n:02}")
}

pub fn player_id(n: i64) -> String {
    (200000 + n).to_string()
}

pub fn game_id(n: i64) -> String {
    format!("00223{n:05}")
}

pub fn mock_team(n: i64) -> Team {
    Team {
        team_id: team_id(n),
        name: format!("Team {n}"),
        abbreviation: team_abbreviation(n),
        city: Some(format!("City {n}")),
        state: Some("Test State".to_string()),
        conference: Some(if n % 2 == 0 { "West" } else { "East" }.to_string()),
        division: Some("Atlantic".to_string()),
        arena: Some(format!("Arena {n}")),
        arena_capacity: Some(19000),
        year_founded: Some(1946),
    }
}

pub fn mock_player(n: i64, team: Option<i64>) -> Player {
    Player {
        player_id: player_id(n),
        name: format!("Player {n}"),
        first_name: Some(format!("First{n}")),
        last_name: Some(format!("Last{n}")),
        team_id: team.map(team_id),
        position: Some("G".to_string()),
        height: Some("6-6".to_string()),
        weight: Some(210),
        birth_date: NaiveDate::from_ymd_opt(1996, 2, 20),
        college: Some("State University".to_string()),
        draft_year: Some(2018),
        draft_round: Some(1),
        draft_number: Some(10),
        jersey_number: Some("7".to_string()),
        is_active: true,
    }
}

/// Game `n` between two fixture teams, dated `n` days into January 2024.
pub fn mock_game(n: i64, home: i64, away: i64) -> GameSummary {
    GameSummary {
        game_id: game_id(n),
        game_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(n as u64),
        home_team_abbr: team_abbreviation(home),
        away_team_abbr: team_abbreviation(away),
        home_score: Some(110),
        away_score: Some(104),
        arena: Some(format!("Arena {home}")),
        attendance: Some(18000),
    }
}

pub fn mock_team_totals(n: i64) -> TeamSeasonTotals {
    TeamSeasonTotals {
        team_id: team_id(n),
        team_name: Some(format!("Team {n}")),
        games_played: Some(82),
        wins: Some(50),
        losses: Some(32),
        win_pct: Some(0.61),
        points_per_game: Some(112.3),
        rebounds_per_game: Some(44.5),
        assists_per_game: Some(26.7),
        steals_per_game: Some(7.5),
        blocks_per_game: Some(5.1),
        turnovers_per_game: Some(13.2),
        fg_pct: Some(0.478),
        fg3_pct: Some(0.367),
        ft_pct: Some(0.801),
    }
}

pub fn mock_player_totals(n: i64, team: Option<i64>) -> PlayerSeasonTotals {
    PlayerSeasonTotals {
        player_id: player_id(n),
        player_name: Some(format!("Player {n}")),
        team_id: team.map(team_id),
        games_played: Some(72),
        games_started: Some(70),
        minutes_per_game: Some(34.2),
        points_per_game: Some(24.8),
        rebounds_per_game: Some(6.1),
        assists_per_game: Some(5.4),
        steals_per_game: Some(1.2),
        blocks_per_game: Some(0.6),
        turnovers_per_game: Some(2.9),
        fg_pct: Some(0.491),
        fg3_pct: Some(0.388),
        ft_pct: Some(0.874),
    }
}

pub fn mock_box_line(team: i64) -> GameTeamLine {
    GameTeamLine {
        team_id: team_id(team),
        team_abbreviation: Some(team_abbreviation(team)),
        points: Some(110),
        fgm: Some(42),
        fga: Some(88),
        fg_pct: Some(0.477),
        fg3m: Some(14),
        fg3a: Some(38),
        fg3_pct: Some(0.368),
        ftm: Some(12),
        fta: Some(16),
        ft_pct: Some(0.75),
        oreb: Some(10),
        dreb: Some(33),
        reb: Some(43),
        ast: Some(25),
        stl: Some(8),
        blk: Some(5),
        tov: Some(13),
        pf: Some(19),
        plus_minus: Some(6),
    }
}
