//! Wire envelope and typed records for provider responses.
//!
//! The provider returns every payload in the same shape:
//!
//! ```json
//! {
//!   "resource": "commonallteams",
//!   "parameters": { "LeagueID": "00" },
//!   "resultSets": [
//!     { "name": "Teams", "headers": ["TEAM_ID", ...], "rowSet": [[...], ...] }
//!   ]
//! }
//! ```
//!
//! Rows are positional and aligned with the header list, so records are
//! extracted by header name rather than index. Numeric cells arrive as
//! numbers, numeric strings, or null depending on the endpoint; the [`Row`]
//! accessors normalize all three, returning `None` for anything malformed
//! so a single bad cell never poisons the record around it.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub result_sets: Vec<ResultSet>,
}

impl StatsResponse {
    /// Find a result set by name, case-insensitively.
    pub fn result_set(&self, name: &str) -> Option<&ResultSet> {
        self.result_sets
            .iter()
            .find(|rs| rs.name.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.row_set.iter().map(|cells| Row {
            headers: &self.headers,
            cells,
        })
    }
}

/// A single row viewed through its result set's header list.
pub struct Row<'a> {
    headers: &'a [String],
    cells: &'a [Value],
}

impl Row<'_> {
    fn cell(&self, header: &str) -> Option<&Value> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(header))
            .and_then(|i| self.cells.get(i))
    }

    /// String cell; numbers are stringified since the provider is
    /// inconsistent about identifier columns.
    pub fn str_cell(&self, header: &str) -> Option<String> {
        match self.cell(header)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn i64_cell(&self, header: &str) -> Option<i64> {
        match self.cell(header)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn i32_cell(&self, header: &str) -> Option<i32> {
        self.i64_cell(header).and_then(|v| i32::try_from(v).ok())
    }

    pub fn f64_cell(&self, header: &str) -> Option<f64> {
        match self.cell(header)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Date cell; accepts `YYYY-MM-DD` with or without a trailing time
    /// component (the provider emits both).
    pub fn date_cell(&self, header: &str) -> Option<NaiveDate> {
        let raw = self.str_cell(header)?;
        let date_part = raw.split(['T', ' ']).next()?;
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub team_id: String,
    pub name: String,
    pub abbreviation: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub conference: Option<String>,
    pub division: Option<String>,
    pub arena: Option<String>,
    pub arena_capacity: Option<i32>,
    pub year_founded: Option<i32>,
}

impl Team {
    pub(crate) fn from_row(row: &Row<'_>) -> Option<Self> {
        Some(Self {
            team_id: row.str_cell("TEAM_ID")?,
            name: row.str_cell("TEAM_NAME")?,
            abbreviation: row.str_cell("ABBREVIATION")?,
            city: row.str_cell("TEAM_CITY"),
            state: row.str_cell("TEAM_STATE"),
            conference: row.str_cell("CONFERENCE"),
            division: row.str_cell("DIVISION"),
            arena: row.str_cell("ARENA"),
            arena_capacity: row.i32_cell("ARENA_CAPACITY"),
            year_founded: row.i32_cell("YEAR_FOUNDED"),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub player_id: String,
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub team_id: Option<String>,
    pub position: Option<String>,
    pub height: Option<String>,
    pub weight: Option<i32>,
    pub birth_date: Option<NaiveDate>,
    pub college: Option<String>,
    pub draft_year: Option<i32>,
    pub draft_round: Option<i32>,
    pub draft_number: Option<i32>,
    pub jersey_number: Option<String>,
    pub is_active: bool,
}

impl Player {
    pub(crate) fn from_row(row: &Row<'_>) -> Option<Self> {
        Some(Self {
            player_id: row.str_cell("PERSON_ID")?,
            name: row.str_cell("DISPLAY_FIRST_LAST")?,
            first_name: row.str_cell("FIRST_NAME"),
            last_name: row.str_cell("LAST_NAME"),
            team_id: row.str_cell("TEAM_ID"),
            position: row.str_cell("POSITION"),
            height: row.str_cell("HEIGHT"),
            weight: row.i32_cell("WEIGHT"),
            birth_date: row.date_cell("BIRTH_DATE"),
            college: row.str_cell("COLLEGE"),
            draft_year: row.i32_cell("DRAFT_YEAR"),
            draft_round: row.i32_cell("DRAFT_ROUND"),
            draft_number: row.i32_cell("DRAFT_NUMBER"),
            jersey_number: row.str_cell("JERSEY_NUMBER"),
            is_active: row
                .str_cell("ROSTER_STATUS")
                .map(|s| s.eq_ignore_ascii_case("active") || s == "1")
                .unwrap_or(false),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub game_id: String,
    pub game_date: NaiveDate,
    pub home_team_abbr: String,
    pub away_team_abbr: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub arena: Option<String>,
    pub attendance: Option<i32>,
}

impl GameSummary {
    pub(crate) fn from_row(row: &Row<'_>) -> Option<Self> {
        Some(Self {
            game_id: row.str_cell("GAME_ID")?,
            game_date: row.date_cell("GAME_DATE_EST")?,
            home_team_abbr: row.str_cell("HOME_TEAM_ABBREVIATION")?,
            away_team_abbr: row.str_cell("VISITOR_TEAM_ABBREVIATION")?,
            home_score: row.i32_cell("HOME_TEAM_SCORE"),
            away_score: row.i32_cell("VISITOR_TEAM_SCORE"),
            arena: row.str_cell("ARENA"),
            attendance: row.i32_cell("ATTENDANCE"),
        })
    }
}

/// Per-game averages for one team over a season.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSeasonTotals {
    pub team_id: String,
    pub team_name: Option<String>,
    pub games_played: Option<i32>,
    pub wins: Option<i32>,
    pub losses: Option<i32>,
    pub win_pct: Option<f64>,
    pub points_per_game: Option<f64>,
    pub rebounds_per_game: Option<f64>,
    pub assists_per_game: Option<f64>,
    pub steals_per_game: Option<f64>,
    pub blocks_per_game: Option<f64>,
    pub turnovers_per_game: Option<f64>,
    pub fg_pct: Option<f64>,
    pub fg3_pct: Option<f64>,
    pub ft_pct: Option<f64>,
}

impl TeamSeasonTotals {
    pub(crate) fn from_row(row: &Row<'_>) -> Option<Self> {
        Some(Self {
            team_id: row.str_cell("TEAM_ID")?,
            team_name: row.str_cell("TEAM_NAME"),
            games_played: row.i32_cell("GP"),
            wins: row.i32_cell("W"),
            losses: row.i32_cell("L"),
            win_pct: row.f64_cell("W_PCT"),
            points_per_game: row.f64_cell("PTS"),
            rebounds_per_game: row.f64_cell("REB"),
            assists_per_game: row.f64_cell("AST"),
            steals_per_game: row.f64_cell("STL"),
            blocks_per_game: row.f64_cell("BLK"),
            turnovers_per_game: row.f64_cell("TOV"),
            fg_pct: row.f64_cell("FG_PCT"),
            fg3_pct: row.f64_cell("FG3_PCT"),
            ft_pct: row.f64_cell("FT_PCT"),
        })
    }
}

/// Per-game averages for one player over a season.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSeasonTotals {
    pub player_id: String,
    pub player_name: Option<String>,
    pub team_id: Option<String>,
    pub games_played: Option<i32>,
    pub games_started: Option<i32>,
    pub minutes_per_game: Option<f64>,
    pub points_per_game: Option<f64>,
    pub rebounds_per_game: Option<f64>,
    pub assists_per_game: Option<f64>,
    pub steals_per_game: Option<f64>,
    pub blocks_per_game: Option<f64>,
    pub turnovers_per_game: Option<f64>,
    pub fg_pct: Option<f64>,
    pub fg3_pct: Option<f64>,
    pub ft_pct: Option<f64>,
}

impl PlayerSeasonTotals {
    pub(crate) fn from_row(row: &Row<'_>) -> Option<Self> {
        Some(Self {
            player_id: row.str_cell("PLAYER_ID")?,
            player_name: row.str_cell("PLAYER_NAME"),
            team_id: row.str_cell("TEAM_ID"),
            games_played: row.i32_cell("GP"),
            games_started: row.i32_cell("GS"),
            minutes_per_game: row.f64_cell("MIN"),
            points_per_game: row.f64_cell("PTS"),
            rebounds_per_game: row.f64_cell("REB"),
            assists_per_game: row.f64_cell("AST"),
            steals_per_game: row.f64_cell("STL"),
            blocks_per_game: row.f64_cell("BLK"),
            turnovers_per_game: row.f64_cell("TOV"),
            fg_pct: row.f64_cell("FG_PCT"),
            fg3_pct: row.f64_cell("FG3_PCT"),
            ft_pct: row.f64_cell("FT_PCT"),
        })
    }
}

/// One team's box-score line for a single game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameTeamLine {
    pub team_id: String,
    pub team_abbreviation: Option<String>,
    pub points: Option<i32>,
    pub fgm: Option<i32>,
    pub fga: Option<i32>,
    pub fg_pct: Option<f64>,
    pub fg3m: Option<i32>,
    pub fg3a: Option<i32>,
    pub fg3_pct: Option<f64>,
    pub ftm: Option<i32>,
    pub fta: Option<i32>,
    pub ft_pct: Option<f64>,
    pub oreb: Option<i32>,
    pub dreb: Option<i32>,
    pub reb: Option<i32>,
    pub ast: Option<i32>,
    pub stl: Option<i32>,
    pub blk: Option<i32>,
    pub tov: Option<i32>,
    pub pf: Option<i32>,
    pub plus_minus: Option<i32>,
}

impl GameTeamLine {
    pub(crate) fn from_row(row: &Row<'_>) -> Option<Self> {
        Some(Self {
            team_id: row.str_cell("TEAM_ID")?,
            team_abbreviation: row.str_cell("TEAM_ABBREVIATION"),
            points: row.i32_cell("PTS"),
            fgm: row.i32_cell("FGM"),
            fga: row.i32_cell("FGA"),
            fg_pct: row.f64_cell("FG_PCT"),
            fg3m: row.i32_cell("FG3M"),
            fg3a: row.i32_cell("FG3A"),
            fg3_pct: row.f64_cell("FG3_PCT"),
            ftm: row.i32_cell("FTM"),
            fta: row.i32_cell("FTA"),
            ft_pct: row.f64_cell("FT_PCT"),
            oreb: row.i32_cell("OREB"),
            dreb: row.i32_cell("DREB"),
            reb: row.i32_cell("REB"),
            ast: row.i32_cell("AST"),
            stl: row.i32_cell("STL"),
            blk: row.i32_cell("BLK"),
            tov: row.i32_cell("TO"),
            pf: row.i32_cell("PF"),
            plus_minus: row.i32_cell("PLUS_MINUS"),
        })
    }
}
