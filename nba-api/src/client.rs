use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, REFERER};
use reqwest::StatusCode;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::error::Error;
use crate::model::{
    GameSummary, GameTeamLine, Player, StatsResponse, Team, TeamSeasonTotals, PlayerSeasonTotals,
};

pub const DEFAULT_BASE_URL: &str = "https://stats.nba.com/stats";

/// The provider blocks clients that don't look like a browser.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const LEAGUE_ID: &str = "00";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_millis(1000);

/// Format a season's starting year the way the provider expects, e.g.
/// `2023` becomes `"2023-24"`.
pub fn season_slug(season: i32) -> String {
    format!("{}-{:02}", season, (season + 1).rem_euclid(100))
}

/// Client for the NBA statistics provider.
///
/// Cheap to clone; clones share the pacing state so the inter-request
/// delay holds across all copies.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    request_interval: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    api_key: Option<String>,
    access_token: Option<String>,
    timeout: Option<Duration>,
    request_interval: Option<Duration>,
    requests_per_minute: Option<u32>,
}

impl ClientBuilder {
    /// Override the provider base URL (used by tests to point at a mock
    /// server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sent as `X-API-Key` on every request.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sent as a bearer `Authorization` header on every request.
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Minimum delay between consecutive requests.
    pub fn request_interval(mut self, interval: Duration) -> Self {
        self.request_interval = Some(interval);
        self
    }

    /// Cap on request rate; the stricter of this and `request_interval`
    /// wins.
    pub fn requests_per_minute(mut self, cap: u32) -> Self {
        self.requests_per_minute = Some(cap);
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));

        if let Some(api_key) = &self.api_key {
            let value = HeaderValue::from_str(api_key)
                .map_err(|_| Error::Builder("API key contains invalid header bytes".into()))?;
            headers.insert("x-api-key", value);
        }
        if let Some(token) = &self.access_token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| Error::Builder("access token contains invalid header bytes".into()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Builder(e.to_string()))?;

        let mut interval = self.request_interval.unwrap_or(DEFAULT_REQUEST_INTERVAL);
        if let Some(cap) = self.requests_per_minute {
            if cap == 0 {
                return Err(Error::Builder("requests_per_minute must be positive".into()));
            }
            interval = interval.max(Duration::from_millis(60_000 / u64::from(cap)));
        }

        Ok(Client {
            http,
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            request_interval: interval,
            last_request: Arc::new(Mutex::new(None)),
        })
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Fetch the league's teams.
    pub async fn get_teams(&self) -> Result<Vec<Team>, Error> {
        let response = self
            .get("commonallteams", &[("LeagueID", LEAGUE_ID.to_string())])
            .await?;
        self.collect_rows("commonallteams", &response, "Teams", Team::from_row)
    }

    /// Fetch players, optionally narrowed to a season roster or one team.
    pub async fn get_players(
        &self,
        season: Option<i32>,
        team_id: Option<&str>,
    ) -> Result<Vec<Player>, Error> {
        let mut params = vec![("LeagueID", LEAGUE_ID.to_string())];
        match season {
            Some(season) => {
                params.push(("Season", season_slug(season)));
                params.push(("IsOnlyCurrentSeason", "1".to_string()));
            }
            None => params.push(("IsOnlyCurrentSeason", "0".to_string())),
        }
        if let Some(team_id) = team_id {
            params.push(("TeamID", team_id.to_string()));
        }

        let response = self.get("commonallplayers", &params).await?;
        self.collect_rows("commonallplayers", &response, "Players", Player::from_row)
    }

    /// Fetch the game schedule and results for a season.
    pub async fn get_games(
        &self,
        season: i32,
        season_type: &str,
    ) -> Result<Vec<GameSummary>, Error> {
        let params = [
            ("LeagueID", LEAGUE_ID.to_string()),
            ("Season", season_slug(season)),
            ("SeasonType", season_type.to_string()),
        ];
        let response = self.get("scoreboardv2", &params).await?;
        self.collect_rows("scoreboardv2", &response, "Games", GameSummary::from_row)
    }

    /// Fetch per-game team averages for a season.
    pub async fn get_team_stats(
        &self,
        season: i32,
        season_type: &str,
    ) -> Result<Vec<TeamSeasonTotals>, Error> {
        let params = [
            ("LeagueID", LEAGUE_ID.to_string()),
            ("Season", season_slug(season)),
            ("SeasonType", season_type.to_string()),
            ("PerMode", "PerGame".to_string()),
        ];
        let response = self.get("leaguedashteamstats", &params).await?;
        self.collect_rows(
            "leaguedashteamstats",
            &response,
            "LeagueDashTeamStats",
            TeamSeasonTotals::from_row,
        )
    }

    /// Fetch per-game player averages for a season.
    pub async fn get_player_stats(
        &self,
        season: i32,
        season_type: &str,
    ) -> Result<Vec<PlayerSeasonTotals>, Error> {
        let params = [
            ("LeagueID", LEAGUE_ID.to_string()),
            ("Season", season_slug(season)),
            ("SeasonType", season_type.to_string()),
            ("PerMode", "PerGame".to_string()),
        ];
        let response = self.get("leaguedashplayerstats", &params).await?;
        self.collect_rows(
            "leaguedashplayerstats",
            &response,
            "LeagueDashPlayerStats",
            PlayerSeasonTotals::from_row,
        )
    }

    /// Fetch both teams' box-score lines for one game.
    pub async fn get_box_score(&self, game_id: &str) -> Result<Vec<GameTeamLine>, Error> {
        let params = [("GameID", game_id.to_string())];
        let response = self.get("boxscoretraditionalv2", &params).await?;
        self.collect_rows(
            "boxscoretraditionalv2",
            &response,
            "TeamStats",
            GameTeamLine::from_row,
        )
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Extract a result set and map its rows, skipping rows whose identity
    /// fields are missing or unreadable.
    fn collect_rows<T>(
        &self,
        endpoint: &str,
        response: &StatsResponse,
        set_name: &'static str,
        map_row: impl Fn(&crate::model::Row<'_>) -> Option<T>,
    ) -> Result<Vec<T>, Error> {
        let result_set = response
            .result_set(set_name)
            .ok_or_else(|| Error::MissingResultSet {
                name: set_name,
                url: self.endpoint_url(endpoint),
            })?;

        let mut records = Vec::with_capacity(result_set.row_set.len());
        let mut skipped = 0usize;
        for row in result_set.rows() {
            match map_row(&row) {
                Some(record) => records.push(record),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            tracing::warn!(endpoint, set_name, skipped, "skipped malformed rows");
        }

        Ok(records)
    }

    /// Issue a paced GET and decode the response envelope.
    async fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<StatsResponse, Error> {
        self.pace().await;

        let url = self.endpoint_url(endpoint);
        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| Error::Request {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(Error::Auth {
                status: status.as_u16(),
                url,
            });
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::RateLimited { url });
        }
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json::<StatsResponse>()
            .await
            .map_err(|e| Error::Decode { url, source: e })
    }

    /// Sleep until at least `request_interval` has passed since the
    /// previous request. The lock is held through the sleep so concurrent
    /// callers queue rather than stampede.
    async fn pace(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.request_interval {
                tokio::time::sleep(self.request_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}
