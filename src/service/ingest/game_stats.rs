use std::collections::HashMap;

use nba_api::model::GameTeamLine;
use sea_orm::DatabaseConnection;

use crate::{
    data::{game::GameRepository, game_stats::GameStatsRepository, team::TeamRepository},
    error::{ingest::IngestError, Error},
    service::retry::{RetryContext, RetryPolicy},
};

pub struct GameStatsIngest<'a> {
    db: &'a DatabaseConnection,
    client: &'a nba_api::Client,
    retry_policy: RetryPolicy,
}

impl<'a> GameStatsIngest<'a> {
    pub fn new(db: &'a DatabaseConnection, client: &'a nba_api::Client) -> Self {
        Self {
            db,
            client,
            retry_policy: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Fetch box scores for every stored game of a season and upsert two
    /// lines per game, keyed on (game, team). Games must be ingested
    /// first; lines whose team cannot be resolved are skipped with a
    /// warning.
    pub async fn run(
        &self,
        season: i32,
        season_type: &str,
    ) -> Result<Vec<entity::game_stats::Model>, Error> {
        let db = self.db;
        let client = self.client;

        let games = GameRepository::new(db)
            .get_by_season(season, season_type)
            .await?;
        if games.is_empty() {
            return Err(IngestError::NoGamesForSeason {
                season,
                season_type: season_type.to_string(),
            }
            .into());
        }

        let team_map: HashMap<String, i32> = TeamRepository::new(db)
            .get_all()
            .await?
            .into_iter()
            .map(|team| (team.team_id, team.id))
            .collect();
        let abbr_map: HashMap<String, i32> = TeamRepository::new(db)
            .get_all()
            .await?
            .into_iter()
            .map(|team| (team.abbreviation, team.id))
            .collect();

        let mut rows: Vec<(String, i32, bool, GameTeamLine)> = Vec::new();
        let mut skipped = 0usize;

        for game in &games {
            let game_id = game.id.clone();
            let mut ctx: RetryContext<Option<Vec<GameTeamLine>>> =
                RetryContext::with_policy(self.retry_policy);

            let lines = ctx
                .execute_with_retry("box score fetch", async move |fetch_cache: &mut Option<Vec<GameTeamLine>>| {
                    let game_id = game_id.clone();
                        if let Some(cached) = fetch_cache.as_ref() {
                            return Ok(cached.clone());
                        }
                        let fetched = client.get_box_score(&game_id).await?;
                        *fetch_cache = Some(fetched.clone());
                        Ok(fetched)
                })
                .await?;

            for line in lines {
                let team_record = team_map.get(&line.team_id).copied().or_else(|| {
                    line.team_abbreviation
                        .as_ref()
                        .and_then(|abbr| abbr_map.get(abbr))
                        .copied()
                });
                let Some(team_record) = team_record else {
                    skipped += 1;
                    tracing::warn!(
                        game_id = %game.id,
                        team_id = %line.team_id,
                        "skipping box score line; team not ingested"
                    );
                    continue;
                };

                let is_home = match line.team_abbreviation.as_deref() {
                    Some(abbr) => abbr == game.home_team_abbr,
                    None => game.home_team_id == Some(team_record),
                };

                rows.push((game.id.clone(), team_record, is_home, line));
            }
        }

        let stored = GameStatsRepository::new(db).upsert_many(rows).await?;
        tracing::info!(
            count = stored.len(),
            skipped,
            games = games.len(),
            season,
            season_type,
            "ingested game stats"
        );
        Ok(stored)
    }
}
