use std::collections::HashMap;

use nba_api::model::TeamSeasonTotals;
use sea_orm::DatabaseConnection;

use crate::{
    data::{team::TeamRepository, team_stats::TeamStatsRepository},
    error::Error,
    service::retry::{RetryContext, RetryPolicy},
};

pub struct TeamStatsIngest<'a> {
    db: &'a DatabaseConnection,
    client: &'a nba_api::Client,
    retry_policy: RetryPolicy,
}

impl<'a> TeamStatsIngest<'a> {
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

    /// Fetch a season's team aggregates and upsert by (team, season,
    /// season type). Records whose team has not been ingested are skipped
    /// with a warning rather than written as orphans.
    pub async fn run(
        &self,
        season: i32,
        season_type: &str,
    ) -> Result<Vec<entity::team_season_stats::Model>, Error> {
        let db = self.db;
        let client = self.client;

        let mut ctx: RetryContext<Option<Vec<TeamSeasonTotals>>> =
            RetryContext::with_policy(self.retry_policy);

        let stored = ctx
            .execute_with_retry("team stats ingest", async move |fetch_cache: &mut Option<Vec<TeamSeasonTotals>>| {
                    let totals = match fetch_cache.as_ref() {
                        Some(cached) => cached.clone(),
                        None => {
                            let fetched = client.get_team_stats(season, season_type).await?;
                            *fetch_cache = Some(fetched.clone());
                            fetched
                        }
                    };

                    let team_ids: Vec<String> =
                        totals.iter().map(|t| t.team_id.clone()).collect();
                    let team_map: HashMap<String, i32> = TeamRepository::new(db)
                        .get_record_ids_by_team_ids(&team_ids)
                        .await?
                        .into_iter()
                        .map(|(record_id, team_id)| (team_id, record_id))
                        .collect();

                    let mut rows = Vec::with_capacity(totals.len());
                    let mut skipped = 0usize;
                    for total in totals {
                        match team_map.get(&total.team_id) {
                            Some(record_id) => rows.push((*record_id, total)),
                            None => {
                                skipped += 1;
                                tracing::warn!(
                                    team_id = %total.team_id,
                                    "skipping team stats row; team not ingested"
                                );
                            }
                        }
                    }

                    let stored = TeamStatsRepository::new(db)
                        .upsert_many(rows, season, season_type)
                        .await?;
                    Ok((stored, skipped))
            })
            .await
            .map(|(stored, skipped)| {
                tracing::info!(
                    count = stored.len(),
                    skipped,
                    season,
                    season_type,
                    "ingested team stats"
                );
                stored
            })?;

        Ok(stored)
    }
}
