use std::collections::HashMap;

use nba_api::model::PlayerSeasonTotals;
use sea_orm::DatabaseConnection;

use crate::{
    data::{player::PlayerRepository, player_stats::PlayerStatsRepository, team::TeamRepository},
    error::Error,
    service::retry::{RetryContext, RetryPolicy},
};

pub struct PlayerStatsIngest<'a> {
    db: &'a DatabaseConnection,
    client: &'a nba_api::Client,
    retry_policy: RetryPolicy,
}

impl<'a> PlayerStatsIngest<'a> {
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

    /// Fetch a season's player averages and upsert by (player, season,
    /// season type). Records whose player has not been ingested are
    /// skipped with a warning; an unknown team degrades to a NULL team
    /// reference.
    pub async fn run(
        &self,
        season: i32,
        season_type: &str,
    ) -> Result<Vec<entity::player_season_stats::Model>, Error> {
        let db = self.db;
        let client = self.client;

        let mut ctx: RetryContext<Option<Vec<PlayerSeasonTotals>>> =
            RetryContext::with_policy(self.retry_policy);

        let stored = ctx
            .execute_with_retry("player stats ingest", async move |fetch_cache: &mut Option<Vec<PlayerSeasonTotals>>| {
                    let totals = match fetch_cache.as_ref() {
                        Some(cached) => cached.clone(),
                        None => {
                            let fetched = client.get_player_stats(season, season_type).await?;
                            *fetch_cache = Some(fetched.clone());
                            fetched
                        }
                    };

                    let player_ids: Vec<String> =
                        totals.iter().map(|t| t.player_id.clone()).collect();
                    let player_map: HashMap<String, i32> = PlayerRepository::new(db)
                        .get_record_ids_by_player_ids(&player_ids)
                        .await?
                        .into_iter()
                        .map(|(record_id, player_id)| (player_id, record_id))
                        .collect();

                    let team_ids: Vec<String> = totals
                        .iter()
                        .filter_map(|t| t.team_id.clone())
                        .collect();
                    let team_map: HashMap<String, i32> = TeamRepository::new(db)
                        .get_record_ids_by_team_ids(&team_ids)
                        .await?
                        .into_iter()
                        .map(|(record_id, team_id)| (team_id, record_id))
                        .collect();

                    let mut rows = Vec::with_capacity(totals.len());
                    let mut skipped = 0usize;
                    for total in totals {
                        let Some(player_record) = player_map.get(&total.player_id).copied()
                        else {
                            skipped += 1;
                            tracing::warn!(
                                player_id = %total.player_id,
                                "skipping player stats row; player not ingested"
                            );
                            continue;
                        };
                        let team_record = total
                            .team_id
                            .as_ref()
                            .and_then(|id| team_map.get(id))
                            .copied();
                        rows.push((player_record, team_record, total));
                    }

                    let stored = PlayerStatsRepository::new(db)
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
                    "ingested player stats"
                );
                stored
            })?;

        Ok(stored)
    }
}
