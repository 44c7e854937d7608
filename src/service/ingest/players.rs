use std::collections::HashMap;

use nba_api::model::Player;
use sea_orm::DatabaseConnection;

use crate::{
    data::{player::PlayerRepository, team::TeamRepository},
    error::Error,
    service::retry::{RetryContext, RetryPolicy},
};

pub struct PlayerIngest<'a> {
    db: &'a DatabaseConnection,
    client: &'a nba_api::Client,
    retry_policy: RetryPolicy,
}

impl<'a> PlayerIngest<'a> {
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

    /// Fetch players (optionally a single season roster or one team) and
    /// upsert by provider player ID. Players whose team has not been
    /// ingested keep a NULL team reference.
    pub async fn run(
        &self,
        season: Option<i32>,
        team_id: Option<&str>,
    ) -> Result<Vec<entity::player::Model>, Error> {
        let db = self.db;
        let client = self.client;

        let mut ctx: RetryContext<Option<Vec<Player>>> =
            RetryContext::with_policy(self.retry_policy);

        let stored = ctx
            .execute_with_retry("player ingest", async move |fetch_cache: &mut Option<Vec<Player>>| {
                    let players = match fetch_cache.as_ref() {
                        Some(cached) => cached.clone(),
                        None => {
                            let fetched = client.get_players(season, team_id).await?;
                            *fetch_cache = Some(fetched.clone());
                            fetched
                        }
                    };

                    let team_ids: Vec<String> = players
                        .iter()
                        .filter_map(|p| p.team_id.clone())
                        .collect();
                    let team_map: HashMap<String, i32> = TeamRepository::new(db)
                        .get_record_ids_by_team_ids(&team_ids)
                        .await?
                        .into_iter()
                        .map(|(record_id, team_id)| (team_id, record_id))
                        .collect();

                    let rows: Vec<(Player, Option<i32>)> = players
                        .into_iter()
                        .map(|player| {
                            let team_record = player
                                .team_id
                                .as_ref()
                                .and_then(|id| team_map.get(id))
                                .copied();
                            (player, team_record)
                        })
                        .collect();

                    let stored = PlayerRepository::new(db).upsert_many(rows).await?;
                    Ok(stored)
            })
            .await?;

        tracing::info!(count = stored.len(), "ingested players");
        Ok(stored)
    }
}
