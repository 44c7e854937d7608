use nba_api::model::Team;
use sea_orm::DatabaseConnection;

use crate::{
    data::team::TeamRepository,
    error::Error,
    service::retry::{RetryContext, RetryPolicy},
};

pub struct TeamIngest<'a> {
    db: &'a DatabaseConnection,
    client: &'a nba_api::Client,
    retry_policy: RetryPolicy,
}

impl<'a> TeamIngest<'a> {
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

    /// Fetch every team from the provider and upsert by provider team ID.
    pub async fn run(&self) -> Result<Vec<entity::team::Model>, Error> {
        let db = self.db;
        let client = self.client;

        let mut ctx: RetryContext<Option<Vec<Team>>> =
            RetryContext::with_policy(self.retry_policy);

        let stored = ctx
            .execute_with_retry("team ingest", async move |fetch_cache: &mut Option<Vec<Team>>| {
                    let teams = match fetch_cache.as_ref() {
                        Some(cached) => cached.clone(),
                        None => {
                            let fetched = client.get_teams().await?;
                            *fetch_cache = Some(fetched.clone());
                            fetched
                        }
                    };

                    let stored = TeamRepository::new(db).upsert_many(teams).await?;
                    Ok(stored)
            })
            .await?;

        tracing::info!(count = stored.len(), "ingested teams");
        Ok(stored)
    }
}
