use std::collections::{HashMap, HashSet};

use nba_api::model::GameSummary;
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        game::{GameRecord, GameRepository},
        team::TeamRepository,
    },
    error::Error,
    service::retry::{RetryContext, RetryPolicy},
};

pub struct GameIngest<'a> {
    db: &'a DatabaseConnection,
    client: &'a nba_api::Client,
    retry_policy: RetryPolicy,
}

impl<'a> GameIngest<'a> {
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

    /// Fetch a season's games and upsert by provider game ID, resolving
    /// team references by abbreviation and deriving schedule context
    /// (rest days, back-to-back flags) within the fetched batch.
    pub async fn run(
        &self,
        season: i32,
        season_type: &str,
    ) -> Result<Vec<entity::game::Model>, Error> {
        let db = self.db;
        let client = self.client;

        let mut ctx: RetryContext<Option<Vec<GameSummary>>> =
            RetryContext::with_policy(self.retry_policy);

        let stored = ctx
            .execute_with_retry("game ingest", async move |fetch_cache: &mut Option<Vec<GameSummary>>| {
                    let games = match fetch_cache.as_ref() {
                        Some(cached) => cached.clone(),
                        None => {
                            let fetched = client.get_games(season, season_type).await?;
                            *fetch_cache = Some(fetched.clone());
                            fetched
                        }
                    };

                    let abbreviations: Vec<String> = games
                        .iter()
                        .flat_map(|g| [g.home_team_abbr.clone(), g.away_team_abbr.clone()])
                        .collect::<HashSet<_>>()
                        .into_iter()
                        .collect();
                    let team_map: HashMap<String, i32> = TeamRepository::new(db)
                        .get_record_ids_by_abbreviations(&abbreviations)
                        .await?
                        .into_iter()
                        .map(|(record_id, abbr)| (abbr, record_id))
                        .collect();

                    for abbr in &abbreviations {
                        if !team_map.contains_key(abbr) {
                            tracing::warn!(
                                abbreviation = %abbr,
                                "team not ingested; game rows will carry a NULL reference"
                            );
                        }
                    }

                    let context = derive_schedule_context(&games);

                    let rows: Vec<GameRecord> = games
                        .into_iter()
                        .map(|summary| {
                            let home = context
                                .get(&(summary.home_team_abbr.clone(), summary.game_id.clone()))
                                .copied()
                                .unwrap_or_default();
                            let away = context
                                .get(&(summary.away_team_abbr.clone(), summary.game_id.clone()))
                                .copied()
                                .unwrap_or_default();

                            GameRecord {
                                home_team_id: team_map.get(&summary.home_team_abbr).copied(),
                                away_team_id: team_map.get(&summary.away_team_abbr).copied(),
                                season,
                                season_type: season_type.to_string(),
                                home_rest_days: home.rest_days,
                                away_rest_days: away.rest_days,
                                home_back_to_back: home.back_to_back,
                                away_back_to_back: away.back_to_back,
                                summary,
                            }
                        })
                        .collect();

                    let stored = GameRepository::new(db).upsert_many(rows).await?;
                    Ok(stored)
            })
            .await?;

        tracing::info!(count = stored.len(), season, season_type, "ingested games");
        Ok(stored)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ScheduleContext {
    rest_days: Option<i32>,
    back_to_back: bool,
}

/// Derive per-team rest days and back-to-back flags from a batch of games.
///
/// For each team the batch's games are ordered by date; rest days are the
/// full days off between consecutive games, and a game counts as a
/// back-to-back when it falls on the day after the previous one. A team's
/// first game of the batch has no prior reference point, so its rest days
/// stay unknown.
fn derive_schedule_context(
    games: &[GameSummary],
) -> HashMap<(String, String), ScheduleContext> {
    let mut by_team: HashMap<&str, Vec<&GameSummary>> = HashMap::new();
    for game in games {
        by_team.entry(&game.home_team_abbr).or_default().push(game);
        by_team.entry(&game.away_team_abbr).or_default().push(game);
    }

    let mut context = HashMap::new();
    for (abbr, mut team_games) in by_team {
        team_games.sort_by(|a, b| {
            a.game_date
                .cmp(&b.game_date)
                .then_with(|| a.game_id.cmp(&b.game_id))
        });

        let mut previous_date: Option<chrono::NaiveDate> = None;
        for game in team_games {
            let entry = match previous_date {
                Some(previous) => {
                    let days_between =
                        (game.game_date - previous).num_days().max(0) as i32;
                    ScheduleContext {
                        rest_days: Some((days_between - 1).max(0)),
                        back_to_back: days_between == 1,
                    }
                }
                None => ScheduleContext::default(),
            };
            context.insert((abbr.to_string(), game.game_id.clone()), entry);
            previous_date = Some(game.game_date);
        }
    }

    context
}
