//! Declarative test setup.
//!
//! Chain configuration methods, then `build()` to execute them in order:
//! schema first, then database fixtures, then mock endpoints.
//!
//! ```ignore
//! let mut test = TestBuilder::new()
//!     .with_schema()
//!     .with_team(1)
//!     .with_team(2)
//!     .build()
//!     .await?;
//! ```

use std::collections::HashMap;

use migration::{Migrator, MigratorTrait};
use mockito::{Mock, ServerGuard};

use crate::{context::TestContext, error::TestError, fixtures::db};

type EndpointFn = Box<dyn FnOnce(&mut ServerGuard) -> Mock>;

#[derive(Default)]
pub struct TestBuilder {
    migrate: bool,
    teams: Vec<i64>,
    players: Vec<(i64, Option<i64>)>,
    games: Vec<(i64, i64, i64, i32)>,
    endpoints: Vec<EndpointFn>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run all migrations against the in-memory database. Tests that
    /// exercise missing-table errors leave this off.
    pub fn with_schema(mut self) -> Self {
        self.migrate = true;
        self
    }

    /// Insert fixture team `n` (natural keys from the factory module).
    pub fn with_team(mut self, n: i64) -> Self {
        self.teams.push(n);
        self
    }

    /// Insert fixture player `n`, optionally rostered on fixture team
    /// `team` (which must also be added via [`with_team`](Self::with_team)).
    pub fn with_player(mut self, n: i64, team: Option<i64>) -> Self {
        self.players.push((n, team));
        self
    }

    /// Insert fixture game `n` between fixture teams `home` and `away`
    /// for the given season (Regular Season).
    pub fn with_game(mut self, n: i64, home: i64, away: i64, season: i32) -> Self {
        self.games.push((n, home, away, season));
        self
    }

    /// Register a custom mock endpoint during `build()`.
    pub fn with_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.endpoints.push(Box::new(setup));
        self
    }

    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        if self.migrate {
            Migrator::up(&context.db, None).await?;
        }

        let mut team_records: HashMap<i64, i32> = HashMap::new();
        for n in self.teams {
            let team = db::insert_team(&context.db, n).await?;
            team_records.insert(n, team.id);
        }

        for (n, team) in self.players {
            let team_record_id = team.and_then(|t| team_records.get(&t).copied());
            db::insert_player(&context.db, n, team_record_id).await?;
        }

        for (n, home, away, season) in self.games {
            db::insert_game(&context.db, n, home, away, season).await?;
        }

        let mut mocks = Vec::new();
        for endpoint in self.endpoints {
            mocks.push(endpoint(&mut context.server));
        }
        context.mocks = mocks;

        Ok(context)
    }
}
