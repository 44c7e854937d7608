use std::time::Duration;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment produced by [`TestBuilder`](crate::TestBuilder).
///
/// Holds an in-memory SQLite database and a provider client wired to a
/// mockito server. Register endpoints against `server` (directly or via
/// the builder), then call [`assert_mocks`](Self::assert_mocks) at the end
/// of the test to verify every endpoint saw its expected request count.
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
    /// Provider client pointed at the mock server
    pub client: nba_api::Client,
    /// Mock HTTP server standing in for the provider
    pub server: ServerGuard,
    /// Mock endpoints registered through the builder
    pub mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        // Zero pacing interval: tests should not sleep between requests.
        let client = nba_api::Client::builder()
            .base_url(server.url())
            .request_interval(Duration::ZERO)
            .build()?;

        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self {
            db,
            client,
            server,
            mocks: Vec::new(),
        })
    }

    /// Assert that every builder-registered mock was hit the expected
    /// number of times.
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
