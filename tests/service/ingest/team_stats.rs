//! End-to-end tests for team statistics ingestion.

use fastbreak::service::ingest::team_stats::TeamStatsIngest;
use fastbreak_test_utils::{endpoints, factory, TestBuilder, TestError};
use sea_orm::EntityTrait;

/// Stats for teams that were never ingested are skipped, not orphaned;
/// the rest of the batch still persists.
#[tokio::test]
async fn skips_stats_for_unknown_teams() -> Result<(), TestError> {
    let totals = vec![factory::mock_team_totals(1), factory::mock_team_totals(2)];
    let mut test = TestBuilder::new().with_schema().with_team(1).build().await?;
    let mock = endpoints::create_team_stats_endpoint(&mut test.server, &totals, 1);

    let stored = TeamStatsIngest::new(&test.db, &test.client)
        .run(2023, "Regular Season")
        .await
        .unwrap();

    assert_eq!(stored.len(), 1);

    let rows = entity::prelude::TeamSeasonStats::find().all(&test.db).await?;
    assert_eq!(rows.len(), 1);

    // The surviving row references the ingested team.
    let team = entity::prelude::Team::find().one(&test.db).await?.unwrap();
    assert_eq!(rows[0].team_id, team.id);

    mock.assert();
    Ok(())
}

/// Re-ingesting a season overwrites aggregates instead of accumulating
/// rows.
#[tokio::test]
async fn reingestion_overwrites() -> Result<(), TestError> {
    let totals = vec![factory::mock_team_totals(1)];
    let mut test = TestBuilder::new().with_schema().with_team(1).build().await?;
    let _mock = endpoints::create_team_stats_endpoint(&mut test.server, &totals, 2);

    let ingest = TeamStatsIngest::new(&test.db, &test.client);
    ingest.run(2023, "Regular Season").await.unwrap();
    ingest.run(2023, "Regular Season").await.unwrap();

    let rows = entity::prelude::TeamSeasonStats::find().all(&test.db).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}
