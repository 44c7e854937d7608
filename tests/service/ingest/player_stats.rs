//! End-to-end tests for player statistics ingestion.

use fastbreak::service::ingest::player_stats::PlayerStatsIngest;
use fastbreak_test_utils::{endpoints, factory, TestBuilder, TestError};
use sea_orm::EntityTrait;

/// Stats for players that were never ingested are skipped; an unknown
/// team on a known player degrades to a NULL team reference.
#[tokio::test]
async fn skips_unknown_players_and_nulls_unknown_teams() -> Result<(), TestError> {
    let totals = vec![
        factory::mock_player_totals(1, Some(1)),
        factory::mock_player_totals(2, Some(99)),
        factory::mock_player_totals(3, Some(1)),
    ];
    // Players 1 and 2 are in the database; player 3 is not.
    let mut test = TestBuilder::new()
        .with_schema()
        .with_team(1)
        .with_player(1, Some(1))
        .with_player(2, None)
        .build()
        .await?;
    let mock = endpoints::create_player_stats_endpoint(&mut test.server, &totals, 1);

    let stored = PlayerStatsIngest::new(&test.db, &test.client)
        .run(2023, "Regular Season")
        .await
        .unwrap();

    assert_eq!(stored.len(), 2);

    let rows = entity::prelude::PlayerSeasonStats::find()
        .all(&test.db)
        .await?;
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().any(|r| r.team_id.is_some()));
    assert!(rows.iter().any(|r| r.team_id.is_none()));

    mock.assert();
    Ok(())
}
