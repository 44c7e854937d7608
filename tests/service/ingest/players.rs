//! End-to-end tests for player ingestion.

use fastbreak::service::ingest::players::PlayerIngest;
use fastbreak_test_utils::{endpoints, factory, TestBuilder, TestError};
use sea_orm::EntityTrait;

/// Players resolve their roster reference when the team has been
/// ingested; unknown teams degrade to NULL.
#[tokio::test]
async fn resolves_known_teams_and_nulls_unknown_ones() -> Result<(), TestError> {
    let players = vec![
        factory::mock_player(1, Some(1)),
        factory::mock_player(2, Some(99)),
        factory::mock_player(3, None),
    ];
    let mut test = TestBuilder::new().with_schema().with_team(1).build().await?;
    let mock = endpoints::create_players_endpoint(&mut test.server, &players, 1);

    let stored = PlayerIngest::new(&test.db, &test.client)
        .run(None, None)
        .await
        .unwrap();

    assert_eq!(stored.len(), 3);

    let by_player_id = |id: String| stored.iter().find(|p| p.player_id == id).unwrap();
    assert!(by_player_id(factory::player_id(1)).team_id.is_some());
    assert_eq!(by_player_id(factory::player_id(2)).team_id, None);
    assert_eq!(by_player_id(factory::player_id(3)).team_id, None);

    mock.assert();
    Ok(())
}

/// Re-ingesting rosters updates rows in place by provider player ID.
#[tokio::test]
async fn reingestion_is_idempotent() -> Result<(), TestError> {
    let players = vec![factory::mock_player(1, None), factory::mock_player(2, None)];
    let mut test = TestBuilder::new().with_schema().build().await?;
    let _mock = endpoints::create_players_endpoint(&mut test.server, &players, 2);

    let ingest = PlayerIngest::new(&test.db, &test.client);
    ingest.run(Some(2023), None).await.unwrap();
    ingest.run(Some(2023), None).await.unwrap();

    let rows = entity::prelude::Player::find().all(&test.db).await?;
    assert_eq!(rows.len(), 2);

    Ok(())
}
