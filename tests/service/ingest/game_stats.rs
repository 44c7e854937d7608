//! End-to-end tests for box-score ingestion.

use fastbreak::{
    error::{ingest::IngestError, Error},
    service::ingest::game_stats::GameStatsIngest,
};
use fastbreak_test_utils::{endpoints, factory, TestBuilder, TestError};
use sea_orm::EntityTrait;

/// Each stored game yields two box-score lines with the home flag derived
/// from the game's home abbreviation.
#[tokio::test]
async fn ingests_two_lines_per_stored_game() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_schema()
        .with_team(1)
        .with_team(2)
        .with_game(1, 1, 2, 2023)
        .with_game(2, 2, 1, 2023)
        .build()
        .await?;
    let mock_first = endpoints::create_box_score_endpoint(
        &mut test.server,
        &factory::game_id(1),
        &[factory::mock_box_line(1), factory::mock_box_line(2)],
        1,
    );
    let mock_second = endpoints::create_box_score_endpoint(
        &mut test.server,
        &factory::game_id(2),
        &[factory::mock_box_line(2), factory::mock_box_line(1)],
        1,
    );

    let stored = GameStatsIngest::new(&test.db, &test.client)
        .run(2023, "Regular Season")
        .await
        .unwrap();

    assert_eq!(stored.len(), 4);

    let rows = entity::prelude::GameStats::find().all(&test.db).await?;
    assert_eq!(rows.len(), 4);

    // Game 1 hosts team 1; game 2 hosts team 2.
    let team1 = entity::prelude::Team::find().all(&test.db).await?;
    let team1_record = team1
        .iter()
        .find(|t| t.abbreviation == factory::team_abbreviation(1))
        .unwrap()
        .id;
    let first_home = rows
        .iter()
        .find(|r| r.game_id == factory::game_id(1) && r.is_home)
        .unwrap();
    assert_eq!(first_home.team_id, team1_record);

    mock_first.assert();
    mock_second.assert();
    Ok(())
}

/// Lines for teams that were never ingested are skipped rather than
/// orphaned.
#[tokio::test]
async fn skips_lines_for_unknown_teams() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_schema()
        .with_team(1)
        .with_game(1, 1, 99, 2023)
        .build()
        .await?;
    let _mock = endpoints::create_box_score_endpoint(
        &mut test.server,
        &factory::game_id(1),
        &[factory::mock_box_line(1), factory::mock_box_line(99)],
        1,
    );

    let stored = GameStatsIngest::new(&test.db, &test.client)
        .run(2023, "Regular Season")
        .await
        .unwrap();

    assert_eq!(stored.len(), 1);

    Ok(())
}

/// Box scores require games to be ingested first.
#[tokio::test]
async fn errors_when_no_games_are_stored() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let result = GameStatsIngest::new(&test.db, &test.client)
        .run(2023, "Regular Season")
        .await;

    assert!(matches!(
        result,
        Err(Error::IngestError(IngestError::NoGamesForSeason {
            season: 2023,
            ..
        }))
    ));

    Ok(())
}
