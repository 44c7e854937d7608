//! End-to-end tests for game ingestion.

use fastbreak::service::ingest::games::GameIngest;
use fastbreak_test_utils::{endpoints, factory, TestBuilder, TestError};
use sea_orm::EntityTrait;

/// Games resolve their team references by abbreviation and derive the
/// result from the scores.
#[tokio::test]
async fn creates_games_with_resolved_team_references() -> Result<(), TestError> {
    let games = vec![
        factory::mock_game(1, 1, 2),
        factory::mock_game(3, 2, 1),
        factory::mock_game(5, 1, 2),
    ];
    let mut test = TestBuilder::new()
        .with_schema()
        .with_team(1)
        .with_team(2)
        .build()
        .await?;
    let mock = endpoints::create_games_endpoint(&mut test.server, &games, 1);

    let stored = GameIngest::new(&test.db, &test.client)
        .run(2023, "Regular Season")
        .await
        .unwrap();

    assert_eq!(stored.len(), 3);
    for game in &stored {
        assert!(game.home_team_id.is_some(), "home reference must resolve");
        assert!(game.away_team_id.is_some(), "away reference must resolve");
        // Factory games end 110-104 for the home side.
        assert_eq!(game.home_win, Some(true));
        assert_eq!(game.season, 2023);
    }

    let rows = entity::prelude::Game::find().all(&test.db).await?;
    assert_eq!(rows.len(), 3);

    mock.assert();
    Ok(())
}

/// Teams that were never ingested leave NULL references; the games still
/// persist with their abbreviations.
#[tokio::test]
async fn unknown_teams_degrade_to_null_references() -> Result<(), TestError> {
    let games = vec![factory::mock_game(1, 1, 2)];
    let mut test = TestBuilder::new().with_schema().build().await?;
    let _mock = endpoints::create_games_endpoint(&mut test.server, &games, 1);

    let stored = GameIngest::new(&test.db, &test.client)
        .run(2023, "Regular Season")
        .await
        .unwrap();

    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].home_team_id, None);
    assert_eq!(stored[0].away_team_id, None);
    assert_eq!(stored[0].home_team_abbr, factory::team_abbreviation(1));

    Ok(())
}

/// Consecutive game dates within the batch produce back-to-back flags and
/// rest-day counts.
#[tokio::test]
async fn derives_rest_days_and_back_to_backs() -> Result<(), TestError> {
    // mock_game dates n days into January 2024: games 1 and 2 fall on
    // consecutive days, game 5 comes after two days off.
    let games = vec![
        factory::mock_game(1, 1, 2),
        factory::mock_game(2, 1, 2),
        factory::mock_game(5, 2, 1),
    ];
    let mut test = TestBuilder::new()
        .with_schema()
        .with_team(1)
        .with_team(2)
        .build()
        .await?;
    let _mock = endpoints::create_games_endpoint(&mut test.server, &games, 1);

    let stored = GameIngest::new(&test.db, &test.client)
        .run(2023, "Regular Season")
        .await
        .unwrap();

    let by_id = |id: String| stored.iter().find(|g| g.id == id).unwrap();

    let first = by_id(factory::game_id(1));
    assert_eq!(first.home_rest_days, None);
    assert!(!first.home_back_to_back);

    let second = by_id(factory::game_id(2));
    assert_eq!(second.home_rest_days, Some(0));
    assert!(second.home_back_to_back);
    assert!(second.away_back_to_back);

    let third = by_id(factory::game_id(5));
    // Two full days off between January 3 and January 6.
    assert_eq!(third.home_rest_days, Some(2));
    assert!(!third.home_back_to_back);

    Ok(())
}
