//! Tests for GameRepository::upsert_many.

use super::*;
use sea_orm::EntityTrait;

/// Games are keyed by the provider game ID and derive home_win from the
/// scores.
#[tokio::test]
async fn upserts_new_game() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let repo = GameRepository::new(&test.db);
    let result = repo.upsert_many(vec![game_record(1, 1, 2, 2023)]).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].id, factory::game_id(1));
    // Factory games end 110-104 for the home side.
    assert_eq!(created[0].home_win, Some(true));

    Ok(())
}

/// Re-ingesting a game updates in place; a season re-run does not
/// duplicate rows.
#[tokio::test]
async fn updates_existing_game() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let repo = GameRepository::new(&test.db);
    repo.upsert_many(vec![game_record(1, 1, 2, 2023)]).await?;

    let mut rerun = game_record(1, 1, 2, 2023);
    rerun.summary.home_score = Some(98);
    rerun.summary.away_score = Some(101);
    let latest = repo.upsert_many(vec![rerun]).await?;

    assert_eq!(latest[0].home_win, Some(false));

    let all = entity::prelude::Game::find().all(&test.db).await?;
    assert_eq!(all.len(), 1);

    Ok(())
}

/// Games without final scores leave the result NULL.
#[tokio::test]
async fn unplayed_game_has_no_result() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let mut record = game_record(1, 1, 2, 2023);
    record.summary.home_score = None;
    record.summary.away_score = None;

    let repo = GameRepository::new(&test.db);
    let created = repo.upsert_many(vec![record]).await?;

    assert_eq!(created[0].home_score, None);
    assert_eq!(created[0].home_win, None);

    Ok(())
}

/// Empty input is a no-op.
#[tokio::test]
async fn handles_empty_input() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let repo = GameRepository::new(&test.db);
    let result = repo.upsert_many(vec![]).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}
