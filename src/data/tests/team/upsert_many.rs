//! Tests for TeamRepository::upsert_many.

use super::*;
use sea_orm::EntityTrait;

/// Inserting a new team returns the created row with its natural keys.
#[tokio::test]
async fn upserts_new_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let repo = TeamRepository::new(&test.db);
    let result = repo.upsert_many(vec![factory::mock_team(1)]).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].team_id, factory::team_id(1));
    assert_eq!(created[0].abbreviation, factory::team_abbreviation(1));

    Ok(())
}

/// Upserting the same team twice keeps one row, preserves created_at, and
/// advances updated_at.
#[tokio::test]
async fn updates_existing_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let repo = TeamRepository::new(&test.db);
    let initial = repo.upsert_many(vec![factory::mock_team(1)]).await?;
    let initial = initial.into_iter().next().expect("no row returned");

    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    let latest = repo.upsert_many(vec![factory::mock_team(1)]).await?;
    let latest = latest.into_iter().next().expect("no row returned");

    assert_eq!(latest.id, initial.id);
    assert_eq!(latest.created_at, initial.created_at);
    assert!(latest.updated_at > initial.updated_at);

    let all = entity::prelude::Team::find().all(&test.db).await?;
    assert_eq!(all.len(), 1);

    Ok(())
}

/// A batch mixing new and existing teams updates the old row and inserts
/// the new ones.
#[tokio::test]
async fn upserts_mixed_new_and_existing_teams() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let repo = TeamRepository::new(&test.db);
    repo.upsert_many(vec![factory::mock_team(1), factory::mock_team(2)])
        .await?;

    let result = repo
        .upsert_many(vec![factory::mock_team(1), factory::mock_team(3)])
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap().len(), 2);

    let all = entity::prelude::Team::find().all(&test.db).await?;
    assert_eq!(all.len(), 3);

    Ok(())
}

/// Empty input is a no-op.
#[tokio::test]
async fn handles_empty_input() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let repo = TeamRepository::new(&test.db);
    let result = repo.upsert_many(vec![]).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}

/// Upserting without the schema in place surfaces a database error.
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let repo = TeamRepository::new(&test.db);
    let result = repo.upsert_many(vec![factory::mock_team(1)]).await;

    assert!(result.is_err());

    Ok(())
}
