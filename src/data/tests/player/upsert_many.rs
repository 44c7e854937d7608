//! Tests for PlayerRepository::upsert_many.

use super::*;
use sea_orm::EntityTrait;

/// A player with a resolved team gets the team record reference.
#[tokio::test]
async fn upserts_player_with_team_reference() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().with_team(1).build().await?;
    let team = entity::prelude::Team::find()
        .one(&test.db)
        .await?
        .expect("team fixture missing");

    let repo = PlayerRepository::new(&test.db);
    let result = repo
        .upsert_many(vec![(factory::mock_player(1, Some(1)), Some(team.id))])
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].team_id, Some(team.id));

    Ok(())
}

/// A player without a team keeps a NULL reference.
#[tokio::test]
async fn upserts_player_without_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let repo = PlayerRepository::new(&test.db);
    let created = repo
        .upsert_many(vec![(factory::mock_player(1, None), None)])
        .await?;

    assert_eq!(created[0].team_id, None);

    Ok(())
}

/// Re-ingesting a player updates the existing row by natural key.
#[tokio::test]
async fn updates_existing_player() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let repo = PlayerRepository::new(&test.db);
    let initial = repo
        .upsert_many(vec![(factory::mock_player(1, None), None)])
        .await?;

    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    let latest = repo
        .upsert_many(vec![(factory::mock_player(1, None), None)])
        .await?;

    assert_eq!(latest[0].id, initial[0].id);
    assert_eq!(latest[0].created_at, initial[0].created_at);
    assert!(latest[0].updated_at > initial[0].updated_at);

    let all = entity::prelude::Player::find().all(&test.db).await?;
    assert_eq!(all.len(), 1);

    Ok(())
}

/// A team reference that does not exist violates the foreign key.
#[tokio::test]
async fn rejects_unknown_team_reference() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let repo = PlayerRepository::new(&test.db);
    let result = repo
        .upsert_many(vec![(factory::mock_player(1, Some(1)), Some(4040))])
        .await;

    assert!(result.is_err(), "Expected error, instead got: {:?}", result);

    Ok(())
}
