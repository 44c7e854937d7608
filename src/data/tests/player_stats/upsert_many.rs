//! Tests for PlayerStatsRepository::upsert_many.

use super::*;
use sea_orm::EntityTrait;

/// Averages are keyed on (player, season, season type); the team
/// reference is optional.
#[tokio::test]
async fn upserts_new_stats() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_team(1)
        .with_player(1, Some(1))
        .build()
        .await?;
    let player = entity::prelude::Player::find()
        .one(&test.db)
        .await?
        .expect("player fixture missing");

    let repo = PlayerStatsRepository::new(&test.db);
    let result = repo
        .upsert_many(
            vec![(player.id, player.team_id, factory::mock_player_totals(1, Some(1)))],
            2023,
            "Regular Season",
        )
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].player_id, player.id);
    assert_eq!(created[0].team_id, player.team_id);

    Ok(())
}

/// Re-ingesting the same season overwrites instead of duplicating.
#[tokio::test]
async fn overwrites_on_reingestion() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_player(1, None)
        .build()
        .await?;
    let player = entity::prelude::Player::find()
        .one(&test.db)
        .await?
        .expect("player fixture missing");

    let repo = PlayerStatsRepository::new(&test.db);
    repo.upsert_many(
        vec![(player.id, None, factory::mock_player_totals(1, None))],
        2023,
        "Regular Season",
    )
    .await?;

    let mut updated = factory::mock_player_totals(1, None);
    updated.points_per_game = Some(31.4);
    let latest = repo
        .upsert_many(vec![(player.id, None, updated)], 2023, "Regular Season")
        .await?;

    assert_eq!(latest[0].points_per_game, Some(31.4));

    let all = entity::prelude::PlayerSeasonStats::find()
        .all(&test.db)
        .await?;
    assert_eq!(all.len(), 1);

    Ok(())
}

/// A stats row referencing a nonexistent player violates the foreign key.
#[tokio::test]
async fn rejects_orphan_player_reference() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let repo = PlayerStatsRepository::new(&test.db);
    let result = repo
        .upsert_many(
            vec![(4040, None, factory::mock_player_totals(1, None))],
            2023,
            "Regular Season",
        )
        .await;

    assert!(result.is_err(), "Expected error, instead got: {:?}", result);

    Ok(())
}
