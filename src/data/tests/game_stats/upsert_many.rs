//! Tests for GameStatsRepository::upsert_many.

use super::*;
use sea_orm::EntityTrait;

/// Box-score lines are keyed on (game, team), two rows per game.
#[tokio::test]
async fn upserts_both_lines_of_a_game() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_team(1)
        .with_team(2)
        .with_game(1, 1, 2, 2023)
        .build()
        .await?;
    let teams = entity::prelude::Team::find().all(&test.db).await?;

    let repo = GameStatsRepository::new(&test.db);
    let result = repo
        .upsert_many(vec![
            (factory::game_id(1), teams[0].id, true, factory::mock_box_line(1)),
            (factory::game_id(1), teams[1].id, false, factory::mock_box_line(2)),
        ])
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();
    assert_eq!(created.len(), 2);

    let lines = repo.get_by_game(&factory::game_id(1)).await?;
    assert_eq!(lines.len(), 2);
    assert_eq!(lines.iter().filter(|l| l.is_home).count(), 1);

    Ok(())
}

/// Re-ingesting a game's box score overwrites the existing lines.
#[tokio::test]
async fn overwrites_on_reingestion() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_team(1)
        .with_team(2)
        .with_game(1, 1, 2, 2023)
        .build()
        .await?;
    let teams = entity::prelude::Team::find().all(&test.db).await?;

    let repo = GameStatsRepository::new(&test.db);
    repo.upsert_many(vec![(
        factory::game_id(1),
        teams[0].id,
        true,
        factory::mock_box_line(1),
    )])
    .await?;

    let mut updated = factory::mock_box_line(1);
    updated.points = Some(131);
    let latest = repo
        .upsert_many(vec![(factory::game_id(1), teams[0].id, true, updated)])
        .await?;

    assert_eq!(latest[0].points, 131);

    let all = entity::prelude::GameStats::find().all(&test.db).await?;
    assert_eq!(all.len(), 1);

    Ok(())
}

/// A line referencing a game that was never ingested violates the
/// foreign key.
#[tokio::test]
async fn rejects_orphan_game_reference() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().with_team(1).build().await?;
    let teams = entity::prelude::Team::find().all(&test.db).await?;

    let repo = GameStatsRepository::new(&test.db);
    let result = repo
        .upsert_many(vec![(
            factory::game_id(99),
            teams[0].id,
            true,
            factory::mock_box_line(1),
        )])
        .await;

    assert!(result.is_err(), "Expected error, instead got: {:?}", result);

    Ok(())
}
