//! Tests for GameRepository season queries.

use super::*;

/// Queries filter on both season and season type.
#[tokio::test]
async fn filters_by_season_and_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let repo = GameRepository::new(&test.db);
    repo.upsert_many(vec![
        game_record(1, 1, 2, 2022),
        game_record(2, 1, 2, 2023),
        game_record(3, 2, 1, 2023),
    ])
    .await?;

    let games = repo.get_by_season(2023, "Regular Season").await?;
    assert_eq!(games.len(), 2);

    let playoffs = repo.get_by_season(2023, "Playoffs").await?;
    assert!(playoffs.is_empty());

    Ok(())
}

/// The id-only query returns the same games as the full query.
#[tokio::test]
async fn id_query_matches_full_query() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let repo = GameRepository::new(&test.db);
    repo.upsert_many(vec![game_record(1, 1, 2, 2023), game_record(2, 2, 1, 2023)])
        .await?;

    let mut ids = repo.get_ids_by_season(2023, "Regular Season").await?;
    ids.sort();

    assert_eq!(ids, vec![factory::game_id(1), factory::game_id(2)]);

    Ok(())
}
