//! Tests for TeamStatsRepository::upsert_many.

use super::*;
use sea_orm::{DbErr, EntityTrait, RuntimeErr};

/// Aggregates are keyed on (team, season, season type).
#[tokio::test]
async fn upserts_new_stats() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().with_team(1).build().await?;
    let team = entity::prelude::Team::find()
        .one(&test.db)
        .await?
        .expect("team fixture missing");

    let repo = TeamStatsRepository::new(&test.db);
    let result = repo
        .upsert_many(
            vec![(team.id, factory::mock_team_totals(1))],
            2023,
            "Regular Season",
        )
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].team_id, team.id);
    assert_eq!(created[0].season, 2023);
    assert_eq!(created[0].games_played, 82);

    Ok(())
}

/// Re-ingesting the same season overwrites instead of duplicating.
#[tokio::test]
async fn overwrites_on_reingestion() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().with_team(1).build().await?;
    let team = entity::prelude::Team::find()
        .one(&test.db)
        .await?
        .expect("team fixture missing");

    let repo = TeamStatsRepository::new(&test.db);
    repo.upsert_many(
        vec![(team.id, factory::mock_team_totals(1))],
        2023,
        "Regular Season",
    )
    .await?;

    let mut updated = factory::mock_team_totals(1);
    updated.wins = Some(60);
    let latest = repo
        .upsert_many(vec![(team.id, updated)], 2023, "Regular Season")
        .await?;

    assert_eq!(latest[0].wins, 60);

    let all = entity::prelude::TeamSeasonStats::find().all(&test.db).await?;
    assert_eq!(all.len(), 1);

    Ok(())
}

/// Separate season types get separate rows for the same team and year.
#[tokio::test]
async fn season_types_are_distinct_rows() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().with_team(1).build().await?;
    let team = entity::prelude::Team::find()
        .one(&test.db)
        .await?
        .expect("team fixture missing");

    let repo = TeamStatsRepository::new(&test.db);
    repo.upsert_many(
        vec![(team.id, factory::mock_team_totals(1))],
        2023,
        "Regular Season",
    )
    .await?;
    repo.upsert_many(vec![(team.id, factory::mock_team_totals(1))], 2023, "Playoffs")
        .await?;

    let all = entity::prelude::TeamSeasonStats::find().all(&test.db).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Missing counting stats default to zero; percentages stay NULL.
#[tokio::test]
async fn defaults_missing_numerics() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().with_team(1).build().await?;
    let team = entity::prelude::Team::find()
        .one(&test.db)
        .await?
        .expect("team fixture missing");

    let mut totals = factory::mock_team_totals(1);
    totals.games_played = None;
    totals.win_pct = None;

    let repo = TeamStatsRepository::new(&test.db);
    let created = repo
        .upsert_many(vec![(team.id, totals)], 2023, "Regular Season")
        .await?;

    assert_eq!(created[0].games_played, 0);
    assert_eq!(created[0].win_pct, None);

    Ok(())
}

/// A stats row referencing a nonexistent team violates the foreign key
/// instead of being silently orphaned.
#[tokio::test]
async fn rejects_orphan_team_reference() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let repo = TeamStatsRepository::new(&test.db);
    let result = repo
        .upsert_many(
            vec![(4040, factory::mock_team_totals(1))],
            2023,
            "Regular Season",
        )
        .await;

    assert!(result.is_err(), "Expected error, instead got: {:?}", result);

    // SQLite reports foreign key constraint failures as error code 787.
    let code = result.err().and_then(|e| match e {
        DbErr::Query(RuntimeErr::SqlxError(se)) => se
            .as_database_error()
            .and_then(|d| d.code().map(|c| c.to_string())),
        _ => None,
    });
    assert_eq!(code.as_deref(), Some("787"));

    Ok(())
}
