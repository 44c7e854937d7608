//! Tests for TeamRepository lookups by natural key.

use super::*;

/// Lookup is case-insensitive on the caller's side; abbreviations are
/// stored uppercase.
#[tokio::test]
async fn finds_team_regardless_of_input_case() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().with_team(1).build().await?;

    let repo = TeamRepository::new(&test.db);
    let abbreviation = factory::team_abbreviation(1);

    let exact = repo.find_by_abbreviation(&abbreviation).await?;
    assert!(exact.is_some());

    let lowercase = repo.find_by_abbreviation(&abbreviation.to_lowercase()).await?;
    assert!(lowercase.is_some());
    assert_eq!(lowercase.unwrap().id, exact.unwrap().id);

    Ok(())
}

/// Unknown abbreviations return None.
#[tokio::test]
async fn returns_none_for_unknown_abbreviation() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let repo = TeamRepository::new(&test.db);
    let result = repo.find_by_abbreviation("ZZZ").await?;

    assert!(result.is_none());

    Ok(())
}

/// Record-id maps cover only the requested teams.
#[tokio::test]
async fn maps_team_ids_to_record_ids() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_team(1)
        .with_team(2)
        .build()
        .await?;

    let repo = TeamRepository::new(&test.db);
    let pairs = repo
        .get_record_ids_by_team_ids(&[factory::team_id(1), factory::team_id(99)])
        .await?;

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].1, factory::team_id(1));

    Ok(())
}
