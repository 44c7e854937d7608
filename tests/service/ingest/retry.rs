//! Retry behavior observed from the outside: request counts against a
//! mock provider.

use fastbreak::{
    error::Error,
    service::{ingest::teams::TeamIngest, retry::RetryPolicy},
};
use fastbreak_test_utils::{endpoints, TestBuilder, TestError};

/// Repeated server errors exhaust the attempt budget and surface the
/// error; the provider sees exactly max_attempts requests.
#[tokio::test]
async fn retry_budget_exhaustion_surfaces_the_error() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_schema().build().await?;
    let mock = endpoints::create_error_endpoint(&mut test.server, "/commonallteams", 500, 3);

    let result = TeamIngest::new(&test.db, &test.client)
        .with_retry_policy(RetryPolicy::immediate(3))
        .run()
        .await;

    assert!(matches!(
        result,
        Err(Error::ApiError(nba_api::Error::Status { status: 500, .. }))
    ));
    mock.assert();

    Ok(())
}

/// Authentication failures are surfaced immediately: one request, no
/// retries.
#[tokio::test]
async fn auth_failures_are_not_retried() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_schema().build().await?;
    let mock = endpoints::create_error_endpoint(&mut test.server, "/commonallteams", 401, 1);

    let result = TeamIngest::new(&test.db, &test.client)
        .with_retry_policy(RetryPolicy::immediate(3))
        .run()
        .await;

    assert!(matches!(
        result,
        Err(Error::ApiError(nba_api::Error::Auth { status: 401, .. }))
    ));
    mock.assert();

    Ok(())
}

/// Rate-limit responses are treated as transient and retried.
#[tokio::test]
async fn rate_limits_are_retried() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_schema().build().await?;
    let mock = endpoints::create_error_endpoint(&mut test.server, "/commonallteams", 429, 2);

    let result = TeamIngest::new(&test.db, &test.client)
        .with_retry_policy(RetryPolicy::immediate(2))
        .run()
        .await;

    assert!(matches!(
        result,
        Err(Error::ApiError(nba_api::Error::RateLimited { .. }))
    ));
    mock.assert();

    Ok(())
}
