use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient failures)
    Retry,
    /// Failed permanently (bad request, bad data, bad code)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // Provider request errors - the client already separates
            // transient conditions (network failures, 5xx, 429) from
            // permanent ones (auth rejection, decode failures, 4xx).
            Error::ApiError(api_err) => {
                if api_err.is_transient() {
                    ErrorRetryStrategy::Retry
                } else {
                    ErrorRetryStrategy::Fail
                }
            }

            Self::DbErr(db_err) => {
                match db_err {
                    // Connection acquisition errors - transient, should retry
                    DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                    // Connection errors - transient, should retry
                    DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                    // All other database errors are permanent failures:
                    // - Query errors (constraint violations, syntax errors, etc.)
                    // - Type conversion errors
                    // - Schema/migration errors
                    // - Record not found/inserted/updated
                    // These indicate programming bugs or data issues that won't resolve with retry
                    _ => ErrorRetryStrategy::Fail,
                }
            }

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Ingestion errors - permanent failures (unmet dependencies)
            Self::IngestError(_) => ErrorRetryStrategy::Fail,

            // Parse errors - permanent failures (bad data format)
            Self::ParseError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
