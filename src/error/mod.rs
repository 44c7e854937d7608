//! Error types for the fastbreak pipeline.
//!
//! Domain-specific errors (configuration, ingestion) get their own enums;
//! this module aggregates them with external library errors into a single
//! `Error` so ingestion code can propagate anything with `?`. The retry
//! classification in [`retry`] decides which errors are worth retrying.

pub mod config;
pub mod ingest;
pub mod retry;

use thiserror::Error;

use crate::error::{config::ConfigError, ingest::IngestError};

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Ingestion error (unmet data dependencies, bad arguments).
    #[error(transparent)]
    IngestError(#[from] IngestError),
    /// Provider client error (transport, authentication, decoding).
    #[error(transparent)]
    ApiError(#[from] nba_api::Error),
    /// Database error (query failures, connection issues, constraints).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
}
