//! HTTP client for the NBA statistics provider.
//!
//! The provider serves tabular JSON: every endpoint returns an envelope of
//! named result sets, each a header list plus positional rows. This crate
//! decodes that envelope into typed records, attaches authentication
//! headers, and enforces a minimum delay between consecutive requests so
//! callers stay under the provider's rate limits.

pub mod client;
pub mod error;
pub mod model;

pub use client::{season_slug, Client, ClientBuilder};
pub use error::Error;
