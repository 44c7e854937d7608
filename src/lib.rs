//! Fastbreak: ingestion and persistence pipeline for NBA statistics.
//!
//! Fetches teams, players, games, and statistics from the provider's HTTP
//! API, maps them onto the relational schema defined by the `entity` and
//! `migration` crates, and upserts them by natural key. The `fastbreak`
//! binary exposes one subcommand per ingestion operation.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod service;
pub mod startup;
