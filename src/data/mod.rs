//! Data access repositories.
//!
//! One repository per table, each generic over the connection so callers
//! can pass either a plain connection or a transaction. Writes go through
//! `upsert_many`: insert-or-update keyed on the table's natural key, with
//! `created_at` preserved and `updated_at` refreshed on conflict.

pub mod game;
pub mod game_stats;
pub mod player;
pub mod player_stats;
pub mod team;
pub mod team_stats;

#[cfg(test)]
mod tests;
