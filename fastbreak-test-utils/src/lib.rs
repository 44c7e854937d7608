//! Shared test infrastructure for the fastbreak workspace.
//!
//! Provides an in-memory SQLite database plus a mock provider server, tied
//! together by [`TestBuilder`]: declare the schema, database fixtures, and
//! HTTP endpoints a test needs, then `build()` a ready [`TestContext`].

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
pub use fixtures::{endpoints, factory};
