use fastbreak_test_utils::{factory, TestBuilder, TestError};

use crate::data::player_stats::PlayerStatsRepository;

mod upsert_many;
