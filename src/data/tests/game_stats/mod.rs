use fastbreak_test_utils::{factory, TestBuilder, TestError};

use crate::data::game_stats::GameStatsRepository;

mod upsert_many;
