use fastbreak_test_utils::{factory, TestBuilder, TestError};

use crate::data::player::PlayerRepository;

mod upsert_many;
