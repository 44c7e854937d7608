use fastbreak_test_utils::{factory, TestBuilder, TestError};

use crate::data::team::TeamRepository;

mod find_by_abbreviation;
mod upsert_many;
