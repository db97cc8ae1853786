//! Integration test harness.

mod helpers;

mod cli_test;
mod cues_test;
mod sync_test;
