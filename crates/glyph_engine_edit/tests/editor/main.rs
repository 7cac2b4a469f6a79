//! Tests for editor operations
//!
//! These tests verify that all edit actions:
//! 1. Work correctly
//! 2. Push exactly one undo operation onto the stack when they change something
//! 3. Can be undone

mod history_tests;
mod selection_tests;

/// Routes `log` output of the crate under test to the test harness.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
