//! Sparse map and object layer tests


/// Routes `log` output of the engine to the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
