pub mod brute_force;
pub mod graph_enumerator;
pub mod random_graphs;

/// Routes `log` output of the library through the test harness.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
