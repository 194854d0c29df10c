use vqme::Vec3;

#[allow(dead_code)]
pub const EPSILON: f64 = 1e-9;

/// Installs `env_logger` once so `RUST_LOG=vqme=trace` shows library logging.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn assert_vec_approx_eq(actual: Vec3, expected: Vec3) {
    assert!(
        Vec3::distance(actual, expected) < EPSILON,
        "expected {expected}, got {actual}"
    );
}
