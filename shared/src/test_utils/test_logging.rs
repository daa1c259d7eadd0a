use once_cell::sync::Lazy;

static INIT_LOGGING: Lazy<()> = Lazy::new(|| {
    // try_init: another harness may have installed a logger already
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .is_test(true)
        .try_init();
});

/// Initializes env_logger once for the whole test binary.
pub fn init_test_logging() {
    Lazy::force(&INIT_LOGGING);
}
