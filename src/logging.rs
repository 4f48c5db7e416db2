use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `BREWUP_LOG=brewup=debug`.
pub const LOG_ENV: &str = "BREWUP_LOG";

/// Send diagnostics to stderr so stdout stays the formula preview.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
