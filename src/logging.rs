use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Filtering comes from `RUST_LOG`
/// (default `warn`); output goes to stderr so stdout carries only the tree.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed when embedded in another binary.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
