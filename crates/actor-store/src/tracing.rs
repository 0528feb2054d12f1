/// Initializes structured logging for the whole process.
///
/// Filtering is controlled through the `RUST_LOG` environment variable:
///
/// - `RUST_LOG=info` - actor lifecycle and mutations
/// - `RUST_LOG=debug` - every request with its payload
/// - `RUST_LOG=coffeemaker=debug` - debug for a single crate
///
/// Call once at startup, before any actor is spawned.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
