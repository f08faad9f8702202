use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "immo_rechner=info";

/// Installs a stderr subscriber filtered by `RUST_LOG`. Stdout stays reserved
/// for simulation output. Calling it more than once is a no-op.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init();

    if result.is_ok() {
        tracing::debug!(filter = DEFAULT_FILTER, "Logging initialized");
    }
}
