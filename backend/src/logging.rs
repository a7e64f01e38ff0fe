use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber. `RUST_LOG` takes precedence over `filter`.
pub fn init_tracing(filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt().with_env_filter(env_filter).with_target(false).init();
}
