use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset.
pub const fn default_filter(verbose: bool) -> &'static str {
    if verbose { "letu=debug" } else { "letu=warn" }
}

/// Install the global tracing subscriber, writing to stderr so command
/// output on stdout stays machine-readable. `RUST_LOG` takes precedence
/// over `verbose`. A second call is a no-op.
pub fn init(verbose: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose).into());
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
