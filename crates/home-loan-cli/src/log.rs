use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn filter_for(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "off" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

fn subscriber(verbose: bool) -> impl Subscriber + Send + Sync {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .with(filter_for(verbose))
}

/// Install the tracing subscriber. Diagnostics go to stderr so piped
/// stdout stays machine-readable; `RUST_LOG` overrides `--verbose`.
pub fn init_logging(verbose: bool) {
    subscriber(verbose).init();
}
