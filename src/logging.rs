//! Process-wide log stream setup.

use tracing_subscriber::EnvFilter;

/// Install a `tracing` subscriber writing timestamped records to stderr.
///
/// The default level is `info`; `RUST_LOG` overrides it.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
