use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so they never interleave with menu prompts.
/// `RUST_LOG` takes precedence over `default_level`.
pub fn configure_logging(default_level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let stderr_log = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr_log).init();
}
