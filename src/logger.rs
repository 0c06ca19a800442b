//! Logging initialisation via tracing-subscriber.
//!
//! Call [`init`] once, after the config is loaded. Events go to stderr so
//! stdout stays clean for command output.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Install the global subscriber at `level`.
///
/// A non-empty `RUST_LOG` replaces `level`; its unparseable directives are
/// skipped, and `level` applies if none survive.
pub fn init(level: LevelFilter) -> Result<(), AppError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(filter(level, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))
}

fn filter(level: LevelFilter, rust_log: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(rust_log.unwrap_or_default())
}

/// Parse a log level string, rejecting empty or unknown values.
///
/// Unlike an `EnvFilter` directive, a bare word such as `verbose` is an
/// error here rather than a target name.
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    if level.is_empty() {
        return Err(AppError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Logger(format!("unrecognised log level: '{level}'")))
}
