//! Diagnostic logging for the driver binary.

use tracing_subscriber::{
    EnvFilter, fmt,
    util::{SubscriberInitExt as _, TryInitError},
};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "D2D_LOG";

const DEFAULT_FILTER: &str = "info";

/// Install a stderr subscriber filtered by [`LOG_ENV`].
///
/// Records emitted through the `log` facade are forwarded to the same
/// subscriber. Stdout stays reserved for the canonical instance.
///
/// # Errors
/// Returns an error when a global subscriber is already installed.
pub fn init_logging() -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish()
        .try_init()
}
