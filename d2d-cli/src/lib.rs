//! Command-line driver that assembles and prints one routing instance.
//!
//! The driver resolves its arguments from CLI flags, configuration files and
//! environment variables, loads the inputs beneath the problems directory,
//! selects the drone configuration and writes the canonical text on stdout.
#![forbid(unsafe_code)]

use clap::Parser;

mod error;
mod instance;
mod logging;

pub use error::CliError;
pub use logging::{LOG_ENV, init_logging};

pub(crate) const ARG_PROBLEM: &str = "problem";
pub(crate) const ARG_PROBLEMS_DIR: &str = "problems-dir";
pub(crate) const ENV_PROBLEM: &str = "D2D_CMDS_INSTANCE_PROBLEM";
pub(crate) const DEFAULT_PROBLEMS_DIR: &str = "problems";

/// Run the instance driver with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments are invalid, an input cannot be
/// loaded, no drone configuration matches, or stdout cannot be written.
pub fn run() -> Result<(), CliError> {
    let args = instance::InstanceArgs::try_parse().map_err(CliError::ArgumentParsing)?;
    instance::run_instance(args)
}

#[cfg(test)]
mod tests;
