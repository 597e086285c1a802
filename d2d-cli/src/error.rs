//! Error types emitted by the instance CLI.
//!
//! Keep this error type reasonably small, as the pipeline helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use d2d_core::SelectionError;
use d2d_data::LoadError;
use thiserror::Error;

/// Errors emitted by the instance CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass it on the command line or set {env})")]
    MissingArgument {
        /// Name of the missing argument.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The problems directory does not exist.
    #[error("problems directory {path} does not exist")]
    MissingProblemsDir {
        /// Resolved problems directory.
        path: Utf8PathBuf,
    },
    /// The problems directory path names something other than a directory.
    #[error("problems directory {path} is not a directory")]
    ProblemsDirNotDirectory {
        /// Resolved problems directory.
        path: Utf8PathBuf,
    },
    /// The problems directory could not be inspected.
    #[error("failed to inspect problems directory {path}")]
    InspectProblemsDir {
        /// Resolved problems directory.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Reading an input file failed.
    #[error("failed to load instance inputs")]
    Load(#[from] LoadError),
    /// No drone configuration matches the requested classes.
    #[error(transparent)]
    Selection(#[from] SelectionError),
    /// Writing the canonical instance failed.
    #[error("failed to write instance output")]
    WriteInstance(#[source] std::io::Error),
}
