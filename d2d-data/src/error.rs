//! Errors raised while reading instance inputs.

use camino::Utf8PathBuf;
use d2d_core::ProblemError;
use thiserror::Error;

/// Broad class of a [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// A file could not be opened or read.
    Io,
    /// A configuration file lacks a required key or has the wrong shape.
    Schema,
    /// The problem text is missing a header or holds a malformed record.
    Format,
}

/// Errors raised while loading configuration files and problem text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// Opening or reading an input file failed.
    #[error("failed to read {path}")]
    Read {
        /// File that could not be read.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// A configuration file is not a JSON object.
    #[error("failed to parse {path} as a JSON object")]
    ParseJson {
        /// Offending configuration file.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A configuration record lacks a key or holds a value of the wrong type.
    #[error("{path}: entry `{entry}` does not match the expected schema")]
    InvalidRecord {
        /// Offending configuration file.
        path: Utf8PathBuf,
        /// Top-level key of the record.
        entry: String,
        /// Source error from `serde_json`, naming the key.
        #[source]
        source: serde_json::Error,
    },
    /// A candidate entry that must be an object is some other JSON value.
    #[error("{path}: entry `{entry}` is not a JSON object")]
    EntryNotObject {
        /// Offending configuration file.
        path: Utf8PathBuf,
        /// Top-level key of the entry.
        entry: String,
    },
    /// A required key is absent from both a candidate and the top level.
    #[error("{path}: entry `{entry}` has no `{key}` and the file defines no shared value")]
    MissingKey {
        /// Offending configuration file.
        path: Utf8PathBuf,
        /// Top-level key of the candidate.
        entry: String,
        /// Missing key.
        key: &'static str,
    },
    /// A value that must be a number is some other JSON value.
    #[error("{path}: `{key}` must be a number")]
    NotANumber {
        /// Offending configuration file.
        path: Utf8PathBuf,
        /// Key holding the value, qualified by its parent where nested.
        key: String,
    },
    /// A labelled header is absent from the problem text.
    #[error("{path}: missing `{label}` header")]
    MissingHeader {
        /// Problem file.
        path: Utf8PathBuf,
        /// Header label that was searched for.
        label: &'static str,
    },
    /// A header value does not fit a count.
    #[error("{path}: `{label}` header value `{value}` is not a valid count")]
    InvalidHeader {
        /// Problem file.
        path: Utf8PathBuf,
        /// Header label.
        label: &'static str,
        /// Raw header value.
        value: String,
    },
    /// A record field matched the pattern but is not a number.
    #[error("{path}: customer record {record} has invalid {field} `{value}`")]
    InvalidField {
        /// Problem file.
        path: Utf8PathBuf,
        /// Zero-based record index in file order.
        record: usize,
        /// Field name.
        field: &'static str,
        /// Raw field text.
        value: String,
    },
    /// The declared customer count disagrees with the records found.
    #[error("{path}: header declares {declared} customers but {found} records were found")]
    CustomerCountMismatch {
        /// Problem file.
        path: Utf8PathBuf,
        /// Value of the `Customers` header.
        declared: usize,
        /// Number of matched records.
        found: usize,
    },
    /// The assembled customer table is inconsistent.
    #[error("{path}: inconsistent customer table")]
    InconsistentProblem {
        /// Problem file.
        path: Utf8PathBuf,
        /// Source error from the domain constructor.
        #[source]
        source: ProblemError,
    },
}

impl LoadError {
    /// Classify the error as an I/O, schema or format failure.
    #[must_use]
    pub const fn kind(&self) -> LoadErrorKind {
        match self {
            Self::Read { .. } => LoadErrorKind::Io,
            Self::ParseJson { .. }
            | Self::InvalidRecord { .. }
            | Self::EntryNotObject { .. }
            | Self::MissingKey { .. }
            | Self::NotANumber { .. } => LoadErrorKind::Schema,
            Self::MissingHeader { .. }
            | Self::InvalidHeader { .. }
            | Self::InvalidField { .. }
            | Self::CustomerCountMismatch { .. }
            | Self::InconsistentProblem { .. } => LoadErrorKind::Format,
        }
    }
}
