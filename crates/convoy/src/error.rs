//! Error types for convoy operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for convoy operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading or writing a document.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A manifest or artifact document could not be parsed into the
    /// expected shape. Fatal: no partial output is produced.
    #[error("malformed input in {path}: {message}")]
    MalformedInput {
        /// The document that failed to parse.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },

    /// A graph algorithm failed (cycle detected, inconsistent grouping).
    #[error(transparent)]
    Graph(#[from] convoy_graph::Error),

    /// A service name was referenced that the master plan does not contain.
    #[error("service not found in master plan: {0}")]
    UnknownService(String),

    /// More than one override directive targets the same service.
    #[error("duplicate override directive for service: {0}")]
    DuplicateOverride(String),

    /// Strict mode promoted consistency warnings to a failure.
    #[error("plan failed strict consistency check: {0} warning(s)")]
    StrictConsistency(usize),
}

/// A specialized Result type for convoy operations.
pub type Result<T> = std::result::Result<T, Error>;
