//! Error types for reviewdeck-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading the review dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The input file could not be opened.
    #[error("failed to open {path}: {source}")]
    Open {
        /// Path that was being opened.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The header row could not be read.
    #[error("failed to read CSV header: {0}")]
    Header(#[source] csv::Error),

    /// One or more required columns are absent from the header row.
    ///
    /// Detected before any row is parsed; no analysis runs after this.
    #[error("missing required columns: {}", columns.join(", "))]
    MissingColumns {
        /// The required column names that were not found.
        columns: Vec<String>,
    },

    /// A data row failed to parse (e.g., a missing or non-numeric rating).
    #[error("invalid record on line {line}: {source}")]
    Record {
        /// 1-indexed line number in the input file (header is line 1).
        line: u64,
        /// Underlying CSV/deserialization error.
        source: csv::Error,
    },
}

/// Result type alias using [`DatasetError`].
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Errors that can occur while writing the report artifact.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A directory under the output root could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        /// Directory that was being created.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An output file could not be written.
    #[error("failed to write {path}: {source}")]
    WriteFile {
        /// File that was being written.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`RenderError`].
pub type RenderResult<T> = Result<T, RenderError>;
