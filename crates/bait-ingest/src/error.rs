//! Error types for bait trial data ingestion.

use std::path::PathBuf;
use thiserror::Error;

use bait_model::BaitType;

/// Errors that can occur while discovering or loading observation files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Input Selection Errors ===
    /// No input files were supplied or matched the discovery pattern.
    #[error("no input files to load")]
    EmptyInput,

    /// The discovery pattern could not be compiled.
    #[error("invalid file pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// A column required by one of the semantic roles is absent.
    #[error("required {role} column '{column}' not found in {path}")]
    MissingColumn {
        role: &'static str,
        column: String,
        path: PathBuf,
    },

    /// An interaction value outside the bait type's vocabulary.
    #[error("invalid {bait} interaction '{value}' in column '{column}' at row {row} of {path}")]
    InvalidInteraction {
        bait: BaitType,
        column: String,
        value: String,
        /// 1-based data row (header excluded).
        row: usize,
        path: PathBuf,
    },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl IngestError {
    /// Returns true for failures on a located file: missing, unreadable,
    /// malformed, or lacking required columns.
    pub fn is_data_load_error(&self) -> bool {
        !matches!(self, Self::EmptyInput | Self::InvalidPattern { .. })
    }
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
