//! Bait trial data ingestion.
//!
//! Finds observation files by file name pattern, reads them with Polars and
//! maps their columns onto the four semantic roles the report needs.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use bait_ingest::{ColumnRoles, DEFAULT_FILE_PATTERN, discover_input_files, load_and_merge};
//!
//! let files = discover_input_files(Path::new("data"), DEFAULT_FILE_PATTERN)?;
//! let records = load_and_merge(&files, &ColumnRoles::default())?;
//! ```

mod csv;
mod discovery;
mod error;
mod loader;
mod roles;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{NULL_TOKENS, normalize_cell, read_csv_frame, resolve_column};

// === File Discovery ===
pub use discovery::{DEFAULT_FILE_PATTERN, compile_pattern, discover_input_files};

// === Loading ===
pub use loader::{load_and_merge, read_observations};
pub use roles::ColumnRoles;
