//! CSV file reading through Polars.

use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Cell values read as missing, in addition to empty cells.
pub const NULL_TOKENS: &[&str] = &[
    "NA", "N/A", "n/a", "#NA", "#N/A", "#N/A N/A", "<NA>", "NaN", "-NaN", "nan", "-nan", "null",
    "NULL", "None", "1.#IND", "1.#QNAN", "-1.#IND", "-1.#QNAN",
];

/// Converts a raw cell into an optional trimmed value.
pub fn normalize_cell(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim().trim_matches('\u{feff}').trim();
    if trimmed.is_empty() || NULL_TOKENS.contains(&trimmed) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Ensure the file exists and is a regular file before handing it to Polars.
fn check_readable(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    if !metadata.is_file() {
        return Err(IngestError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::other("not a regular file"),
        });
    }
    if metadata.len() == 0 {
        return Err(IngestError::CsvParse {
            path: path.to_path_buf(),
            message: "file is empty".to_string(),
        });
    }
    Ok(())
}

/// Reads a CSV file with a single header row into a DataFrame.
///
/// Every column is read as a string; type interpretation happens per role.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    check_readable(path)?;

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Returns the DataFrame's column names as read from the file.
pub fn frame_headers(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}

/// Extracts a column as optional strings, applying [`normalize_cell`].
pub fn string_cells(df: &DataFrame, column: &str) -> Result<Vec<Option<String>>> {
    let col = df.column(column)?;
    let str_col = col.cast(&DataType::String)?;
    let chunked = str_col.str()?;
    Ok(chunked.iter().map(normalize_cell).collect())
}
