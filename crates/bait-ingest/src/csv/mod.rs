//! CSV reading utilities.

mod header;
mod reader;

pub use header::resolve_column;
pub use reader::{NULL_TOKENS, frame_headers, normalize_cell, read_csv_frame, string_cells};
