//! Loading observation files into a unified record set.

use std::path::{Path, PathBuf};

use tracing::{debug, info, info_span};

use bait_model::{BaitType, InteractionType, ObservationRecord, RecordSet};

use crate::csv::{frame_headers, read_csv_frame, resolve_column, string_cells};
use crate::error::{IngestError, Result};
use crate::roles::ColumnRoles;

/// Reads one observation file.
///
/// All four role columns must be present. Interaction values are parsed
/// against the bait type's vocabulary; anything else fails the load.
pub fn read_observations(path: &Path, roles: &ColumnRoles) -> Result<RecordSet> {
    let df = read_csv_frame(path)?;
    let headers = frame_headers(&df);

    let column_for = |role: &'static str, wanted: &str| -> Result<String> {
        resolve_column(&headers, wanted)
            .map(str::to_string)
            .ok_or_else(|| IngestError::MissingColumn {
                role,
                column: wanted.to_string(),
                path: path.to_path_buf(),
            })
    };
    let subject_col = column_for("subject id", &roles.subject_id)?;
    let station_col = column_for("station path", &roles.station_path)?;
    let cereal_col = column_for("20R interaction", roles.interaction(BaitType::Cereal))?;
    let meat_col = column_for("RMS interaction", roles.interaction(BaitType::Meat))?;

    let subjects = string_cells(&df, &subject_col)?;
    let stations = string_cells(&df, &station_col)?;
    let cereal_values = parse_interactions(
        string_cells(&df, &cereal_col)?,
        BaitType::Cereal,
        &cereal_col,
        path,
    )?;
    let meat_values = parse_interactions(
        string_cells(&df, &meat_col)?,
        BaitType::Meat,
        &meat_col,
        path,
    )?;

    let records: RecordSet = subjects
        .into_iter()
        .zip(stations)
        .zip(cereal_values.into_iter().zip(meat_values))
        .map(|((subject_id, station_path), (cereal, meat))| ObservationRecord {
            subject_id,
            station_path,
            cereal,
            meat,
        })
        .collect();

    debug!(path = %path.display(), rows = records.len(), "Read observation file");
    Ok(records)
}

fn parse_interactions(
    cells: Vec<Option<String>>,
    bait: BaitType,
    column: &str,
    path: &Path,
) -> Result<Vec<Option<InteractionType>>> {
    cells
        .into_iter()
        .enumerate()
        .map(|(idx, cell)| {
            let Some(value) = cell else {
                return Ok(None);
            };
            match value.parse::<InteractionType>() {
                Ok(kind) if bait.allows(kind) => Ok(Some(kind)),
                _ => Err(IngestError::InvalidInteraction {
                    bait,
                    column: column.to_string(),
                    value,
                    row: idx + 1,
                    path: path.to_path_buf(),
                }),
            }
        })
        .collect()
}

/// Concatenates the records of every file in order.
///
/// Row order within a file and file order across `paths` are preserved;
/// nothing is deduplicated. The first failing file aborts the load.
pub fn load_and_merge(paths: &[PathBuf], roles: &ColumnRoles) -> Result<RecordSet> {
    if paths.is_empty() {
        return Err(IngestError::EmptyInput);
    }

    let span = info_span!("load_and_merge", files = paths.len());
    let _guard = span.enter();

    let mut merged = RecordSet::default();
    for path in paths {
        let records = read_observations(path, roles)?;
        merged.extend(records);
    }

    info!(files = paths.len(), records = merged.len(), "Loaded observation records");
    Ok(merged)
}
