//! Input file discovery by glob-style file name pattern.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{IngestError, Result};

/// File name pattern used when none is configured.
pub const DEFAULT_FILE_PATTERN: &str = "kakapo*.csv";

/// Compiles a glob-style file name pattern (`*` and `?` wildcards) into an
/// anchored, case-sensitive regex.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    let mut source = String::with_capacity(pattern.len() + 8);
    source.push('^');
    for ch in pattern.chars() {
        match ch {
            '*' => source.push_str(".*"),
            '?' => source.push('.'),
            other => source.push_str(&regex::escape(&other.to_string())),
        }
    }
    source.push('$');
    Regex::new(&source).map_err(|e| IngestError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

/// Lists the files in `dir` whose names match `pattern`.
///
/// Not recursive. Returns files sorted by filename.
pub fn discover_input_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let matcher = compile_pattern(pattern)?;

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| matcher.is_match(name));

        if matches {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::debug!(
        dir = %dir.display(),
        pattern,
        count = files.len(),
        "Discovered input files"
    );

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        for name in &[
            "kakapo_week2.csv",
            "kakapo_week1.csv",
            "Kakapo_upper.csv",
            "notes.csv",
            "kakapo_week1.csv.bak",
        ] {
            let path = dir.path().join(name);
            std::fs::write(&path, "header\ndata").unwrap();
        }
        std::fs::create_dir(dir.path().join("kakapo_dir.csv")).unwrap();

        dir
    }

    #[test]
    fn test_discover_matches_prefix_sorted() {
        let dir = create_test_dir();
        let files = discover_input_files(dir.path(), DEFAULT_FILE_PATTERN).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["kakapo_week1.csv", "kakapo_week2.csv"]);
    }

    #[test]
    fn test_discover_question_mark_wildcard() {
        let dir = create_test_dir();
        let files = discover_input_files(dir.path(), "kakapo_week?.csv").unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_pattern_escapes_regex_metacharacters() {
        let matcher = compile_pattern("data(1).csv").unwrap();
        assert!(matcher.is_match("data(1).csv"));
        assert!(!matcher.is_match("data1xcsv"));
    }

    #[test]
    fn test_discover_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let result = discover_input_files(&missing, DEFAULT_FILE_PATTERN);
        assert!(matches!(result, Err(IngestError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_discover_no_matches_is_empty() {
        let dir = TempDir::new().unwrap();
        let files = discover_input_files(dir.path(), DEFAULT_FILE_PATTERN).unwrap();
        assert!(files.is_empty());
    }
}
