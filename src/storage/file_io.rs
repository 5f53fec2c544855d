//! Line-based file I/O
//!
//! The record stores are flat delimited text files, one record per line.
//! This module is the only place that touches the filesystem: everything
//! above it works in terms of read/write/append of whole lines.
//!
//! Full-file writes go through a temp file and rename so a failed write
//! leaves the previous contents intact.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::PocketbookError;

/// Read all lines of a file. A missing file reads as empty.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, PocketbookError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| PocketbookError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| {
            PocketbookError::Storage(format!("Failed to read {}: {}", path.display(), e))
        })?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Overwrite a file with the given lines (write to temp, then rename)
pub fn write_all_lines<P, S>(path: P, lines: &[S]) -> Result<(), PocketbookError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            PocketbookError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory (important for atomic rename)
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| PocketbookError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())
            .map_err(|e| PocketbookError::Storage(format!("Failed to write data: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| PocketbookError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| PocketbookError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        PocketbookError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Append a single line to a file, creating it if needed
pub fn append_line<P: AsRef<Path>>(path: P, line: &str) -> Result<(), PocketbookError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            PocketbookError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| PocketbookError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", line)
        .map_err(|e| PocketbookError::Storage(format!("Failed to append data: {}", e)))?;
    writer
        .flush()
        .map_err(|e| PocketbookError::Storage(format!("Failed to flush data: {}", e)))?;

    Ok(())
}

/// Check whether a record file exists
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.csv");

        assert!(read_lines(&path).unwrap().is_empty());
        assert!(!exists(&path));
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.csv");

        let lines = vec!["a,1".to_string(), "b,2".to_string()];
        write_all_lines(&path, &lines).unwrap();

        assert_eq!(read_lines(&path).unwrap(), lines);
    }

    #[test]
    fn test_overwrite_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.csv");

        write_all_lines(&path, &["a,1", "b,2", "c,3"]).unwrap();
        write_all_lines(&path, &["only,1"]).unwrap();

        assert_eq!(read_lines(&path).unwrap(), vec!["only,1"]);
    }

    #[test]
    fn test_append() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.csv");

        append_line(&path, "a,1").unwrap();
        append_line(&path, "b,2").unwrap();

        assert_eq!(read_lines(&path).unwrap(), vec!["a,1", "b,2"]);
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.csv");
        let temp_path = temp_dir.path().join("records.csv.tmp");

        write_all_lines(&path, &["a,1"]).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_blank_lines_skipped_on_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.csv");

        std::fs::write(&path, "a,1\n\n  \nb,2\n").unwrap();
        assert_eq!(read_lines(&path).unwrap(), vec!["a,1", "b,2"]);
    }
}
