//! Line-oriented file I/O for the inventory store
//!
//! The inventory file is a plain comma-delimited text table, so all reads
//! and writes happen at line granularity. File handles are opened per call
//! and released on return; nothing is held across prompts.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{InventoryError, InventoryResult};

/// Read every line of a file, in order
///
/// A missing file is the distinct [`InventoryError::FileNotFound`]
/// condition so callers can report it and continue with an empty store.
pub fn read_lines<P: AsRef<Path>>(path: P) -> InventoryResult<Vec<String>> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            InventoryError::FileNotFound(path.display().to_string())
        } else {
            InventoryError::Io(format!("Failed to open {}: {}", path.display(), e))
        }
    })?;

    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line =
            line.map_err(|e| InventoryError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        lines.push(line);
    }

    Ok(lines)
}

/// Append a single line to a file, creating it if absent
pub fn append_line<P: AsRef<Path>>(path: P, line: &str) -> InventoryResult<()> {
    let path = path.as_ref();

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| InventoryError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    writeln!(file, "{}", line)
        .map_err(|e| InventoryError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    file.flush()
        .map_err(|e| InventoryError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Rewrite a file from a full set of lines, truncating previous content
pub fn write_lines<P: AsRef<Path>>(path: P, lines: &[String]) -> InventoryResult<()> {
    let path = path.as_ref();

    let file = File::create(path)
        .map_err(|e| InventoryError::Io(format!("Failed to create {}: {}", path.display(), e)))?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line)
            .map_err(|e| InventoryError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
    }

    writer
        .flush()
        .map_err(|e| InventoryError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_lines_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_lines(temp_dir.path().join("nope.txt")).unwrap_err();
        assert!(err.is_file_not_found());
    }

    #[test]
    fn test_append_then_read_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lines.txt");

        append_line(&path, "first").unwrap();
        append_line(&path, "second").unwrap();

        assert_eq!(read_lines(&path).unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_write_lines_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lines.txt");

        append_line(&path, "old content that is quite long").unwrap();
        write_lines(&path, &["short".to_string()]).unwrap();

        assert_eq!(read_lines(&path).unwrap(), vec!["short"]);
    }
}
