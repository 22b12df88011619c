//! File I/O utilities for the line-oriented ledger file
//!
//! Provides whole-file reads, append-mode writes for create, and the
//! temp-file rewrite used by update and delete.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::BudgetError;

/// Read every line of the file, in order
///
/// Line endings are stripped; one returned string corresponds to one
/// record line.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, BudgetError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| {
        BudgetError::FileUnavailable(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line
            .map_err(|e| BudgetError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        lines.push(line);
    }

    Ok(lines)
}

/// Append a single line to the file, creating it if absent
pub fn append_line<P: AsRef<Path>>(path: P, line: &str) -> Result<(), BudgetError> {
    let path = path.as_ref();

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            BudgetError::FileUnavailable(format!(
                "Failed to open {} for appending: {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", line)
        .map_err(|e| BudgetError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    file.flush()
        .map_err(|e| BudgetError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Replace the file's contents with the given lines via a temp-file swap
///
/// Writes every line to a newly created temp file in the same directory,
/// removes the original, then renames the temp file into place. The on-disk
/// file is always a complete snapshot, never a partial one. A crash between
/// the remove and the rename loses the original; that window is a documented
/// limitation of the rewrite strategy.
pub fn swap_in_lines<P: AsRef<Path>>(path: P, lines: &[String]) -> Result<(), BudgetError> {
    let path = path.as_ref();

    // Temp file in the same directory, so the rename stays on one filesystem
    let temp_path = path.with_extension("txt.tmp");

    let file = File::create(&temp_path).map_err(|e| {
        BudgetError::FileUnavailable(format!(
            "Failed to create temp file {}: {}",
            temp_path.display(),
            e
        ))
    })?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line)
            .map_err(|e| BudgetError::Io(format!("Failed to write temp file: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| BudgetError::Io(format!("Failed to flush temp file: {}", e)))?;

    // Sync to disk before the swap
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| BudgetError::Io(format!("Failed to sync temp file: {}", e)))?;

    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(BudgetError::Io(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            )))
        }
    }

    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        BudgetError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
