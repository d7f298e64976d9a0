//! Directory scanning functionality
//!
//! This module contains functions for listing the entries of a directory
//! that match a glob mask.

use std::path::{Path, PathBuf};

use glob::{glob, Pattern};
use log::debug;

use crate::errors::{file_operation_error, invalid_filename_error, mask_error, Result};

/// Lists the entries of `directory` whose names match `mask`
///
/// The search is not recursive and does not filter by entry type: files and
/// directories alike are returned. The directory part is escaped, so only the
/// mask is interpreted as a pattern. Entries come back in listing order.
///
/// # Arguments
/// * `directory` - The directory to scan
/// * `mask` - Glob pattern such as `*.txt`
///
/// # Errors
/// * Returns `InvalidMask` if the mask is not a valid pattern
/// * Returns a file operation error if an entry cannot be read
pub fn scan_directory(directory: &Path, mask: &str) -> Result<Vec<PathBuf>> {
    debug!("Scanning directory: {}", directory.display());

    let directory_str = directory
        .to_str()
        .ok_or_else(|| invalid_filename_error(directory.to_path_buf()))?;
    let full_pattern = Path::new(&Pattern::escape(directory_str)).join(mask);
    let full_pattern = full_pattern
        .to_str()
        .ok_or_else(|| invalid_filename_error(full_pattern.clone()))?;

    let entries = glob(full_pattern).map_err(|e| mask_error(e, mask))?;

    let files: Vec<PathBuf> = entries
        .map(|entry| {
            entry.map_err(|e| {
                let path = e.path().to_path_buf();
                file_operation_error(e.into_error(), path, "access")
            })
        })
        .collect::<Result<Vec<PathBuf>>>()?;

    debug!("Found {} input files by mask {:?}", files.len(), mask);

    Ok(files)
}
