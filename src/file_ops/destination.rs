//! Destination handling
//!
//! Prepares the output directory once per run and decides, per input file,
//! whether its mirrored output file may be written.

use std::fs::{self, create_dir};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::errors::{invalid_filename_error, Error, Result};

/// Guarantees that `output` exists and is a directory
///
/// Creation is attempted first and an "already exists" outcome is only
/// accepted when the existing entry is a directory, so there is no window
/// between checking and creating.
///
/// # Errors
/// * `WrongDestinationPath` if something other than a directory is in the way
/// * `CantCreateDestFolder` if the directory cannot be created
pub fn ensure_output_dir(output: &Path) -> Result<()> {
    match create_dir(output) {
        Ok(()) => {
            info!("Result folder {} created", output.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            if output.is_dir() {
                info!("Result folder {} already exists", output.display());
                Ok(())
            } else {
                Err(Error::WrongDestinationPath {
                    path: output.to_path_buf(),
                })
            }
        }
        Err(e) => Err(Error::CantCreateDestFolder {
            source: e,
            path: output.to_path_buf(),
        }),
    }
}

/// Computes `output_dir / <file name of source>`
///
/// Only the base name is kept; the directory structure of the source is not
/// mirrored.
pub fn destination_for(source: &Path, output_dir: &Path) -> Result<PathBuf> {
    let name = source
        .file_name()
        .ok_or_else(|| invalid_filename_error(source.to_path_buf()))?;
    Ok(output_dir.join(name))
}

/// Computes the destination of `source` and checks it may be written
///
/// # Errors
/// * `OutputFileAlreadyExists` if the destination exists and `overwrite` is off
/// * `CantCreateDestFile` if the destination exists and is not a regular file
/// * `SameSourceAndDestination` if writing would truncate the source itself
pub fn resolve_destination(source: &Path, output_dir: &Path, overwrite: bool) -> Result<PathBuf> {
    let destination = destination_for(source, output_dir)?;

    if destination.exists() {
        if !overwrite {
            return Err(Error::OutputFileAlreadyExists { path: destination });
        }
        if !destination.is_file() {
            return Err(Error::CantCreateDestFile { path: destination });
        }
        if same_file(source, &destination) {
            return Err(Error::SameSourceAndDestination { path: destination });
        }
        debug!("Overwriting {}", destination.display());
    }

    Ok(destination)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => false,
    }
}
