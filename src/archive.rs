//! Source packaging for zip-deploy
//!
//! Compresses the whole source directory, recursively, into a single zip
//! archive under the platform temp dir. The archive name is derived from the
//! final (randomized) app name so re-runs for the same app overwrite the same
//! path; a stale archive at that path is removed first.

use std::fs::File;
use std::io::{self, Seek, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::ZipWriter;

use crate::error::PackageError;

/// Deterministic archive location for an app name
pub fn archive_path(app_name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{}.zip", app_name))
}

/// Zip the contents of `src_dir` into `dest`, overwriting any stale archive.
///
/// Entry paths are stored relative to `src_dir`, so the hosting platform
/// extracts the app's files at its content root rather than under a
/// wrapping directory.
pub fn pack_directory(src_dir: &Path, dest: &Path) -> Result<(), PackageError> {
    if dest.exists() {
        debug!("Removing stale archive at {}", dest.display());
        std::fs::remove_file(dest)?;
    }

    let file = File::create(dest)?;
    write_archive(file, src_dir)?;

    Ok(())
}

fn write_archive<W: Write + Seek>(file: W, src_dir: &Path) -> Result<W, PackageError> {
    let mut writer = ZipWriter::new(file);

    for entry in WalkDir::new(src_dir) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(src_dir)
            .map_err(|_| PackageError::OutsideSource {
                path: entry.path().display().to_string(),
            })?;

        let Some(name) = relative.to_str() else {
            return Err(PackageError::NonUnicodePath {
                path: entry.path().display().to_string(),
            });
        };

        if name.is_empty() {
            // the source root itself
            continue;
        }

        if entry.file_type().is_dir() {
            writer.add_directory(name, FileOptions::default())?;
        } else if entry.file_type().is_file() {
            writer.start_file(name, FileOptions::default())?;
            io::copy(&mut File::open(entry.path())?, &mut writer)?;
        }
    }

    Ok(writer.finish()?)
}
