//! Tree scanner: expands CLI paths into a flat list of archive entries.

use crate::error::{Result, ZipError};
use crate::filename::validate_archive_path;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One file destined for the archive: where to read it from, and the name
/// it will carry inside the archive.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub source_path: PathBuf,
    pub archive_path: String,
    pub uncompressed_size: u64,
}

/// Scans every CLI path argument, expanding directories recursively.
///
/// A regular file argument becomes one entry whose `archive_path` is the
/// verbatim argument string. A directory argument is walked with `walkdir`;
/// each regular file found becomes an entry whose `archive_path` is the
/// `/`-joined path relative to that directory's root. Plain directories are
/// not emitted. Anything else (symlink, socket, FIFO, device) aborts the
/// whole scan.
pub fn scan(paths: &[PathBuf]) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();
    for path in paths {
        let metadata = std::fs::symlink_metadata(path)?;
        if metadata.is_file() {
            let archive_path = path.to_string_lossy().into_owned();
            validate_archive_path(&archive_path)?;
            entries.push(FileEntry {
                source_path: path.clone(),
                archive_path,
                uncompressed_size: metadata.len(),
            });
        } else if metadata.is_dir() {
            scan_directory(path, &mut entries)?;
        } else {
            return Err(ZipError::UnsupportedFileKind(path.clone()));
        }
    }
    Ok(entries)
}

fn scan_directory(root: &Path, entries: &mut Vec<FileEntry>) -> Result<()> {
    for walk_entry in WalkDir::new(root).into_iter() {
        let walk_entry = walk_entry.map_err(|e| {
            ZipError::Io(e.into_io_error().unwrap_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::Other, "directory walk failed")
            }))
        })?;

        let file_type = walk_entry.file_type();
        if file_type.is_dir() {
            continue;
        }
        if !file_type.is_file() {
            return Err(ZipError::UnsupportedFileKind(walk_entry.path().to_path_buf()));
        }

        let relative = walk_entry
            .path()
            .strip_prefix(root)
            .unwrap_or_else(|_| walk_entry.path());
        let archive_path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        validate_archive_path(&archive_path)?;

        entries.push(FileEntry {
            source_path: walk_entry.path().to_path_buf(),
            uncompressed_size: walk_entry.metadata()?.len(),
            archive_path,
        });
    }
    Ok(())
}
