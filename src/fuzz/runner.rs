//! Child-process invocation of the archive writer under test and the
//! system `unzip` extractor.
//!
//! Grounded directly on `s-zip`'s own `tests/unzip_compat.rs`, which already
//! shells out to `unzip -t` via `std::process::Command` to check
//! interoperability; this generalizes that one-shot check into a fuzz loop.

use crate::error::{Result, ZipError};
use std::path::Path;
use std::process::Command;

/// Runs the archive writer binary (`zip_bin`) against `stage_dir`, producing
/// `archive_path`.
pub fn run_zip(zip_bin: &Path, archive_path: &Path, stage_dir: &Path) -> Result<()> {
    run_child("zip", Command::new(zip_bin).arg(archive_path).arg(stage_dir))
}

/// Runs the system `unzip` to extract `archive_path` into `dest_dir`.
pub fn run_unzip(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    run_child(
        "unzip",
        Command::new("unzip").arg("-d").arg(dest_dir).arg(archive_path),
    )
}

fn run_child(program: &'static str, command: &mut Command) -> Result<()> {
    let output = command.output()?;
    if !output.status.success() {
        return Err(ZipError::FuzzChildFailed {
            program,
            detail: format!(
                "exit status {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_surfaces_as_fuzz_child_failure() {
        let err = run_zip(
            Path::new("/nonexistent/zip-binary-that-does-not-exist"),
            Path::new("/tmp/whatever.zip"),
            Path::new("/tmp"),
        )
        .unwrap_err();
        assert!(matches!(err, ZipError::Io(_)));
    }
}
