//! Recursive two-pass directory-tree equality check.
//!
//! Pass 1 walks `expected` and confirms every entry exists, matches in kind
//! and size, and (for files) matches byte-for-byte, buffered at 4096 bytes
//! per compare. Pass 2 walks `actual` and confirms nothing extra is present.
//! The split catches "missing in actual" (pass 1) and "extra in actual"
//! (pass 2) as distinct failure modes, per `spec.md` §4.7.

use crate::error::{Result, ZipError};
use std::fs;
use std::io::Read;
use std::path::Path;

const COMPARE_BUF_SIZE: usize = 4096;

pub fn assert_trees_equal(expected: &Path, actual: &Path) -> Result<()> {
    compare_pass_one(expected, actual)?;
    compare_pass_two(expected, actual)?;
    Ok(())
}

fn compare_pass_one(expected_dir: &Path, actual_dir: &Path) -> Result<()> {
    for entry in fs::read_dir(expected_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let expected_path = entry.path();
        let actual_path = actual_dir.join(&name);
        let expected_type = entry.file_type()?;

        if expected_type.is_dir() {
            if !actual_path.is_dir() {
                return Err(ZipError::TreeMismatch(format!(
                    "missing directory in extracted tree: {}",
                    actual_path.display()
                )));
            }
            compare_pass_one(&expected_path, &actual_path)?;
        } else if expected_type.is_file() {
            if !actual_path.is_file() {
                return Err(ZipError::TreeMismatch(format!(
                    "missing file in extracted tree: {}",
                    actual_path.display()
                )));
            }
            compare_file_contents(&expected_path, &actual_path)?;
        } else {
            return Err(ZipError::TreeMismatch(format!(
                "unexpected file kind in staged tree: {}",
                expected_path.display()
            )));
        }
    }
    Ok(())
}

fn compare_pass_two(expected_dir: &Path, actual_dir: &Path) -> Result<()> {
    for entry in fs::read_dir(actual_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let expected_path = expected_dir.join(&name);

        if entry.file_type()?.is_dir() {
            if !expected_path.is_dir() {
                return Err(ZipError::TreeMismatch(format!(
                    "extra directory in extracted tree: {}",
                    entry.path().display()
                )));
            }
            compare_pass_two(&expected_path, &entry.path())?;
        } else if !expected_path.is_file() {
            return Err(ZipError::TreeMismatch(format!(
                "extra file in extracted tree: {}",
                entry.path().display()
            )));
        }
    }
    Ok(())
}

fn compare_file_contents(expected_path: &Path, actual_path: &Path) -> Result<()> {
    let expected_len = fs::metadata(expected_path)?.len();
    let actual_len = fs::metadata(actual_path)?.len();
    if expected_len != actual_len {
        return Err(ZipError::TreeMismatch(format!(
            "size mismatch for {}: expected {}, got {}",
            expected_path.display(),
            expected_len,
            actual_len
        )));
    }

    let mut expected_file = fs::File::open(expected_path)?;
    let mut actual_file = fs::File::open(actual_path)?;
    let mut expected_buf = [0u8; COMPARE_BUF_SIZE];
    let mut actual_buf = [0u8; COMPARE_BUF_SIZE];

    loop {
        let expected_n = read_fully(&mut expected_file, &mut expected_buf)?;
        let actual_n = read_fully(&mut actual_file, &mut actual_buf)?;
        if expected_n != actual_n {
            return Err(ZipError::TreeMismatch(format!(
                "unexpected trailing bytes comparing {}",
                expected_path.display()
            )));
        }
        if expected_n == 0 {
            break;
        }
        if expected_buf[..expected_n] != actual_buf[..actual_n] {
            return Err(ZipError::TreeMismatch(format!(
                "content mismatch for {}",
                expected_path.display()
            )));
        }
    }
    Ok(())
}

fn read_fully(file: &mut fs::File, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = file.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
