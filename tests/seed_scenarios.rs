//! Integration tests for the concrete seed scenarios enumerated for the
//! archive writer: single file, empty file, binary file, large file,
//! nested directory structure, and rejection of an invalid archive.
//! Extraction is checked against the system `unzip` where available.

use pkzip::scanner::FileEntry;
use pkzip::writer::create_archive;
use std::process::Command;
use tempfile::tempdir;

fn unzip_available() -> bool {
    Command::new("unzip").arg("-v").output().is_ok()
}

fn write_single(
    dir: &tempfile::TempDir,
    name: &str,
    archive_path: &str,
    data: &[u8],
) -> FileEntry {
    let source_path = dir.path().join(name);
    std::fs::write(&source_path, data).unwrap();
    FileEntry {
        source_path,
        archive_path: archive_path.to_string(),
        uncompressed_size: data.len() as u64,
    }
}

fn lcg_bytes(seed: u32, count: usize) -> Vec<u8> {
    let mut state = seed;
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        state = state.wrapping_mul(1103515245).wrapping_add(12345);
        out.push((state >> 16) as u8);
    }
    out
}

#[test]
fn single_text_file_round_trips_exactly() {
    let dir = tempdir().unwrap();
    let contents = b"Hello, this is a test file!\nWith multiple lines.\n";
    assert_eq!(contents.len(), 49);
    let entry = write_single(&dir, "test.txt", "test.txt", contents);

    let zip_path = dir.path().join("single.zip");
    create_archive(&zip_path, &[entry]).unwrap();

    if !unzip_available() {
        eprintln!("skipping extraction check: `unzip` not found");
        return;
    }
    let extract_dir = tempdir().unwrap();
    let status = Command::new("unzip")
        .arg("-d")
        .arg(extract_dir.path())
        .arg(&zip_path)
        .status()
        .unwrap();
    assert!(status.success());
    let restored = std::fs::read(extract_dir.path().join("test.txt")).unwrap();
    assert_eq!(restored, contents);
}

#[test]
fn empty_file_has_zero_crc_and_extracts_empty() {
    let dir = tempdir().unwrap();
    let entry = write_single(&dir, "empty", "empty", b"");

    let zip_path = dir.path().join("empty.zip");
    create_archive(&zip_path, &[entry]).unwrap();

    if !unzip_available() {
        eprintln!("skipping extraction check: `unzip` not found");
        return;
    }
    let extract_dir = tempdir().unwrap();
    let status = Command::new("unzip")
        .arg("-d")
        .arg(extract_dir.path())
        .arg(&zip_path)
        .status()
        .unwrap();
    assert!(status.success());
    let restored = std::fs::read(extract_dir.path().join("empty")).unwrap();
    assert!(restored.is_empty());
}

#[test]
fn binary_file_from_seeded_prng_round_trips() {
    let dir = tempdir().unwrap();
    let contents = lcg_bytes(0x12345678, 5000);
    let entry = write_single(&dir, "binary.dat", "binary.dat", &contents);

    let zip_path = dir.path().join("binary.zip");
    create_archive(&zip_path, &[entry]).unwrap();

    if !unzip_available() {
        eprintln!("skipping extraction check: `unzip` not found");
        return;
    }
    let extract_dir = tempdir().unwrap();
    let status = Command::new("unzip")
        .arg("-d")
        .arg(extract_dir.path())
        .arg(&zip_path)
        .status()
        .unwrap();
    assert!(status.success());
    let restored = std::fs::read(extract_dir.path().join("binary.dat")).unwrap();
    assert_eq!(restored, contents);
}

#[test]
fn large_repetitive_file_compresses_well_and_round_trips() {
    let dir = tempdir().unwrap();
    let size = 5 * 1024 * 1024;
    let contents: Vec<u8> = (0..size).map(|i| (i % 256) as u8).collect();
    let entry = write_single(&dir, "large.bin", "large.bin", &contents);

    let zip_path = dir.path().join("large.zip");
    create_archive(&zip_path, std::slice::from_ref(&entry)).unwrap();

    let archive_size = std::fs::metadata(&zip_path).unwrap().len();
    assert!(
        (archive_size as usize) < size / 2,
        "expected substantial compression of a repetitive file, got {archive_size} bytes for {size} input bytes"
    );

    if !unzip_available() {
        eprintln!("skipping extraction check: `unzip` not found");
        return;
    }
    let extract_dir = tempdir().unwrap();
    let status = Command::new("unzip")
        .arg("-d")
        .arg(extract_dir.path())
        .arg(&zip_path)
        .status()
        .unwrap();
    assert!(status.success());
    let restored = std::fs::read(extract_dir.path().join("large.bin")).unwrap();
    assert_eq!(restored, contents);
}

#[test]
fn nested_directory_structure_round_trips() {
    let dir = tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("dir1/subdir")).unwrap();
    std::fs::create_dir_all(dir.path().join("dir2")).unwrap();
    std::fs::write(dir.path().join("root.txt"), b"root").unwrap();
    std::fs::write(dir.path().join("dir1/file1.txt"), b"file1").unwrap();
    std::fs::write(dir.path().join("dir1/subdir/deep.txt"), b"deep").unwrap();
    std::fs::write(dir.path().join("dir2/file2.txt"), b"file2").unwrap();

    let entries = pkzip::scanner::scan(&[dir.path().to_path_buf()]).unwrap();
    assert_eq!(entries.len(), 4);
    for entry in &entries {
        assert!(entry.archive_path.contains('/') || entry.archive_path == "root.txt");
        assert!(!entry.archive_path.contains('\\'));
    }

    let zip_path = dir.path().join("nested.zip");
    create_archive(&zip_path, &entries).unwrap();

    if !unzip_available() {
        eprintln!("skipping extraction check: `unzip` not found");
        return;
    }
    let extract_dir = tempdir().unwrap();
    let status = Command::new("unzip")
        .arg("-d")
        .arg(extract_dir.path())
        .arg(&zip_path)
        .status()
        .unwrap();
    assert!(status.success());
    for (relative, contents) in [
        ("root.txt", "root"),
        ("dir1/file1.txt", "file1"),
        ("dir1/subdir/deep.txt", "deep"),
        ("dir2/file2.txt", "file2"),
    ] {
        let restored = std::fs::read_to_string(extract_dir.path().join(relative)).unwrap();
        assert_eq!(restored, contents);
    }
}

#[test]
fn invalid_archive_is_rejected_by_the_extractor_with_nonzero_exit() {
    if !unzip_available() {
        eprintln!("skipping test: `unzip` not found");
        return;
    }

    let dir = tempdir().unwrap();
    let bogus_path = dir.path().join("bogus.zip");
    std::fs::write(&bogus_path, b"This is not a valid zip file!").unwrap();

    let extract_dir = tempdir().unwrap();
    let status = Command::new("unzip")
        .arg("-d")
        .arg(extract_dir.path())
        .arg(&bogus_path)
        .status()
        .unwrap();
    assert!(!status.success());
}
