//! Writes a ZIP using the library and calls `unzip -t`/`unzip -d` against it
//! to verify third-party compatibility. Skips if `unzip` is not present.

use pkzip::scanner::FileEntry;
use pkzip::writer::create_archive;
use std::process::Command;
use tempfile::tempdir;

fn unzip_available() -> bool {
    Command::new("unzip").arg("-v").output().is_ok()
}

#[test]
fn unzip_accepts_a_freshly_written_archive() {
    if !unzip_available() {
        eprintln!("skipping test: `unzip` not found");
        return;
    }

    let dir = tempdir().unwrap();
    let hello_path = dir.path().join("hello.txt");
    let big_path = dir.path().join("big.bin");
    std::fs::write(&hello_path, b"hello from test").unwrap();
    std::fs::write(&big_path, vec![0u8; 1024 * 1024]).unwrap();

    let entries = vec![
        FileEntry {
            source_path: hello_path,
            archive_path: "hello.txt".to_string(),
            uncompressed_size: 15,
        },
        FileEntry {
            source_path: big_path,
            archive_path: "big.bin".to_string(),
            uncompressed_size: 1024 * 1024,
        },
    ];

    let zip_path = dir.path().join("compat.zip");
    create_archive(&zip_path, &entries).unwrap();

    let output = Command::new("unzip")
        .arg("-t")
        .arg(&zip_path)
        .output()
        .expect("failed to run unzip");

    assert!(
        output.status.success(),
        "unzip reported failure: {} {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn unzip_extracts_a_nested_directory_structure_byte_for_byte() {
    if !unzip_available() {
        eprintln!("skipping test: `unzip` not found");
        return;
    }

    let dir = tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("dir1/subdir")).unwrap();
    std::fs::create_dir_all(dir.path().join("dir2")).unwrap();
    std::fs::write(dir.path().join("root.txt"), b"root").unwrap();
    std::fs::write(dir.path().join("dir1/file1.txt"), b"file1").unwrap();
    std::fs::write(dir.path().join("dir1/subdir/deep.txt"), b"deep").unwrap();
    std::fs::write(dir.path().join("dir2/file2.txt"), b"file2").unwrap();

    let entries = pkzip::scanner::scan(&[dir.path().to_path_buf()]).unwrap();
    assert_eq!(entries.len(), 4);

    let zip_path = dir.path().join("nested.zip");
    create_archive(&zip_path, &entries).unwrap();

    let extract_dir = tempdir().unwrap();
    let output = Command::new("unzip")
        .arg("-d")
        .arg(extract_dir.path())
        .arg(&zip_path)
        .output()
        .expect("failed to run unzip");
    assert!(output.status.success());

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
