//! Error types for pkzip

use std::io;
use std::path::PathBuf;

/// Result type for pkzip operations
pub type Result<T> = std::result::Result<T, ZipError>;

/// Error types that can occur while scanning, compressing, or writing an archive,
/// or while driving the fuzz harness.
#[derive(Debug)]
pub enum ZipError {
    /// I/O error
    Io(io::Error),
    /// A scanned path was neither a regular file nor a directory (symlink, device,
    /// pipe, socket, ...).
    UnsupportedFileKind(PathBuf),
    /// An archive path failed the filename policy in `filename.rs`.
    UnsafeFileName(String),
    /// A size or offset did not fit in the 32-bit ZIP field it was destined for.
    SizeOverflow { path: PathBuf, size: u64 },
    /// Malformed CLI invocation (unknown flag, wrong arity).
    CliUsage(String),
    /// A fuzz harness child process (the archive writer or the extractor) exited
    /// non-zero or was killed by a signal.
    FuzzChildFailed { program: &'static str, detail: String },
    /// The staged and extracted directory trees differ.
    TreeMismatch(String),
}

impl std::fmt::Display for ZipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZipError::Io(e) => write!(f, "I/O error: {}", e),
            ZipError::UnsupportedFileKind(path) => {
                write!(f, "unsupported file kind: {}", path.display())
            }
            ZipError::UnsafeFileName(name) => write!(f, "unsafe archive filename: {}", name),
            ZipError::SizeOverflow { path, size } => write!(
                f,
                "size {} of {} exceeds the 32-bit field this writer emits (no ZIP64 support)",
                size,
                path.display()
            ),
            ZipError::CliUsage(msg) => write!(f, "{}", msg),
            ZipError::FuzzChildFailed { program, detail } => {
                write!(f, "{} failed: {}", program, detail)
            }
            ZipError::TreeMismatch(msg) => write!(f, "tree mismatch: {}", msg),
        }
    }
}

impl std::error::Error for ZipError {}

impl From<io::Error> for ZipError {
    fn from(err: io::Error) -> Self {
        ZipError::Io(err)
    }
}
