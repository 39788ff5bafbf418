//! # pkzip: a minimal streaming ZIP archive writer
//!
//! `pkzip` walks a filesystem tree, DEFLATE-compresses each file while
//! tapping its CRC-32, and emits a standards-compliant ZIP stream with no
//! intermediate buffering of whole files. Local file headers are written as
//! zeroed placeholders ahead of each entry's compressed body and back-patched
//! once the true CRC and compressed size are known.
//!
//! This crate only writes archives. Reading an existing ZIP is out of
//! scope; see `zipfuzz`, which drives this writer against the system
//! `unzip` to verify round-trip equality.
//!
//! ## Quick start
//!
//! ```no_run
//! use pkzip::scanner::scan;
//! use pkzip::writer::create_archive;
//! use std::path::PathBuf;
//!
//! let entries = scan(&[PathBuf::from("src")])?;
//! create_archive(&PathBuf::from("out.zip"), &entries)?;
//! # Ok::<(), pkzip::ZipError>(())
//! ```

pub mod crc_reader;
pub mod deflate;
pub mod error;
pub mod filename;
pub mod fuzz;
pub mod records;
pub mod scanner;
pub mod writer;

pub use error::{Result, ZipError};
