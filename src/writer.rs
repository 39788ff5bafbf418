//! Archive writer: orchestrates per-entry header + compressed payload + CRC,
//! then the central directory, then the end record, then back-patches the
//! local headers now that compressed sizes and CRCs are known.
//!
//! This keeps `s-zip`'s streaming-writer shape (a `CrcCountingWriter`
//! wrapped by a `DeflateEncoder`, a placeholder header written before the
//! body, a `Vec` of finished entries consumed when the trailer is emitted)
//! but swaps the trailer strategy: instead of a data-descriptor after each
//! entry body, it reopens the file once the body stream is complete and
//! seeks back to each local header, as `spec.md` §4.6/§9 specifies for
//! maximum extractor compatibility.

use crate::crc_reader::CrcTappingReader;
use crate::deflate::EntryCompressor;
use crate::error::{Result, ZipError};
use crate::records::{
    checked_u32, CentralDirectoryHeader, CompressionMethod, EndOfCentralDirectoryRecord,
    LocalFileHeader,
};
use crate::scanner::FileEntry;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::Path;

/// What the writer records about an entry once its body has been streamed,
/// for use when the central directory and back-patch pass run.
struct WrittenEntry {
    archive_path: String,
    file_offset: u64,
    crc32: u32,
    compressed_size: u32,
    uncompressed_size: u32,
}

/// Creates `archive_path` (truncating it if it exists) containing every file
/// in `entries`, in order, per `spec.md` §4.6.
pub fn create_archive(archive_path: &Path, entries: &[FileEntry]) -> Result<()> {
    let mut written = Vec::with_capacity(entries.len());

    {
        let output = File::create(archive_path)?;
        let mut output = BufWriter::new(output);
        let mut current_offset = 0u64;

        for entry in entries {
            log::debug!("adding {}", entry.archive_path);
            let file_offset = current_offset;

            let placeholder =
                LocalFileHeader::placeholder(CompressionMethod::Deflate, &entry.archive_path);
            placeholder.write(&mut output, &entry.source_path)?;
            current_offset += 30 + entry.archive_path.len() as u64;

            let source = File::open(&entry.source_path)?;
            let mut tap = CrcTappingReader::new(source);
            let mut compressor = EntryCompressor::new(&mut output);
            tap.pump_to_eof(&mut compressor)?;
            compressor.finish()?;

            let uncompressed_size = tap.bytes_read();
            let crc32 = tap.finalize();
            let body_end = output.stream_position()?;
            let compressed_size = body_end - (file_offset + 30 + entry.archive_path.len() as u64);
            current_offset = body_end;

            written.push(WrittenEntry {
                archive_path: entry.archive_path.clone(),
                file_offset,
                crc32,
                compressed_size: checked_u32(&entry.source_path, compressed_size)?,
                uncompressed_size: checked_u32(&entry.source_path, uncompressed_size)?,
            });
        }

        let central_directory_offset = current_offset;
        for entry in &written {
            let header = CentralDirectoryHeader {
                method: CompressionMethod::Deflate,
                crc32: entry.crc32,
                compressed_size: entry.compressed_size,
                uncompressed_size: entry.uncompressed_size,
                local_header_offset: checked_u32(archive_path, entry.file_offset)?,
                name: &entry.archive_path,
            };
            header.write(&mut output, archive_path)?;
            current_offset += header.encoded_len();
        }
        let central_directory_size = current_offset - central_directory_offset;

        let eocd = EndOfCentralDirectoryRecord {
            record_count: u16::try_from(written.len()).map_err(|_| ZipError::SizeOverflow {
                path: archive_path.to_path_buf(),
                size: written.len() as u64,
            })?,
            central_directory_size: checked_u32(archive_path, central_directory_size)?,
            central_directory_offset: checked_u32(archive_path, central_directory_offset)?,
        };
        eocd.write(&mut output)?;
        output.flush()?;
    }

    back_patch_local_headers(archive_path, &written)?;
    log::debug!(
        "wrote {} entries to {}",
        written.len(),
        archive_path.display()
    );
    Ok(())
}

/// Reopens the archive for read-write and rewrites the 12 bytes of
/// CRC/compressed-size/uncompressed-size in each local header, now that the
/// real values are known. The name is never rewritten because it never
/// changed.
fn back_patch_local_headers(archive_path: &Path, written: &[WrittenEntry]) -> Result<()> {
    let mut file = OpenOptions::new().write(true).open(archive_path)?;
    for entry in written {
        let patched = LocalFileHeader {
            method: CompressionMethod::Deflate,
            crc32: entry.crc32,
            compressed_size: entry.compressed_size,
            uncompressed_size: entry.uncompressed_size,
            name: &entry.archive_path,
        };
        file.seek(SeekFrom::Start(
            entry.file_offset + LocalFileHeader::PATCH_OFFSET,
        ))?;
        patched.write_patch(&mut file)?;
    }
    file.flush()?;
    Ok(())
}
