//! Binary ZIP record codec.
//!
//! Each struct here encodes its wire layout as packed little-endian bytes,
//! the way `s-zip`'s writer hand-rolls its headers with `write_all(&[..])`
//! and `write_all(&x.to_le_bytes())`, rather than deriving a layout from a
//! byteorder-based struct reader. There is no decoding here: this crate
//! never reads back an archive it has written, so only `write` is needed.

use crate::error::{Result, ZipError};
use std::io::Write;
use std::path::Path;

const LOCAL_FILE_HEADER_SIGNATURE: u32 = 0x0403_4b50;
const CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x0201_4b50;
const END_OF_CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x0605_4b50;

/// Compression method stored in the `method` field of local and central headers.
///
/// This writer only ever emits `Deflate`; `Store` exists so the placeholder
/// header and the back-patched header share one code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    Deflate,
}

impl CompressionMethod {
    const fn field(self) -> u16 {
        match self {
            CompressionMethod::Deflate => 8,
        }
    }
}

fn to_u32_field(path: &Path, size: u64) -> Result<u32> {
    u32::try_from(size).map_err(|_| ZipError::SizeOverflow {
        path: path.to_path_buf(),
        size,
    })
}

fn archive_name_len(path: &Path, name: &str) -> Result<u16> {
    u16::try_from(name.len()).map_err(|_| ZipError::SizeOverflow {
        path: path.to_path_buf(),
        size: name.len() as u64,
    })
}

/// Local File Header: signature + 26 fixed bytes + name. Written twice per
/// entry: once as an all-zero placeholder, once back-patched with the real
/// CRC and sizes.
pub struct LocalFileHeader<'a> {
    pub method: CompressionMethod,
    pub crc32: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub name: &'a str,
}

impl<'a> LocalFileHeader<'a> {
    /// A header with all data fields zeroed, used before the entry body is
    /// known. Same byte length as the final header, so back-patching is a
    /// pure overwrite, never a shift.
    pub fn placeholder(method: CompressionMethod, name: &'a str) -> Self {
        Self {
            method,
            crc32: 0,
            compressed_size: 0,
            uncompressed_size: 0,
            name,
        }
    }

    pub fn write<W: Write>(&self, w: &mut W, source: &Path) -> Result<()> {
        w.write_all(&LOCAL_FILE_HEADER_SIGNATURE.to_le_bytes())?;
        w.write_all(&10u16.to_le_bytes())?; // version needed to extract
        w.write_all(&0u16.to_le_bytes())?; // general purpose bit flag
        w.write_all(&self.method.field().to_le_bytes())?;
        w.write_all(&0u16.to_le_bytes())?; // mod time
        w.write_all(&0u16.to_le_bytes())?; // mod date
        w.write_all(&self.crc32.to_le_bytes())?;
        w.write_all(&self.compressed_size.to_le_bytes())?;
        w.write_all(&self.uncompressed_size.to_le_bytes())?;
        w.write_all(&archive_name_len(source, self.name)?.to_le_bytes())?;
        w.write_all(&0u16.to_le_bytes())?; // extra field length
        w.write_all(self.name.as_bytes())?;
        Ok(())
    }

    /// Only the 12 bytes that change between placeholder and back-patched
    /// header: crc32, compressed_size, uncompressed_size, in that order,
    /// starting 14 bytes into the record (after signature/version/flags/method/time/date).
    pub fn write_patch<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        w.write_all(&self.crc32.to_le_bytes())?;
        w.write_all(&self.compressed_size.to_le_bytes())?;
        w.write_all(&self.uncompressed_size.to_le_bytes())?;
        Ok(())
    }

    /// Byte offset of the patchable CRC/size fields within the record, for callers
    /// that seek directly rather than rewriting the whole header.
    pub const PATCH_OFFSET: u64 = 14;
}

/// Central Directory File Header: signature + 42 fixed bytes + name.
pub struct CentralDirectoryHeader<'a> {
    pub method: CompressionMethod,
    pub crc32: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub local_header_offset: u32,
    pub name: &'a str,
}

impl<'a> CentralDirectoryHeader<'a> {
    pub fn write<W: Write>(&self, w: &mut W, source: &Path) -> Result<()> {
        w.write_all(&CENTRAL_DIRECTORY_SIGNATURE.to_le_bytes())?;
        w.write_all(&0u16.to_le_bytes())?; // version made by
        w.write_all(&10u16.to_le_bytes())?; // version needed to extract
        w.write_all(&0u16.to_le_bytes())?; // general purpose bit flag
        w.write_all(&self.method.field().to_le_bytes())?;
        w.write_all(&0u16.to_le_bytes())?; // mod time
        w.write_all(&0u16.to_le_bytes())?; // mod date
        w.write_all(&self.crc32.to_le_bytes())?;
        w.write_all(&self.compressed_size.to_le_bytes())?;
        w.write_all(&self.uncompressed_size.to_le_bytes())?;
        w.write_all(&archive_name_len(source, self.name)?.to_le_bytes())?;
        w.write_all(&0u16.to_le_bytes())?; // extra field length
        w.write_all(&0u16.to_le_bytes())?; // comment length
        w.write_all(&0u16.to_le_bytes())?; // disk number start
        w.write_all(&0u16.to_le_bytes())?; // internal attributes
        w.write_all(&0u32.to_le_bytes())?; // external attributes
        w.write_all(&self.local_header_offset.to_le_bytes())?;
        w.write_all(self.name.as_bytes())?;
        Ok(())
    }

    /// Total encoded length of this record: the 46 fixed bytes plus the name.
    pub fn encoded_len(&self) -> u64 {
        46 + self.name.len() as u64
    }
}

/// End of Central Directory Record: signature + 18 fixed bytes. Always exactly
/// 22 bytes; this writer never emits a comment.
pub struct EndOfCentralDirectoryRecord {
    pub record_count: u16,
    pub central_directory_size: u32,
    pub central_directory_offset: u32,
}

impl EndOfCentralDirectoryRecord {
    pub fn write<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        w.write_all(&END_OF_CENTRAL_DIRECTORY_SIGNATURE.to_le_bytes())?;
        w.write_all(&0u16.to_le_bytes())?; // disk number
        w.write_all(&0u16.to_le_bytes())?; // disk with central directory
        w.write_all(&self.record_count.to_le_bytes())?; // records on this disk
        w.write_all(&self.record_count.to_le_bytes())?; // records total
        w.write_all(&self.central_directory_size.to_le_bytes())?;
        w.write_all(&self.central_directory_offset.to_le_bytes())?;
        w.write_all(&0u16.to_le_bytes())?; // comment length
        Ok(())
    }
}

pub(crate) use to_u32_field as checked_u32;
