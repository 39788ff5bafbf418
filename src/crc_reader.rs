//! CRC-32 tapping reader.
//!
//! Adapts a byte source into an instrumented pump: bytes read from it are
//! simultaneously fed to a CRC-32 accumulator and written to a sink. This is
//! the one capability the archive writer actually needs from its input:
//! "at the moment the body ends, give me the exact byte count and CRC". It
//! is built the same way `s-zip`'s `CrcCountingWriter` instruments the
//! *output* side of its pipeline, just facing the other direction.

use crc32fast::Hasher as Crc32;
use std::io::{Read, Write};

/// Wraps a `Read` and taps every byte that passes through `pump_into`.
pub struct CrcTappingReader<R: Read> {
    inner: R,
    crc: Crc32,
    bytes_read: u64,
}

impl<R: Read> CrcTappingReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            crc: Crc32::new(),
            bytes_read: 0,
        }
    }

    /// Reads at most `limit` bytes from the inner source, feeding them through
    /// the CRC-32 state and writing them to `sink`. Returns the number of
    /// bytes moved; `Ok(0)` means EOF was reached before any byte was read.
    pub fn pump_into<W: Write>(&mut self, sink: &mut W, limit: u64) -> std::io::Result<u64> {
        let mut buf = [0u8; 64 * 1024];
        let mut moved = 0u64;
        while moved < limit {
            let want = std::cmp::min(buf.len() as u64, limit - moved) as usize;
            let n = self.inner.read(&mut buf[..want])?;
            if n == 0 {
                break;
            }
            self.crc.update(&buf[..n]);
            sink.write_all(&buf[..n])?;
            moved += n as u64;
        }
        self.bytes_read += moved;
        Ok(moved)
    }

    /// Pumps the entire remaining input into `sink`, in chunks, until EOF.
    /// Returns the total byte count moved.
    pub fn pump_to_eof<W: Write>(&mut self, sink: &mut W) -> std::io::Result<u64> {
        let mut total = 0u64;
        loop {
            let n = self.pump_into(sink, u64::MAX - total)?;
            if n == 0 {
                break;
            }
            total += n;
        }
        Ok(total)
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Freezes and returns the CRC-32 of every byte pumped so far.
    pub fn finalize(self) -> u32 {
        self.crc.finalize()
    }
}
