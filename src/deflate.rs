//! Streaming raw-DEFLATE encoder, best-compression preset.
//!
//! Thin wrapper around `flate2::write::DeflateEncoder`, which already
//! produces a raw DEFLATE stream (no zlib/gzip framing) honoring the 32 KiB
//! window RFC 1951 mandates. `s-zip`'s own writer drives the same type the
//! same way; this wrapper exists only so the archive writer has one call
//! (`finish`) that both flushes the trailing bits and hands back the
//! wrapped sink, mirroring `s-zip`'s `CurrentEntry::encoder.finish()`.

use flate2::write::DeflateEncoder;
use flate2::Compression;
use std::io::Write;

pub struct EntryCompressor<W: Write> {
    encoder: DeflateEncoder<W>,
}

impl<W: Write> EntryCompressor<W> {
    pub fn new(sink: W) -> Self {
        Self {
            encoder: DeflateEncoder::new(sink, Compression::best()),
        }
    }

    /// Flushes the remaining literal buffer, emits the final (BFINAL=1) block,
    /// and returns the inner sink so the caller can learn how many compressed
    /// bytes it received.
    pub fn finish(self) -> std::io::Result<W> {
        self.encoder.finish()
    }
}

impl<W: Write> Write for EntryCompressor<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.encoder.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.encoder.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_on_empty_input_yields_a_single_final_block() {
        let compressor = EntryCompressor::new(Vec::new());
        let out = compressor.finish().unwrap();
        // A DEFLATE stream is never literally empty: even zero input needs a
        // final empty stored/fixed-Huffman block to carry BFINAL=1.
        assert!(!out.is_empty());
    }

    #[test]
    fn round_trips_through_flate2_decoder() {
        let mut compressor = EntryCompressor::new(Vec::new());
        compressor.write_all(b"the quick brown fox jumps over the lazy dog, repeatedly repeatedly repeatedly").unwrap();
        let compressed = compressor.finish().unwrap();

        let mut decoder = flate2::read::DeflateDecoder::new(&compressed[..]);
        let mut out = Vec::new();
        std::io::Read::read_to_end(&mut decoder, &mut out).unwrap();
        assert_eq!(
            out,
            b"the quick brown fox jumps over the lazy dog, repeatedly repeatedly repeatedly"
        );
    }
}
