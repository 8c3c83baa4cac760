//! # Streaming MD5
//!
//! An incremental MD5 context: feed data with [`Md5::update`] in any chunking and call
//! [`Md5::finalize`] once. At most one partial block is buffered; full blocks are compressed
//! straight from the caller's slice.
//!
//! **Note**: MD5 is broken for collision resistance. Use it for checksums and compatibility,
//! never for security decisions.

use std::io::{self, Read, Write};

use log::trace;

use super::compress::{compress, Block};
use super::constants::{round_constants, RoundConstants};
use super::digest::{finalize, Digest};
use super::padding::{append_padding, BLOCK_SIZE};
use super::state::ChainingState;
use crate::error::Result;

/// An incremental MD5 context.
#[derive(Debug, Clone)]
pub struct Md5 {
    state: ChainingState,
    /// Pending bytes of the current, incomplete block.
    buffer: Block,
    buffer_len: usize,
    /// Total message length in bits mod 2^64.
    length_bits: u64,
    blocks: u64,
    constants: &'static RoundConstants,
}

impl Md5 {
    /// Creates a new MD5 context.
    pub fn new() -> Self {
        Self {
            state: ChainingState::INITIAL,
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            length_bits: 0,
            blocks: 0,
            constants: round_constants(),
        }
    }

    /// One-shot digest of `data`.
    pub fn digest(data: &[u8]) -> Digest {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }

    /// Absorbs `data` into the context.
    pub fn update(&mut self, mut data: &[u8]) {
        self.length_bits = self.length_bits.wrapping_add((data.len() as u64).wrapping_mul(8));

        if self.buffer_len > 0 {
            let take = (BLOCK_SIZE - self.buffer_len).min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len < BLOCK_SIZE {
                return;
            }
            let block = self.buffer;
            self.process_block(&block);
            self.buffer_len = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_SIZE);
        for chunk in &mut blocks {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            self.process_block(&block);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
    }

    /// Pads the buffered tail, processes the final block(s) and returns the digest.
    pub fn finalize(mut self) -> Digest {
        let mut tail = Vec::with_capacity(2 * BLOCK_SIZE);
        tail.extend_from_slice(&self.buffer[..self.buffer_len]);
        append_padding(&mut tail, self.length_bits);

        for chunk in tail.chunks_exact(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            self.process_block(&block);
        }

        trace!(
            "md5 finalized after {} blocks ({} message bits)",
            self.blocks,
            self.length_bits
        );
        finalize(self.state)
    }

    /// Resets the context to its initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn process_block(&mut self, block: &Block) {
        self.state = compress(self.state, block, self.constants);
        self.blocks += 1;
    }
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for Md5 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Digests everything `reader` yields until EOF.
pub fn digest_reader<R: Read>(mut reader: R) -> Result<Digest> {
    let mut hasher = Md5::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_empty() {
        // MD5("") => d41d8cd98f00b204e9800998ecf8427e
        let digest = Md5::digest(b"");
        assert_eq!(hex::encode(digest), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_md5_abc() {
        // MD5("abc") => 900150983cd24fb0d6963f7d28e17f72
        let digest = Md5::digest(b"abc");
        assert_eq!(hex::encode(digest), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_md5_message_digest() {
        // MD5("message digest") => f96b697d7cb7938d525a2f31aaf161d0
        let digest = Md5::digest(b"message digest");
        assert_eq!(hex::encode(digest), "f96b697d7cb7938d525a2f31aaf161d0");
    }

    #[test]
    fn test_chunked_updates_match_one_shot() {
        let data: Vec<u8> = (0..1000u32).map(|i| (i * 31 % 251) as u8).collect();
        let expected = Md5::digest(&data);
        for chunk_size in [1, 3, 55, 56, 63, 64, 65, 128, 999] {
            let mut hasher = Md5::new();
            for chunk in data.chunks(chunk_size) {
                hasher.update(chunk);
            }
            assert_eq!(hasher.finalize(), expected, "chunk size {chunk_size}");
        }
    }

    #[test]
    fn test_reset() {
        let mut hasher = Md5::new();
        hasher.update(b"garbage");
        hasher.reset();
        hasher.update(b"abc");
        assert_eq!(hasher.finalize(), Md5::digest(b"abc"));
    }

    #[test]
    fn test_clone_forks_state() {
        let mut hasher = Md5::new();
        hasher.update(b"message ");
        let mut fork = hasher.clone();
        hasher.update(b"digest");
        fork.update(b"digest");
        assert_eq!(hasher.finalize(), fork.finalize());
    }

    #[test]
    fn test_digest_reader() {
        let data = vec![0x5au8; 4096 + 17];
        let digest = digest_reader(io::Cursor::new(&data)).unwrap();
        assert_eq!(digest, Md5::digest(&data));
    }
}
