//! DISCLAIMER: MD5 is broken for collision resistance. This module computes standard MD5
//! digests for checksums and interoperability only. Do NOT use it for passwords, signatures, or
//! any other security-sensitive purpose; use SHA-2, SHA-3 or BLAKE3 from a vetted library.
//!
//! The computation is a forward pipeline:
//! input bytes → [`padding::pad`] → 64-byte blocks → [`compress::compress`] →
//! [`digest::finalize`].

pub mod compress;
pub mod constants;
pub mod digest;
pub mod hasher;
pub mod padding;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod state;

use std::fs::File;
use std::path::Path;

use log::debug;

use crate::error::Result;

pub use compress::{compress, compress_slice, try_compress, Block};
pub use constants::{generate_round_constants, round_constants, RoundConstants, SHIFTS};
pub use digest::{finalize, to_hex, Digest, MD5_OUTPUT_SIZE};
pub use hasher::{digest_reader, Md5};
pub use padding::{append_padding, pad, padded_len, BLOCK_SIZE};
#[cfg(feature = "parallel")]
pub use parallel::{digest_batch, digest_files};
pub use state::ChainingState;

/// Computes the MD5 digest of `bytes`.
pub fn digest(bytes: &[u8]) -> Digest {
    let constants = round_constants();
    let padded = pad(bytes);
    let state = padded
        .chunks_exact(BLOCK_SIZE)
        .fold(ChainingState::INITIAL, |state, chunk| {
            compress_slice(state, chunk, constants)
        });
    finalize(state)
}

/// Computes the MD5 digest of `bytes` as 32 lowercase hex characters.
pub fn digest_hex(bytes: &[u8]) -> String {
    digest(bytes).to_hex()
}

/// Computes the MD5 digest of the file at `path`.
pub fn digest_file<P: AsRef<Path>>(path: P) -> Result<Digest> {
    let path = path.as_ref();
    debug!("hashing {}", path.display());
    digest_reader(File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_matches_streaming() {
        for len in [0, 1, 55, 56, 57, 63, 64, 65, 127, 128, 1000] {
            let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
            assert_eq!(digest(&data), Md5::digest(&data), "length {len}");
        }
    }

    #[test]
    fn test_digest_hex_vectors() {
        assert_eq!(digest_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(digest_hex(b"a"), "0cc175b9c0f1b6a831c399e269772661");
    }
}
