//! # Digest Assembly
//!
//! Serializes the final chaining state into the 16-byte MD5 digest (each word little-endian,
//! in A, B, C, D order) and converts digests to and from lowercase hexadecimal text.

use std::fmt;
use std::str::FromStr;

use super::state::ChainingState;
use crate::error::{Error, Result};

/// The size of the MD5 digest in bytes (128 bits = 16 bytes).
pub const MD5_OUTPUT_SIZE: usize = 16;

/// A finished 128-bit MD5 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Digest([u8; MD5_OUTPUT_SIZE]);

impl Digest {
    pub const fn new(bytes: [u8; MD5_OUTPUT_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; MD5_OUTPUT_SIZE] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; MD5_OUTPUT_SIZE] {
        self.0
    }

    /// Lowercase hexadecimal form, 32 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses a 32-character hexadecimal digest (either case).
    pub fn from_hex(text: &str) -> Result<Self> {
        let bytes = hex::decode(text)?;
        let bytes: [u8; MD5_OUTPUT_SIZE] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| Error::InvalidDigestLength(bytes.len()))?;
        Ok(Self(bytes))
    }
}

/// Serializes the chaining state into a digest.
pub fn finalize(state: ChainingState) -> Digest {
    let mut output = [0u8; MD5_OUTPUT_SIZE];
    for (chunk, word) in output.chunks_exact_mut(4).zip(state.words()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    Digest(output)
}

/// Lowercase hexadecimal encoding of `digest`.
pub fn to_hex(digest: &Digest) -> String {
    digest.to_hex()
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; MD5_OUTPUT_SIZE]> for Digest {
    fn from(bytes: [u8; MD5_OUTPUT_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; MD5_OUTPUT_SIZE] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}
