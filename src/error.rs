use thiserror::Error;

/// Errors surfaced by the digest API.
///
/// The MD5 computation itself cannot fail; these cover malformed inputs at the compressor
/// boundary, digest parsing, and reading input from I/O sources.
#[derive(Debug, Error)]
pub enum Error {
    #[error("md5 block must be {expected} bytes, got {actual}")]
    InvalidBlockLength { expected: usize, actual: usize },

    #[error("md5 constant table must have {expected} entries, got {actual}")]
    InvalidConstantTable { expected: usize, actual: usize },

    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("digest must be 16 bytes, got {0}")]
    InvalidDigestLength(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
