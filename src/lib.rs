//! # md5-digest
//!
//! A self-contained implementation of the MD5 message digest (RFC 1321).
//!
//! ```
//! assert_eq!(
//!     md5_digest::digest_hex(b"abc"),
//!     "900150983cd24fb0d6963f7d28e17f72"
//! );
//! ```
//!
//! **Note**: MD5 is not collision-resistant. It is provided for checksums and compatibility
//! with existing formats, not for security.

pub mod error;
pub mod md5;

pub use error::{Error, Result};
pub use crate::md5::{
    digest, digest_file, digest_hex, digest_reader, Digest, Md5, MD5_OUTPUT_SIZE,
};
#[cfg(feature = "parallel")]
pub use crate::md5::{digest_batch, digest_files};
