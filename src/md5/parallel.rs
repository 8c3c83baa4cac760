//! Parallel hashing of independent inputs on rayon's global thread pool.
//!
//! Each input is still digested sequentially block by block; only separate inputs run
//! concurrently. The shared round-constant table is read-only, so workers need no locking.

use std::path::Path;

use log::debug;
use rayon::prelude::*;

use super::digest::Digest;
use super::hasher::Md5;
use crate::error::Result;

/// Digests every input in parallel, preserving input order.
pub fn digest_batch<T: AsRef<[u8]> + Sync>(inputs: &[T]) -> Vec<Digest> {
    debug!("hashing batch of {} inputs", inputs.len());
    inputs
        .par_iter()
        .map(|input| Md5::digest(input.as_ref()))
        .collect()
}

/// Digests each file in parallel, returning one result per path in input order.
pub fn digest_files<P: AsRef<Path> + Sync>(paths: &[P]) -> Vec<Result<Digest>> {
    debug!("hashing {} files in parallel", paths.len());
    paths.par_iter().map(super::digest_file).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_batch_matches_sequential() {
        let inputs: Vec<Vec<u8>> = (0..32)
            .map(|i| format!("test input {i}").repeat(i + 1).into_bytes())
            .collect();
        let batch = digest_batch(&inputs);
        let sequential: Vec<_> = inputs.iter().map(|i| Md5::digest(i)).collect();
        assert_eq!(batch, sequential);
    }

    #[test]
    fn test_batch_empty() {
        let empty: &[&[u8]] = &[];
        assert!(digest_batch(empty).is_empty());
    }

    #[test]
    fn test_digest_files_reports_missing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"abc").unwrap();
        let missing = file.path().with_extension("missing");

        let results = digest_files(&[file.path().to_path_buf(), missing]);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap(), &Md5::digest(b"abc"));
        assert!(results[1].is_err());
    }
}
