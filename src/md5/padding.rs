//! # MD5 Padding
//!
//! Extends a message so its length is a positive multiple of the 64-byte block size:
//! a single `0x80` byte, zero bytes up to 56 mod 64, then the original length in bits as a
//! little-endian `u64` (wrapping modulo 2^64).

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Offset within the final block where the length field starts.
const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;

/// Bit length of a message of `len` bytes, modulo 2^64.
pub fn bit_length(len: usize) -> u64 {
    (len as u64).wrapping_mul(8)
}

/// Length in bytes of the padded form of a `len`-byte message.
pub fn padded_len(len: usize) -> usize {
    // the 0x80 marker plus the 8-byte length always fit after rounding up past `len + 9`
    (len + 1 + 8).div_ceil(BLOCK_SIZE) * BLOCK_SIZE
}

/// Appends the padding suffix to `buf` for a message that is `bit_len` bits long.
///
/// `buf` may hold the whole message or just its trailing partial block; only
/// `buf.len() % 64` matters for the number of zero bytes written.
pub fn append_padding(buf: &mut Vec<u8>, bit_len: u64) {
    buf.push(0x80);
    let rem = buf.len() % BLOCK_SIZE;
    let zeros = if rem <= LENGTH_OFFSET {
        LENGTH_OFFSET - rem
    } else {
        BLOCK_SIZE - rem + LENGTH_OFFSET
    };
    buf.resize(buf.len() + zeros, 0);
    buf.extend_from_slice(&bit_len.to_le_bytes());
}

/// Returns the padded copy of `bytes`.
pub fn pad(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(padded_len(bytes.len()));
    out.extend_from_slice(bytes);
    append_padding(&mut out, bit_length(bytes.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_empty() {
        let padded = pad(b"");
        assert_eq!(padded.len(), 64);
        assert_eq!(padded[0], 0x80);
        assert!(padded[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pad_layout() {
        let padded = pad(b"abc");
        assert_eq!(padded.len(), 64);
        assert_eq!(&padded[..3], b"abc");
        assert_eq!(padded[3], 0x80);
        assert!(padded[4..56].iter().all(|&b| b == 0));
        assert_eq!(&padded[56..], &24u64.to_le_bytes());
    }

    #[test]
    fn test_block_boundaries() {
        let cases = [
            (55, 64),
            (56, 128),
            (57, 128),
            (63, 128),
            (64, 128),
            (119, 128),
            (120, 192),
        ];
        for (len, expected) in cases {
            let input = vec![0xaau8; len];
            let padded = pad(&input);
            assert_eq!(padded.len(), expected, "input length {len}");
            assert_eq!(padded_len(len), expected, "input length {len}");
            assert_eq!(padded[len], 0x80);
            assert_eq!(&padded[expected - 8..], &bit_length(len).to_le_bytes());
        }
    }

    #[test]
    fn test_padding_always_grows() {
        for len in 0..=200 {
            let padded = pad(&vec![1u8; len]);
            assert!(padded.len() > len);
            assert_eq!(padded.len() % BLOCK_SIZE, 0);
        }
    }

    #[test]
    fn test_append_padding_on_tail_matches_pad() {
        let message = vec![7u8; 150];
        let mut tail = message[128..].to_vec();
        append_padding(&mut tail, bit_length(message.len()));
        let full = pad(&message);
        assert_eq!(&full[128..], &tail[..]);
    }

    #[test]
    fn test_bit_length_wraps() {
        assert_eq!(bit_length(3), 24);
        // only reachable on 64-bit targets, where usize::MAX * 8 overflows u64
        if usize::BITS == 64 {
            assert_eq!(bit_length(usize::MAX), (usize::MAX as u64).wrapping_mul(8));
        }
    }
}
