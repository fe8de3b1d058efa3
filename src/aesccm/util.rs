use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::aesccm::error::Result;

/// Associated data shorter than 2^16 - 2^8 bytes gets a 2-byte length prefix.
const AAD_SHORT_LIMIT: usize = (1 << 16) - (1 << 8);
/// Associated data up to 2^31 - 1 bytes gets `0xFF 0xFE` plus a 32-bit length.
const AAD_MEDIUM_LIMIT: u64 = (1 << 31) - 1;

/// Fills a nonce of `len` bytes from the OS RNG.
pub fn random_nonce(len: usize) -> Result<Vec<u8>> {
    let mut nonce = vec![0u8; len];
    OsRng.try_fill_bytes(&mut nonce)?;
    Ok(nonce)
}

/// Largest payload, in bytes, that a CCM length field of `15 - nonce_size` bytes can encode.
pub(crate) fn max_payload(nonce_size: usize) -> u64 {
    let q = 15 - nonce_size;
    if q >= 8 {
        u64::MAX
    } else {
        (1u64 << (8 * q)) - 1
    }
}

/// Writes `value` big-endian into the whole of `out` (at most 8 bytes wide). The caller has
/// already checked that `value` fits.
#[inline(always)]
pub(crate) fn put_uint(out: &mut [u8], value: u64) {
    let bytes = value.to_be_bytes();
    out.copy_from_slice(&bytes[8 - out.len()..]);
}

/// Encodes the associated data length prefix. Returns the buffer and the number of bytes
/// of it in use (2, 6, or 10).
pub(crate) fn encode_aad_len(len: usize) -> ([u8; 10], usize) {
    let mut prefix = [0u8; 10];
    let len = len as u64;
    if len < AAD_SHORT_LIMIT as u64 {
        put_uint(&mut prefix[..2], len);
        (prefix, 2)
    } else if len <= AAD_MEDIUM_LIMIT {
        prefix[0] = 0xff;
        prefix[1] = 0xfe;
        put_uint(&mut prefix[2..6], len);
        (prefix, 6)
    } else {
        prefix[0] = 0xff;
        prefix[1] = 0xff;
        put_uint(&mut prefix[2..10], len);
        (prefix, 10)
    }
}
