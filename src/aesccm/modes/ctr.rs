use rayon::prelude::*;
use tracing::trace;

use crate::aesccm::block::BlockCipher;
use crate::aesccm::modes::util::{PARALLEL_THRESHOLD, nth_counter_block, xor_into};

/// Counter mode keystream over a 128-bit block cipher.
///
/// Keystream block `i` is the encryption of `initial + i`, the whole 16-byte counter block
/// being incremented as a big-endian integer. CCM callers never get near the carry into the
/// nonce bytes because the payload length is bounded by the width of the counter field.
pub(crate) struct Ctr<'a, B: BlockCipher + ?Sized> {
    block: &'a B,
    initial: u128,
}

impl<'a, B: BlockCipher + ?Sized> Ctr<'a, B> {
    pub fn new(block: &'a B, initial: &[u8; 16]) -> Self {
        Self {
            block,
            initial: u128::from_be_bytes(*initial),
        }
    }

    /// XORs the keystream into `src`, writing the result to `dst`. CTR is symmetric, so this
    /// both encrypts and decrypts. `dst` and `src` must be the same length.
    pub fn apply_keystream(&self, dst: &mut [u8], src: &[u8]) {
        debug_assert_eq!(dst.len(), src.len());
        if src.len() > PARALLEL_THRESHOLD {
            trace!(len = src.len(), "CTR keystream in parallel");
            self.apply_parallel(dst, src);
        } else {
            self.apply_serial(dst, src);
        }
    }

    fn keystream_block(&self, i: usize) -> [u8; 16] {
        let mut block = nth_counter_block(self.initial, i);
        self.block.encrypt_block(&mut block);
        block
    }

    pub(crate) fn apply_serial(&self, dst: &mut [u8], src: &[u8]) {
        // for each chunk of input...
        for (i, (out_chunk, in_chunk)) in dst.chunks_mut(16).zip(src.chunks(16)).enumerate() {
            let keystream = self.keystream_block(i);
            xor_into(out_chunk, &keystream, in_chunk);
        }
    }

    pub(crate) fn apply_parallel(&self, dst: &mut [u8], src: &[u8]) {
        dst.par_chunks_mut(16)
            .zip(src.par_chunks(16))
            .enumerate()
            .for_each(|(i, (out_chunk, in_chunk))| {
                let keystream = self.keystream_block(i);
                xor_into(out_chunk, &keystream, in_chunk);
            });
    }
}
