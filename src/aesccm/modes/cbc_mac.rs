use zeroize::Zeroize;

use crate::aesccm::block::BlockCipher;

/// Block size of the CBC-MAC accumulator, and the only block size CCM accepts.
pub const CBC_MAC_BLOCK_SIZE: usize = 16;

/// Incremental CBC-MAC with implicit zero padding.
///
/// Input is XOR-accumulated into a 16-byte chaining value one byte at a time. Each time a
/// full block has been absorbed it is encrypted in place and the cursor goes back to zero,
/// so `cursor < 16` holds between calls. A pending partial block is only encrypted by
/// [pad_zero](CbcMac::pad_zero) or [sum](CbcMac::sum), which is exactly what zero-padding
/// it to a full block would produce.
///
/// The accumulator borrows the block cipher and is meant to be [reset](CbcMac::reset) and
/// reused rather than rebuilt for every message.
pub struct CbcMac<'a, B: BlockCipher + ?Sized> {
    ci: [u8; CBC_MAC_BLOCK_SIZE],
    cursor: usize,
    block: &'a B,
}

impl<'a, B: BlockCipher + ?Sized> CbcMac<'a, B> {
    /// New zeroed accumulator over `block`. The caller is responsible for `block` having
    /// 16-byte blocks; [Ccm::new](crate::Ccm::new) checks this before building one.
    pub fn new(block: &'a B) -> Self {
        Self {
            ci: [0u8; CBC_MAC_BLOCK_SIZE],
            cursor: 0,
            block,
        }
    }

    /// Absorbs `data`. Never fails and always consumes all of it.
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.ci[self.cursor] ^= byte;
            self.cursor += 1;
            if self.cursor == CBC_MAC_BLOCK_SIZE {
                self.block.encrypt_block(&mut self.ci);
                self.cursor = 0;
            }
        }
    }

    /// Flushes a pending partial block as if it were zero padded. No-op on a block boundary.
    pub fn pad_zero(&mut self) {
        if self.cursor != 0 {
            self.block.encrypt_block(&mut self.ci);
            self.cursor = 0;
        }
    }

    /// Current MAC value, flushing any pending partial block first.
    pub fn sum(&mut self) -> [u8; CBC_MAC_BLOCK_SIZE] {
        self.pad_zero();
        self.ci
    }

    pub fn reset(&mut self) {
        self.ci.zeroize();
        self.cursor = 0;
    }

    /// Size of the MAC output in bytes.
    pub fn size(&self) -> usize {
        CBC_MAC_BLOCK_SIZE
    }

    pub fn block_size(&self) -> usize {
        CBC_MAC_BLOCK_SIZE
    }
}

impl<B: BlockCipher + ?Sized> Drop for CbcMac<'_, B> {
    fn drop(&mut self) {
        self.ci.zeroize();
    }
}
