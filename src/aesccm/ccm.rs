use subtle::ConstantTimeEq;
use tracing::debug;
use zeroize::Zeroize;

use crate::aesccm::block::BlockCipher;
use crate::aesccm::error::{Error, Result};
use crate::aesccm::modes::{CBC_MAC_BLOCK_SIZE, CbcMac, Ctr};
use crate::aesccm::util::{encode_aad_len, max_payload, put_uint};

/// **Counter with CBC-MAC** authenticated encryption (NIST SP 800-38C, RFC 3610).
///
/// Built from a borrowed 128-bit block cipher, a nonce size `N` (7 to 13 bytes) and a tag
/// size `T` (4 to 16 bytes, even). Both sizes are fixed for the life of the instance.
/// The nonce size sets the width of the length field, `15 - N` bytes, and so the largest
/// payload: see [max_payload](Ccm::max_payload).
///
/// Sealed output is `CTR(plaintext) || tag` with no other framing; the nonce and associated
/// data are carried by the caller.
///
/// The instance owns a single CBC-MAC accumulator which every call resets and reuses, which
/// is why [seal](Ccm::seal) and [open](Ccm::open) take `&mut self`. Share an instance
/// between threads only behind a lock, or build one per thread.
///
/// **Important**: the same nonce must never be reused with the same key.
///
/// ## Examples
/// ```
/// # fn main() -> aesccm::Result<()> {
/// use aesccm::{Aes, Ccm, Key, KeySize, random_nonce};
///
/// let aes = Aes::new(&Key::random(KeySize::Bits128)?);
/// let mut ccm = Ccm::new(&aes, 13, 8)?;
///
/// let nonce = random_nonce(ccm.nonce_size())?;
/// let sealed = ccm.seal(&nonce, b"attack at dawn", b"header")?;
/// assert_eq!(sealed.len(), 14 + ccm.overhead());
///
/// let opened = ccm.open(&nonce, &sealed, b"header")?;
/// assert_eq!(opened, b"attack at dawn");
///
/// // the associated data is authenticated too
/// assert!(ccm.open(&nonce, &sealed, b"HEADER").is_err());
/// # Ok(())
/// # }
/// ```
pub struct Ccm<'a, B: BlockCipher + ?Sized> {
    block: &'a B,
    mac: CbcMac<'a, B>,
    nonce_size: usize,
    tag_size: usize,
}

impl<'a, B: BlockCipher + ?Sized> Ccm<'a, B> {
    /// Validates the parameters and binds a fresh CBC-MAC accumulator to `block`.
    ///
    /// Returns:
    /// - [InvalidBlockSize](crate::Error::InvalidBlockSize) unless `block` has 16-byte blocks.
    /// - [InvalidNonceSize](crate::Error::InvalidNonceSize) unless `7 <= nonce_size <= 13`.
    /// - [InvalidTagSize](crate::Error::InvalidTagSize) unless `tag_size` is even and in `4..=16`.
    pub fn new(block: &'a B, nonce_size: usize, tag_size: usize) -> Result<Self> {
        if block.block_size() != CBC_MAC_BLOCK_SIZE {
            return Err(Error::InvalidBlockSize {
                size: block.block_size(),
            });
        }

        if !(7..=13).contains(&nonce_size) {
            return Err(Error::InvalidNonceSize { len: nonce_size });
        }

        if !(4..=16).contains(&tag_size) || tag_size & 1 != 0 {
            return Err(Error::InvalidTagSize { len: tag_size });
        }

        debug!(nonce_size, tag_size, "CCM instance created");
        Ok(Self {
            block,
            mac: CbcMac::new(block),
            nonce_size,
            tag_size,
        })
    }

    pub fn nonce_size(&self) -> usize {
        self.nonce_size
    }

    /// Bytes added to the plaintext by sealing, i.e. the tag size.
    pub fn overhead(&self) -> usize {
        self.tag_size
    }

    /// Largest plaintext, in bytes, this instance can seal: `2^(8 * (15 - N)) - 1`.
    pub fn max_payload(&self) -> u64 {
        max_payload(self.nonce_size)
    }

    /// Authenticated encryption. Returns `ciphertext || tag`.
    ///
    /// Returns:
    /// - [InvalidNonceSize](crate::Error::InvalidNonceSize) if `nonce` is not exactly `N` bytes.
    /// - [MaxPayloadSizeReached](crate::Error::MaxPayloadSizeReached) if `plaintext` is longer
    ///   than [max_payload](Ccm::max_payload).
    pub fn seal(&mut self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(plaintext.len() + self.tag_size);
        self.seal_to(&mut out, nonce, plaintext, aad)?;
        Ok(out)
    }

    /// As [seal](Ccm::seal), appending `ciphertext || tag` to `dst`. On error `dst` is left
    /// untouched.
    pub fn seal_to(
        &mut self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        plaintext: &[u8],
        aad: &[u8],
    ) -> Result<()> {
        self.check_nonce(nonce)?;
        self.check_payload(plaintext.len())?;

        let start = dst.len();
        dst.resize(start + plaintext.len() + self.tag_size, 0);
        let (ciphertext, tag) = dst[start..].split_at_mut(plaintext.len());

        let ctr0 = self.counter_block(nonce);
        let s0 = self.encrypt_copy(&ctr0);

        // keystream block 0 masks the tag, the payload starts at counter 1
        let mut ctr1 = ctr0;
        ctr1[15] = 1;
        Ctr::new(self.block, &ctr1).apply_keystream(ciphertext, plaintext);

        let mac = self.compute_tag(&ctr0, aad, plaintext);
        for ((t, m), s) in tag.iter_mut().zip(&mac).zip(&s0) {
            *t = m ^ s;
        }

        Ok(())
    }

    /// Authenticated decryption of `ciphertext || tag`. Returns the plaintext only if the tag
    /// verifies.
    ///
    /// Returns:
    /// - [InvalidNonceSize](crate::Error::InvalidNonceSize) if `nonce` is not exactly `N` bytes.
    /// - [InvalidTagSize](crate::Error::InvalidTagSize) if the input is shorter than the tag.
    ///   Input of exactly the tag size is accepted as an empty payload.
    /// - [MaxPayloadSizeReached](crate::Error::MaxPayloadSizeReached) if the payload is longer
    ///   than [max_payload](Ccm::max_payload).
    /// - [AuthenticationFailed](crate::Error::AuthenticationFailed) if the tag does not match.
    pub fn open(&mut self, nonce: &[u8], ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(ciphertext.len().saturating_sub(self.tag_size));
        self.open_to(&mut out, nonce, ciphertext, aad)?;
        Ok(out)
    }

    /// As [open](Ccm::open), appending the plaintext to `dst`. Input of exactly the tag size
    /// is an empty payload, not an error.
    ///
    /// The payload is decrypted into `dst` before the tag is checked. If the check fails that
    /// region is wiped and `dst` is truncated back to its original length, so unauthenticated
    /// plaintext is never handed back.
    pub fn open_to(
        &mut self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        ciphertext: &[u8],
        aad: &[u8],
    ) -> Result<()> {
        self.check_nonce(nonce)?;
        if ciphertext.len() < self.tag_size {
            return Err(Error::InvalidTagSize {
                len: ciphertext.len(),
            });
        }
        let (payload, received_tag) = ciphertext.split_at(ciphertext.len() - self.tag_size);
        self.check_payload(payload.len())?;

        let ctr0 = self.counter_block(nonce);
        let s0 = self.encrypt_copy(&ctr0);

        let start = dst.len();
        dst.resize(start + payload.len(), 0);

        let mut ctr1 = ctr0;
        ctr1[15] = 1;
        Ctr::new(self.block, &ctr1).apply_keystream(&mut dst[start..], payload);

        let mut expected = self.compute_tag(&ctr0, aad, &dst[start..]);
        for (e, s) in expected.iter_mut().zip(&s0) {
            *e ^= s;
        }

        let verified: bool = expected[..self.tag_size].ct_eq(received_tag).into();
        if !verified {
            debug!(len = payload.len(), "CCM tag mismatch");
            dst[start..].zeroize();
            dst.truncate(start);
            return Err(Error::AuthenticationFailed);
        }

        Ok(())
    }

    fn check_nonce(&self, nonce: &[u8]) -> Result<()> {
        if nonce.len() != self.nonce_size {
            return Err(Error::InvalidNonceSize { len: nonce.len() });
        }
        Ok(())
    }

    fn check_payload(&self, len: usize) -> Result<()> {
        let max = self.max_payload();
        let len = len as u64;
        if len > max {
            return Err(Error::MaxPayloadSizeReached { len, max });
        }
        Ok(())
    }

    /// Ctr0: `[q-1] || nonce || 0...0`
    fn counter_block(&self, nonce: &[u8]) -> [u8; 16] {
        let mut ctr = [0u8; 16];
        ctr[0] = (15 - self.nonce_size - 1) as u8;
        ctr[1..=self.nonce_size].copy_from_slice(nonce);
        ctr
    }

    fn encrypt_copy(&self, block: &[u8; 16]) -> [u8; 16] {
        let mut out = *block;
        self.block.encrypt_block(&mut out);
        out
    }

    /*
    SP 800-38C A.2 formatting, then CBC-MAC over it:

    B0 = flags || nonce || Q
        flags bit 6     Adata, set when there is associated data
        flags bits 3-5  (T - 2) / 2
        flags bits 0-2  q - 1 (already in Ctr0)
        Q               plaintext length, big-endian over the last q bytes

    if there is associated data:
        B0 || len(a) prefix || a || zero pad to a block boundary
    else:
        B0

    then plaintext || zero pad. The full 16-byte MAC is returned, callers truncate to T.
    */
    fn compute_tag(&mut self, ctr0: &[u8; 16], aad: &[u8], plaintext: &[u8]) -> [u8; 16] {
        self.mac.reset();

        let mut b0 = *ctr0;
        b0[0] |= (((self.tag_size - 2) / 2) as u8) << 3;
        put_uint(&mut b0[1 + self.nonce_size..], plaintext.len() as u64);

        if !aad.is_empty() {
            b0[0] |= 1 << 6;
            self.mac.update(&b0);

            let (prefix, prefix_len) = encode_aad_len(aad.len());
            self.mac.update(&prefix[..prefix_len]);
            self.mac.update(aad);
            self.mac.pad_zero();
        } else {
            self.mac.update(&b0);
        }

        self.mac.update(plaintext);
        self.mac.pad_zero();

        self.mac.sum()
    }
}
