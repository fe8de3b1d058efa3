//! The block cipher seam. CCM only ever runs the forward direction of a 128-bit block
//! cipher, so that is all [`BlockCipher`] asks for.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};

use crate::aesccm::key::{Key, KeySize};

/// A block cipher usable by [Ccm](crate::Ccm).
///
/// `Sync` is required because the CTR keystream for large payloads is generated on
/// several threads at once.
pub trait BlockCipher: Sync {
    /// Block size in bytes. CCM rejects anything other than 16.
    fn block_size(&self) -> usize;

    /// Encrypts exactly one block of [block_size](BlockCipher::block_size) bytes in place.
    ///
    /// # Panics
    ///
    /// The AES implementations panic if `block` is not exactly 16 bytes long.
    fn encrypt_block(&self, block: &mut [u8]);
}

macro_rules! impl_block_cipher {
    ($($cipher:ty),+) => {
        $(
            impl BlockCipher for $cipher {
                fn block_size(&self) -> usize {
                    16
                }

                fn encrypt_block(&self, block: &mut [u8]) {
                    BlockEncrypt::encrypt_block(self, GenericArray::from_mut_slice(block));
                }
            }
        )+
    };
}

impl_block_cipher!(aes::Aes128, aes::Aes192, aes::Aes256);

/// AES of any key size, built from a [Key].
#[derive(Clone)]
pub enum Aes {
    Aes128(aes::Aes128),
    Aes192(aes::Aes192),
    Aes256(aes::Aes256),
}

impl Aes {
    /// Runs the key schedule for `key` and stores the result in the returned instance.
    pub fn new(key: &Key) -> Self {
        let bytes = key.as_bytes();
        match key.size() {
            KeySize::Bits128 => Self::Aes128(aes::Aes128::new(GenericArray::from_slice(bytes))),
            KeySize::Bits192 => Self::Aes192(aes::Aes192::new(GenericArray::from_slice(bytes))),
            KeySize::Bits256 => Self::Aes256(aes::Aes256::new(GenericArray::from_slice(bytes))),
        }
    }
}

impl BlockCipher for Aes {
    fn block_size(&self) -> usize {
        16
    }

    fn encrypt_block(&self, block: &mut [u8]) {
        match self {
            Self::Aes128(c) => BlockCipher::encrypt_block(c, block),
            Self::Aes192(c) => BlockCipher::encrypt_block(c, block),
            Self::Aes256(c) => BlockCipher::encrypt_block(c, block),
        }
    }
}
