//! Defines the [`Key`] struct, which holds a valid AES key of 128, 192, or 256 bits.
//! Keys can be randomly generated or constructed from an existing byte slice.

use std::fmt;

use rand::TryRngCore;
use rand::rngs::OsRng;
use zeroize::Zeroize;

use crate::aesccm::error::{Error, Result};

/// Supported AES key sizes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum KeySize {
    Bits128,
    Bits192,
    Bits256,
}

#[derive(Clone, PartialEq, Eq)]
enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

/// Contains a valid AES key. Can be instantiated with a random key, or built from a slice
/// of bytes that is 16, 24, or 32 bytes long.
/// A `Key` is required to instantiate an [Aes](crate::Aes) block cipher.
///
/// The key material is wiped when the `Key` is dropped.
///
/// ## Examples
/// ```
/// # fn main() -> aesccm::Result<()> {
/// use aesccm::{Key, KeySize};
///
/// let random = Key::random(KeySize::Bits256)?;
/// assert_eq!(random.as_bytes().len(), 32);
///
/// let key_bytes: [u8; 24] = [0xBA, 0x32, 0x82, 0x9A, 0x43, 0x8A, 0x48, 0xED,
///                            0xC2, 0xEA, 0x10, 0x73, 0x26, 0xF8, 0xA9, 0x62,
///                            0xDE, 0x82, 0x06, 0xBA, 0x53, 0xC2, 0xC7, 0x55];
/// let key = Key::try_from_slice(&key_bytes)?;
/// assert_eq!(key.size(), KeySize::Bits192);
/// assert_eq!(key.as_bytes(), &key_bytes[..]);
///
/// // anything other than 16, 24, or 32 bytes is rejected
/// assert!(Key::try_from_slice(&key_bytes[..20]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Generate a random key of the given size. Returns Error if OsRng fails.
    pub fn random(size: KeySize) -> Result<Self> {
        let mut bytes = match size {
            KeySize::Bits128 => KeyBytes::K128([0u8; 16]),
            KeySize::Bits192 => KeyBytes::K192([0u8; 24]),
            KeySize::Bits256 => KeyBytes::K256([0u8; 32]),
        };
        match &mut bytes {
            KeyBytes::K128(k) => OsRng.try_fill_bytes(k)?,
            KeyBytes::K192(k) => OsRng.try_fill_bytes(k)?,
            KeyBytes::K256(k) => OsRng.try_fill_bytes(k)?,
        }
        Ok(Self { bytes })
    }

    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 16, 24, or 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let invalid = || Error::InvalidKeyLength { len: bytes.len() };
        let bytes = match bytes.len() {
            16 => KeyBytes::K128(bytes.try_into().map_err(|_| invalid())?),
            24 => KeyBytes::K192(bytes.try_into().map_err(|_| invalid())?),
            32 => KeyBytes::K256(bytes.try_into().map_err(|_| invalid())?),
            _ => return Err(invalid()),
        };
        Ok(Self { bytes })
    }

    /// Returns a reference to the internal key as an array of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }

    pub fn size(&self) -> KeySize {
        match self.bytes {
            KeyBytes::K128(_) => KeySize::Bits128,
            KeyBytes::K192(_) => KeySize::Bits192,
            KeyBytes::K256(_) => KeySize::Bits256,
        }
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key").field("size", &self.size()).finish_non_exhaustive()
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        match &mut self.bytes {
            KeyBytes::K128(k) => k.zeroize(),
            KeyBytes::K192(k) => k.zeroize(),
            KeyBytes::K256(k) => k.zeroize(),
        }
    }
}
