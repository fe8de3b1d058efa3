use rand::rand_core;
use thiserror::Error;

/// AES-CCM Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// AES-CCM Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The block cipher given to [Ccm::new](crate::Ccm::new) does not operate on 16-byte blocks.
    #[error("CCM mode requires a 128-bit block cipher (got {size}-byte blocks)")]
    InvalidBlockSize { size: usize },

    /// Nonce length outside 7..=13 at construction, or a nonce that does not match the
    /// instance's nonce size when sealing or opening.
    #[error("invalid nonce size for CCM mode: {len} bytes")]
    InvalidNonceSize { len: usize },

    /// Tag length that is not an even number in 4..=16, or a ciphertext too short to hold a tag.
    #[error("invalid tag size for CCM mode: {len} bytes")]
    InvalidTagSize { len: usize },

    /// Payload longer than the length field selected by the nonce size can represent.
    #[error("max payload size reached for CCM mode: {len} bytes (maximum {max})")]
    MaxPayloadSizeReached { len: u64, max: u64 },

    /// Computed authentication tag did not match input tag. Ciphertext, nonce and/or associated
    /// data has been modified since it was sealed.
    #[error("CCM authentication failed (invalid tag)")]
    AuthenticationFailed,

    /// Attempted to instantiate an AES key with an input size that is not 128, 192, or 256 bits.
    #[error("invalid key length: {len} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength { len: usize },

    /// OS RNG failed during random key or nonce generation.
    #[error("OS RNG failed")]
    Rng(#[from] rand_core::OsError),
}
