//! AES-CCM (Counter with CBC-MAC) authenticated encryption with associated data, as
//! specified by [NIST SP 800-38C] and [RFC 3610].
//!
//! [Ccm] is generic over any [BlockCipher] with 16-byte blocks; [Aes] wraps the RustCrypto
//! AES implementation for 128, 192, and 256-bit [Key]s.
//!
//! [NIST SP 800-38C]: https://csrc.nist.gov/publications/detail/sp/800-38c/final
//! [RFC 3610]: https://www.rfc-editor.org/rfc/rfc3610

mod aesccm;

pub use aesccm::{
    Aes, BlockCipher, CBC_MAC_BLOCK_SIZE, CbcMac, Ccm, Error, Key, KeySize, Result, random_nonce,
};
