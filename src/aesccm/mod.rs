mod block;
mod ccm;
mod error;
mod key;
mod modes;
mod util;

pub use block::{Aes, BlockCipher};
pub use ccm::Ccm;
pub use error::{Error, Result};
pub use key::{Key, KeySize};
pub use modes::{CBC_MAC_BLOCK_SIZE, CbcMac};
pub use util::random_nonce;
