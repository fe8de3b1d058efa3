mod cbc_mac;
mod ctr;
pub(crate) mod util;

pub use cbc_mac::{CBC_MAC_BLOCK_SIZE, CbcMac};
pub(crate) use ctr::Ctr;
