use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    /// Log debug events to stderr (overridden by RUST_LOG).
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt input to output (written as nonce || ciphertext || tag)
    Encrypt(EncryptArgs),

    /// Decrypt input to output
    Decrypt(CommonArgs),
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct CommonArgs {
    /// Input file path.
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Output file path.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Key file path.
    #[arg(short = 'k', long = "key")]
    pub key: PathBuf,

    /// Nonce size in bytes (7 to 13).
    #[arg(
        short = 'n',
        long = "nonce-size",
        default_value_t = 13,
        value_parser = clap::value_parser!(u8).range(7..=13),
    )]
    pub nonce_size: u8,

    /// Tag size in bytes (even, 4 to 16).
    #[arg(short = 't', long = "tag-size", default_value_t = 16)]
    pub tag_size: u8,

    /// Associated data, provided as hex string (authenticated, not encrypted, not stored)
    #[arg(long = "aad", value_name = "HEX")]
    pub aad: Option<String>,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Use this nonce instead of a random one. Never reuse a nonce with the same key.
    #[arg(long = "nonce", value_name = "HEX")]
    pub nonce: Option<String>,

    /// Generate a random key (written to path specified by key)
    #[arg(long = "gen-key")]
    pub gen_key: bool,

    /// Only valid with --gen-key.
    #[arg(
        long = "key-size",
        value_enum,
        default_value_t = KeySize::Bits128,
        requires = "gen_key"
    )]
    pub key_size: KeySize,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum KeySize {
    #[value(name = "128")]
    Bits128,
    #[value(name = "192")]
    Bits192,
    #[value(name = "256")]
    Bits256,
}

impl From<KeySize> for aesccm::KeySize {
    fn from(size: KeySize) -> Self {
        match size {
            KeySize::Bits128 => aesccm::KeySize::Bits128,
            KeySize::Bits192 => aesccm::KeySize::Bits192,
            KeySize::Bits256 => aesccm::KeySize::Bits256,
        }
    }
}
