mod args;

use args::{Cli, Commands};
use clap::Parser;

use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use aesccm::{Aes, Ccm, Key};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid hex digit {0:?}")]
    InvalidHex(char),

    #[error("input is {len} bytes, too short to hold a {nonce_size}-byte nonce")]
    MissingNonce { len: usize, nonce_size: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Ccm(#[from] aesccm::Error),
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match aesccm_cli(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn aesccm_cli(args: Cli) -> Result<(), CliError> {
    match args.command {
        Commands::Encrypt(enc) => {
            let common = enc.common;
            let nonce_size = usize::from(common.nonce_size);

            let plaintext = fs::read(&common.input)?;

            // read or generate key
            let key = if enc.gen_key {
                let key = Key::random(enc.key_size.into())?;
                fs::write(&common.key, key.as_bytes())?;
                debug!(path = %common.key.display(), "wrote generated key");
                key
            } else {
                Key::try_from_slice(&fs::read(&common.key)?)?
            };

            let aad = parse_hex_opt(common.aad.as_deref())?;
            let nonce = match enc.nonce {
                Some(hex) => parse_hex(&hex)?,
                None => aesccm::random_nonce(nonce_size)?,
            };

            let aes = Aes::new(&key);
            let mut ccm = Ccm::new(&aes, nonce_size, usize::from(common.tag_size))?;

            let start = Instant::now();

            // nonce is carried in front of the sealed message
            let mut out = nonce.clone();
            ccm.seal_to(&mut out, &nonce, &plaintext, &aad)?;

            let duration = start.elapsed();

            fs::write(&common.output, &out)?;
            info!(bytes = plaintext.len(), "sealed");
            println!(
                "Encrypted {} bytes in {} ms",
                plaintext.len(),
                duration.as_millis()
            );
            Ok(())
        }
        Commands::Decrypt(common) => {
            let nonce_size = usize::from(common.nonce_size);

            let input = fs::read(&common.input)?;
            let key = Key::try_from_slice(&fs::read(&common.key)?)?;
            let aad = parse_hex_opt(common.aad.as_deref())?;

            if input.len() < nonce_size {
                return Err(CliError::MissingNonce {
                    len: input.len(),
                    nonce_size,
                });
            }
            let (nonce, sealed) = input.split_at(nonce_size);

            let aes = Aes::new(&key);
            let mut ccm = Ccm::new(&aes, nonce_size, usize::from(common.tag_size))?;

            let start = Instant::now();
            let plaintext = ccm.open(nonce, sealed, &aad)?;
            let duration = start.elapsed();

            fs::write(&common.output, &plaintext)?;
            info!(bytes = plaintext.len(), "opened");
            println!(
                "Decrypted {} bytes in {} ms",
                plaintext.len(),
                duration.as_millis()
            );
            Ok(())
        }
    }
}

fn parse_hex_opt(s: Option<&str>) -> Result<Vec<u8>, CliError> {
    s.map_or_else(|| Ok(Vec::new()), parse_hex)
}

fn parse_hex(s: &str) -> Result<Vec<u8>, CliError> {
    let mut nibbles = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(CliError::InvalidHex(c)))
        .collect::<Result<Vec<u8>, _>>()?;

    if nibbles.len() % 2 == 1 {
        nibbles.insert(0, 0);
    }

    Ok(nibbles.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect())
}
