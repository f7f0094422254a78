pub mod account;
pub mod publish;
pub mod snippets;

use snippet_vault::{errors::Error, signers::EthereumSigner};

/// Wallet key of the upload account.
pub const PRIVATE_KEY_ENV: &str = "IRYS_PRIVATE_KEY";

pub fn signer() -> Result<EthereumSigner, Error> {
    match std::env::var(PRIVATE_KEY_ENV) {
        Ok(private_key) => EthereumSigner::from_hex(&private_key),
        Err(_) => Err(Error::NotInitialized),
    }
}
