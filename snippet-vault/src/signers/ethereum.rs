use async_trait::async_trait;

use sha3::{Digest, Keccak256};

use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};

use irys_api::traits::TxSigner;

use vault_data::Address;

use crate::errors::Error;

/// Signs with a locally held secp256k1 key, Ethereum personal message style.
#[derive(Clone)]
pub struct EthereumSigner {
    signing_key: SigningKey,
    address: Address,
}

impl EthereumSigner {
    pub fn new(signing_key: SigningKey) -> Self {
        let address = public_key_address(signing_key.verifying_key());

        Self {
            signing_key,
            address,
        }
    }

    /// Key material as a hex string, with or without the 0x prefix.
    pub fn from_hex(private_key: &str) -> Result<Self, Error> {
        let hex_str = private_key.strip_prefix("0x").unwrap_or(private_key);

        let bytes = hex::decode(hex_str)?;
        let signing_key = SigningKey::from_slice(&bytes)?;

        Ok(Self::new(signing_key))
    }

    /// Throwaway key, for tests and devnet experiments.
    pub fn random() -> Self {
        Self::new(SigningKey::random(&mut rand_core::OsRng))
    }

    pub fn address(&self) -> Address {
        self.address
    }
}

#[async_trait(?Send)]
impl TxSigner for EthereumSigner {
    fn address(&self) -> Address {
        self.address
    }

    async fn sign(
        &self,
        signing_input: &[u8],
    ) -> Result<(Signature, RecoveryId), irys_api::errors::Error> {
        let mut eth_message =
            format!("\x19Ethereum Signed Message:\n{}", signing_input.len()).into_bytes();
        eth_message.extend_from_slice(signing_input);

        let digest = Keccak256::new_with_prefix(eth_message);

        let (signature, recovery_id) = self.signing_key.sign_digest_recoverable(digest)?;

        Ok((signature, recovery_id))
    }
}

fn public_key_address(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);

    let digest = Keccak256::digest(&point.as_bytes()[1..]);

    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&digest[12..]);

    bytes.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    // First well known development account of the hardhat node.
    const PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const ADDRESS: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

    #[test]
    fn known_key_address() {
        let signer = EthereumSigner::from_hex(PRIVATE_KEY).unwrap();

        assert_eq!(signer.address().to_string(), ADDRESS);
    }

    #[test]
    fn from_hex_accepts_unprefixed() {
        let signer = EthereumSigner::from_hex(&PRIVATE_KEY[2..]).unwrap();

        assert_eq!(signer.address().to_string(), ADDRESS);
    }

    #[test]
    fn from_hex_rejects_garbage() {
        assert!(EthereumSigner::from_hex("0xnothex").is_err());
        assert!(EthereumSigner::from_hex("0xabcd").is_err());
    }

    #[tokio::test]
    async fn sign_recover() {
        let signer = EthereumSigner::from_hex(PRIVATE_KEY).unwrap();

        let signing_input = b"Hello World!";

        let (signature, recovery_id) = signer.sign(signing_input).await.unwrap();

        let mut eth_message =
            format!("\x19Ethereum Signed Message:\n{}", signing_input.len()).into_bytes();
        eth_message.extend_from_slice(signing_input);

        let digest = Keccak256::new_with_prefix(eth_message);

        let recovered_key =
            VerifyingKey::recover_from_digest(digest, &signature, recovery_id).unwrap();

        assert_eq!(public_key_address(&recovered_key), signer.address());
    }

    #[tokio::test]
    async fn random_signers_differ() {
        let first = EthereumSigner::random();
        let second = EthereumSigner::random();

        assert_ne!(first.address(), second.address());
    }
}
