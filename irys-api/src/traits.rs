use async_trait::async_trait;

use k256::ecdsa::{RecoveryId, Signature};

use vault_data::Address;

use crate::errors::Error;

/// Proof of authorship for transactions submitted to the network.
///
/// Implementors produce an Ethereum personal message signature over
/// arbitrary bytes, recoverable to the address returned by `address`.
#[async_trait(?Send)]
pub trait TxSigner {
    fn address(&self) -> Address;

    async fn sign(&self, signing_input: &[u8]) -> Result<(Signature, RecoveryId), Error>;
}
