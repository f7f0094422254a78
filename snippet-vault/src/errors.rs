use thiserror::Error;

use vault_data::Network;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Irys: {0}")]
    IrysApi(#[from] irys_api::errors::Error),

    #[error("IO: {0}")]
    IO(#[from] std::io::Error),

    #[error("Serde: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Reqwest: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Parse: {0}")]
    Parse(#[from] url::ParseError),

    #[error("Hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Signature: {0}")]
    Signature(#[from] k256::ecdsa::Error),

    #[error("ParseInt: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Vault: Client is not initialized, configure a signing key first")]
    NotInitialized,

    #[error("Vault: Publish failed, {0}")]
    PublishFailed(#[source] irys_api::errors::Error),

    #[error("Vault: Cannot publish, {0} must not be empty")]
    Validation(&'static str),

    #[error("Vault: Envelope targets {envelope} but this client uploads to {client}")]
    NetworkMismatch { envelope: Network, client: Network },

    #[error("Vault: Cannot process image, please use a supported image type")]
    Image,

    #[error("Vault: Cannot parse amount, {0}")]
    Amount(&'static str),
}
