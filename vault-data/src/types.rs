use std::fmt::Display;

use serde::{Deserialize, Serialize};

use thiserror::Error;

/// Ethereum wallet address.
///
/// Serialized as a lowercase "0x" prefixed hex string, 42 characters.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, Hash, PartialOrd, Ord,
)]
#[serde(try_from = "String", into = "String")]
pub struct Address([u8; 20]);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AddressError {
    #[error("Address: expected 42 characters, got {0}")]
    Length(usize),

    #[error("Address: missing 0x prefix")]
    Prefix,

    #[error("Address: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl core::str::FromStr for Address {
    type Err = AddressError;

    fn from_str(addr_str: &str) -> Result<Self, Self::Err> {
        Self::try_from(addr_str)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        Self::try_from(string.as_str())
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(str: &str) -> Result<Self, Self::Error> {
        if str.len() != 42 {
            return Err(AddressError::Length(str.len()));
        }

        let hex_str = str.strip_prefix("0x").ok_or(AddressError::Prefix)?;

        let mut bytes = [0u8; 20];
        hex::decode_to_slice(hex_str, &mut bytes)?;

        Ok(Self(bytes))
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; 20] {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<Address> for String {
    fn from(addr: Address) -> Self {
        addr.to_string()
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Address {
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

/// Target instance of the storage network.
///
/// Chosen before submission, never inferred. Each variant routes to
/// distinct node and gateway endpoints.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Network {
    #[default]
    Devnet,
    Mainnet,
}

impl Network {
    /// Base URL of the upload node for this network.
    pub fn node_url(&self) -> &'static str {
        match self {
            Network::Devnet => "https://devnet.irys.xyz/",
            Network::Mainnet => "https://uploader.irys.xyz/",
        }
    }

    /// Base URL of the gateway serving back published bytes.
    pub fn gateway_url(&self) -> &'static str {
        match self {
            Network::Devnet => "https://devnet.irys.xyz/",
            Network::Mainnet => "https://gateway.irys.xyz/",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

    #[test]
    fn address_roundtrip() {
        let addr = Address::try_from(ADDRESS).unwrap();

        assert_eq!(addr.to_string(), ADDRESS);
    }

    #[test]
    fn address_normalize_case() {
        let checksummed = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

        let addr = Address::try_from(checksummed).unwrap();

        assert_eq!(addr.to_string(), ADDRESS);
    }

    #[test]
    fn address_rejects_garbage() {
        assert_eq!(
            Address::try_from("0xabc"),
            Err(AddressError::Length(5))
        );

        assert_eq!(
            Address::try_from("00f39fd6e51aad88f6f4ce6ab8827279cfffb92266"),
            Err(AddressError::Prefix)
        );

        assert!(Address::try_from("0xZZ9fd6e51aad88f6f4ce6ab8827279cfffb92266").is_err());
    }

    #[test]
    fn address_serde_string() {
        let addr = Address::try_from(ADDRESS).unwrap();

        let json = serde_json::to_string(&addr).unwrap();

        assert_eq!(json, format!("\"{}\"", ADDRESS));
        assert_eq!(serde_json::from_str::<Address>(&json).unwrap(), addr);
    }

    #[test]
    fn network_parse() {
        assert_eq!("devnet".parse::<Network>().unwrap(), Network::Devnet);
        assert_eq!("Mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!(Network::Devnet.to_string(), "devnet");
    }

    #[test]
    fn network_endpoints_are_distinct() {
        assert_ne!(Network::Devnet.gateway_url(), Network::Mainnet.gateway_url());
        assert_ne!(Network::Devnet.node_url(), Network::Mainnet.node_url());
    }
}
