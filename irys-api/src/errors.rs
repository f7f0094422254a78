use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Serde: {0}")]
    Serde(#[from] serde_json::error::Error),

    #[error("Reqwest: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Parse: {0}")]
    Parse(#[from] url::ParseError),

    #[error("ParseInt: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Signature: {0}")]
    Signature(#[from] k256::ecdsa::Error),

    #[error("Node: {0}")]
    Node(#[from] NodeError),

    #[error("GraphQl: {0}")]
    GraphQl(String),
}

/// Error body returned by the upload node.
#[derive(Serialize, Deserialize, Debug)]
pub struct NodeError {
    pub error: String,
}

impl std::error::Error for NodeError {}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<NodeError> for std::io::Error {
    fn from(error: NodeError) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, error)
    }
}
