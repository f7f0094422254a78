use serde::{Deserialize, Serialize};

use vault_data::Tag;

/// Transaction as submitted to the upload node.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UploadRequest {
    /// Wallet address of the publisher, lowercase hex.
    pub owner: String,

    /// 65 byte recoverable signature over the payload, hex.
    pub signature: String,

    pub tags: Vec<Tag>,

    /// Payload bytes, base64.
    pub data: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UploadResponse {
    pub id: String,

    pub timestamp: i64,
}

/// Receipt for a successful submission.
///
/// The id is the only durable handle needed, the gateway URL is
/// `<gateway-base>/<id>`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub id: String,

    pub timestamp: i64,

    pub size: u64,
}

/// Tag filter of a tag index search, matches any of the values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TagFilter {
    pub name: String,
    pub values: Vec<String>,
}

impl TagFilter {
    pub fn new<V>(name: impl Into<String>, values: V) -> Self
    where
        V: IntoIterator,
        V::Item: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct GraphQlRequest {
    pub query: &'static str,
    pub variables: TransactionsVariables,
}

#[derive(Serialize, Debug)]
pub struct TransactionsVariables {
    pub tags: Vec<TagFilter>,
    pub first: u32,
}

#[derive(Deserialize, Debug)]
pub struct GraphQlResponse {
    pub data: Option<TransactionsData>,

    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Deserialize, Debug)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Deserialize, Debug)]
pub struct TransactionsData {
    pub transactions: TransactionConnection,
}

#[derive(Deserialize, Debug)]
pub struct TransactionConnection {
    pub edges: Vec<TransactionEdge>,
}

#[derive(Deserialize, Debug)]
pub struct TransactionEdge {
    pub node: TransactionMeta,
}

/// Tag index search result, most recent first.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransactionMeta {
    pub id: String,

    pub timestamp: i64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BalanceResponse {
    pub balance: String,
}

#[derive(Serialize, Debug)]
pub struct FundRequest {
    pub address: String,

    /// Atomic units, decimal string.
    pub amount: String,

    pub signature: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FundReceipt {
    pub id: String,

    pub amount: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NodeInfo {
    pub version: String,
}
