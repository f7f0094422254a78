use serde::{Deserialize, Serialize};

/// Namespace of this application on the storage network.
pub const APPLICATION_ID: &str = "IrysSnippetVault";

/// MIME type tag of every envelope payload.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Name/value pair attached to a transaction, enabling later search.
///
/// Names are not unique, repeatable tags are repeated entries.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
