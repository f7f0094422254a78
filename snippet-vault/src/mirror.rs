use std::sync::Arc;

use reqwest::{Client, Url};

use serde::Serialize;

use vault_data::{Address, ContentEnvelope, ContentType, Network};

use crate::errors::Error;

/// Publish metadata as cached by the social backend.
///
/// A mirror record is never authoritative, the network's tag index can
/// rebuild it at any time.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SnippetMetadata {
    pub wallet_address: Address,

    pub irys_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    pub title: String,

    pub summary: String,

    pub tags: Vec<String>,

    pub network: Network,

    pub content_type: ContentType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    pub is_public: bool,
}

impl SnippetMetadata {
    pub fn new(envelope: &ContentEnvelope, irys_id: impl Into<String>) -> Self {
        Self {
            wallet_address: envelope.user,
            irys_id: irys_id.into(),
            url: envelope.url.clone(),
            title: envelope.title.clone(),
            summary: envelope.summary.clone(),
            tags: envelope.tags.clone(),
            network: envelope.network,
            content_type: envelope.content_type,
            mood: envelope.mood.clone(),
            theme: envelope.theme.clone(),
            is_public: true,
        }
    }
}

/// Client for the metadata store mirroring publishes.
#[derive(Clone)]
pub struct MirrorClient {
    client: Client,
    base_url: Arc<Url>,
}

impl MirrorClient {
    /// The base URL must end with a slash for joins to keep its path.
    pub fn new(base_url: Url) -> Self {
        let base_url = Arc::from(base_url);

        let client = Client::new();

        Self { client, base_url }
    }

    pub async fn save_snippet_metadata(&self, metadata: &SnippetMetadata) -> Result<(), Error> {
        let url = self.base_url.join("save-snippet-metadata")?;

        self.client
            .post(url)
            .json(metadata)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
