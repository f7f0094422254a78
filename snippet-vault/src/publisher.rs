use crate::{
    errors::Error,
    mirror::{MirrorClient, SnippetMetadata},
};

use bytes::Bytes;

use chrono::Utc;

use irys_api::{
    responses::{FundReceipt, UploadReceipt},
    traits::TxSigner,
    IrysService,
};

use tracing::warn;

use vault_data::{Address, ContentEnvelope, ContentType, Network, Summary, APPLICATION_ID};

/// Payment token of the upload accounts.
pub const TOKEN: &str = "ethereum";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balance {
    pub atomic: u128,
    pub formatted: String,
    pub token: &'static str,
}

/// Write side of the vault.
///
/// Owns the storage network client and the signing identity, explicitly
/// constructed by the caller. One publisher writes to one network.
pub struct Publisher<T>
where
    T: TxSigner,
{
    irys: IrysService,
    signer: T,
    mirror: Option<MirrorClient>,
}

impl<T> Publisher<T>
where
    T: TxSigner,
{
    pub fn new(irys: IrysService, signer: T) -> Self {
        Self {
            irys,
            signer,
            mirror: None,
        }
    }

    /// Mirror publish metadata to a social backend, best effort.
    pub fn with_mirror(mut self, mirror: MirrorClient) -> Self {
        self.mirror = Some(mirror);

        self
    }

    pub fn address(&self) -> Address {
        self.signer.address()
    }

    pub fn network(&self) -> Network {
        self.irys.network()
    }

    /// Probe the upload node before accepting user actions.
    pub async fn ready(&self) -> Result<(), Error> {
        self.irys.info().await?;

        Ok(())
    }

    /// Clip a web page extract.
    pub async fn clip_web_snippet(
        &self,
        url: String,
        title: String,
        content: String,
        summary: Summary,
    ) -> Result<UploadReceipt, Error> {
        let envelope = self.envelope(ContentType::WebSnippet, Some(url), title, content, summary);

        self.publish(&envelope).await
    }

    /// Clip authored text.
    pub async fn clip_text(
        &self,
        title: String,
        content: String,
        summary: Summary,
    ) -> Result<UploadReceipt, Error> {
        let envelope = self.envelope(ContentType::Text, None, title, content, summary);

        self.publish(&envelope).await
    }

    /// Clip an image, already encoded as a base64 data URL.
    pub async fn clip_image(
        &self,
        title: String,
        data_url: String,
        summary: Summary,
    ) -> Result<UploadReceipt, Error> {
        let envelope = self.envelope(ContentType::Image, None, title, data_url, summary);

        self.publish(&envelope).await
    }

    /// Publish an envelope permanently.
    ///
    /// Published envelopes are immutable, corrections are new envelopes.
    /// Failures are not retried, funding problems need user intervention.
    pub async fn publish(&self, envelope: &ContentEnvelope) -> Result<UploadReceipt, Error> {
        if envelope.title.trim().is_empty() {
            return Err(Error::Validation("title"));
        }

        if envelope.content.is_empty() {
            return Err(Error::Validation("content"));
        }

        if envelope.network != self.irys.network() {
            return Err(Error::NetworkMismatch {
                envelope: envelope.network,
                client: self.irys.network(),
            });
        }

        // The exact serialized bytes are what the network addresses,
        // image data URLs pass through unmodified.
        let data = Bytes::from(serde_json::to_vec(envelope)?);
        let tags = envelope.tag_set();

        let receipt = self
            .irys
            .upload(data, tags, &self.signer)
            .await
            .map_err(Error::PublishFailed)?;

        if let Some(mirror) = &self.mirror {
            let metadata = SnippetMetadata::new(envelope, &receipt.id);

            // The authoritative record already exists on the network.
            if let Err(e) = mirror.save_snippet_metadata(&metadata).await {
                warn!("mirror write for {} failed: {}", receipt.id, e);
            }
        }

        Ok(receipt)
    }

    /// Upload account balance, atomic and formatted.
    pub async fn balance(&self) -> Result<Balance, Error> {
        let atomic = self.irys.balance(self.signer.address()).await?;

        Ok(Balance {
            atomic,
            formatted: crate::utils::from_atomic(atomic),
            token: TOKEN,
        })
    }

    /// Credit the upload account with atomic units from the wallet.
    pub async fn fund(&self, amount: u128) -> Result<FundReceipt, Error> {
        let receipt = self.irys.fund(amount, &self.signer).await?;

        Ok(receipt)
    }

    fn envelope(
        &self,
        content_type: ContentType,
        url: Option<String>,
        title: String,
        content: String,
        summary: Summary,
    ) -> ContentEnvelope {
        let Summary {
            summary,
            tags,
            mood,
            theme,
        } = summary;

        ContentEnvelope {
            application_id: APPLICATION_ID.to_owned(),
            user: self.signer.address(),
            content_type,
            url,
            title,
            content,
            summary,
            tags,
            mood,
            theme,
            timestamp: Utc::now().timestamp_millis(),
            network: self.irys.network(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::signers::EthereumSigner;

    fn devnet_publisher() -> Publisher<EthereumSigner> {
        Publisher::new(IrysService::new(Network::Devnet), EthereumSigner::random())
    }

    fn summary() -> Summary {
        Summary {
            summary: "A haiku about a pond.".to_owned(),
            tags: vec!["poetry".to_owned(), "nature".to_owned()],
            mood: None,
            theme: None,
        }
    }

    #[test]
    fn envelope_is_stamped() {
        let publisher = devnet_publisher();

        let envelope = publisher.envelope(
            ContentType::Text,
            None,
            "Haiku".to_owned(),
            "old pond...".to_owned(),
            summary(),
        );

        assert_eq!(envelope.application_id, APPLICATION_ID);
        assert_eq!(envelope.user, publisher.address());
        assert_eq!(envelope.network, Network::Devnet);
        assert_eq!(envelope.url, None);
        assert_eq!(envelope.tags, vec!["poetry", "nature"]);
        assert!(envelope.timestamp > 0);
    }

    #[tokio::test]
    async fn publish_rejects_empty_title() {
        let publisher = devnet_publisher();

        let envelope = publisher.envelope(
            ContentType::Text,
            None,
            "  ".to_owned(),
            "old pond...".to_owned(),
            summary(),
        );

        assert!(matches!(
            publisher.publish(&envelope).await,
            Err(Error::Validation("title"))
        ));
    }

    #[tokio::test]
    async fn publish_rejects_empty_content() {
        let publisher = devnet_publisher();

        let envelope = publisher.envelope(
            ContentType::Text,
            None,
            "Haiku".to_owned(),
            String::new(),
            summary(),
        );

        assert!(matches!(
            publisher.publish(&envelope).await,
            Err(Error::Validation("content"))
        ));
    }

    #[tokio::test]
    async fn publish_rejects_network_mismatch() {
        let publisher = devnet_publisher();

        let mut envelope = publisher.envelope(
            ContentType::Text,
            None,
            "Haiku".to_owned(),
            "old pond...".to_owned(),
            summary(),
        );
        envelope.network = Network::Mainnet;

        assert!(matches!(
            publisher.publish(&envelope).await,
            Err(Error::NetworkMismatch {
                envelope: Network::Mainnet,
                client: Network::Devnet,
            })
        ));
    }
}
