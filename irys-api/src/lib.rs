pub mod errors;
pub mod responses;
pub mod traits;

use std::sync::Arc;

use errors::{Error, NodeError};

use serde::de::DeserializeOwned;

use crate::{responses::*, traits::TxSigner};

use vault_data::{Address, Network, Tag};

use multibase::Base;

use reqwest::{Client, Url};

use bytes::Bytes;

type Result<T> = std::result::Result<T, Error>;

const TRANSACTIONS_QUERY: &str = r#"
query($tags: [TagFilter!], $first: Int) {
    transactions(tags: $tags, first: $first, order: DESC) {
        edges {
            node {
                id
                timestamp
            }
        }
    }
}"#;

#[derive(Clone)]
pub struct IrysService {
    client: Client,
    node_url: Arc<Url>,
    gateway_url: Arc<Url>,
    network: Network,
}

impl Default for IrysService {
    fn default() -> Self {
        Self::new(Network::default())
    }
}

impl IrysService {
    pub fn new(network: Network) -> Self {
        let node_url = Url::parse(network.node_url()).expect("Parsing URI");
        let gateway_url = Url::parse(network.gateway_url()).expect("Parsing URI");

        Self::with_urls(network, node_url, gateway_url)
    }

    /// Point the service at self-hosted node and gateway endpoints.
    pub fn with_urls(network: Network, node_url: Url, gateway_url: Url) -> Self {
        let node_url = Arc::from(node_url);
        let gateway_url = Arc::from(gateway_url);

        let client = Client::new();

        Self {
            client,
            node_url,
            gateway_url,
            network,
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Sign then submit a tagged payload to the network this service
    /// was built for. Returns the receipt.
    pub async fn upload<S>(&self, data: Bytes, tags: Vec<Tag>, signer: &S) -> Result<UploadReceipt>
    where
        S: TxSigner + ?Sized,
    {
        let url = self.node_url.join("tx/ethereum")?;

        let (signature, recovery_id) = signer.sign(&data).await?;

        let request = UploadRequest {
            owner: signer.address().to_string(),
            signature: encode_signature(&signature, recovery_id),
            tags,
            data: Base::Base64.encode(&data),
        };

        let bytes = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await?
            .bytes()
            .await?;

        if let Ok(res) = serde_json::from_slice::<UploadResponse>(&bytes) {
            return Ok(UploadReceipt {
                id: res.id,
                timestamp: res.timestamp,
                size: data.len() as u64,
            });
        }

        let error = serde_json::from_slice::<NodeError>(&bytes)?;

        Err(error.into())
    }

    /// Download the raw bytes of a transaction from the gateway.
    pub async fn cat(&self, id: &str) -> Result<Bytes> {
        let url = self.gateway_url.join(id)?;

        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(bytes)
    }

    /// Deserialize the body of a transaction from the gateway.
    pub async fn gateway_get<T>(&self, id: &str) -> Result<T>
    where
        T: ?Sized + DeserializeOwned,
    {
        let bytes = self.cat(id).await?;

        let node = serde_json::from_slice(&bytes)?;

        Ok(node)
    }

    /// Search the tag index. Returns ids and timestamps of matching
    /// transactions, most recent first, at most `first` of them.
    pub async fn search(&self, tags: Vec<TagFilter>, first: u32) -> Result<Vec<TransactionMeta>> {
        let url = self.node_url.join("graphql")?;

        let request = GraphQlRequest {
            query: TRANSACTIONS_QUERY,
            variables: TransactionsVariables { tags, first },
        };

        let bytes = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await?
            .bytes()
            .await?;

        let response = serde_json::from_slice::<GraphQlResponse>(&bytes)?;

        let data = match response.data {
            Some(data) => data,
            None => {
                let message = response
                    .errors
                    .into_iter()
                    .map(|error| error.message)
                    .collect::<Vec<_>>()
                    .join(", ");

                return Err(Error::GraphQl(message));
            }
        };

        let metas = data
            .transactions
            .edges
            .into_iter()
            .map(|edge| edge.node)
            .collect();

        Ok(metas)
    }

    /// Balance loaded on the upload node for this address, atomic units.
    pub async fn balance(&self, address: Address) -> Result<u128> {
        let url = self.node_url.join("account/balance/ethereum")?;

        let bytes = self
            .client
            .get(url)
            .query(&[("address", address.to_string())])
            .send()
            .await?
            .bytes()
            .await?;

        if let Ok(res) = serde_json::from_slice::<BalanceResponse>(&bytes) {
            return Ok(res.balance.parse()?);
        }

        let error = serde_json::from_slice::<NodeError>(&bytes)?;

        Err(error.into())
    }

    /// Credit the upload account. The signature authorizes moving
    /// `amount` atomic units from the signer's wallet.
    pub async fn fund<S>(&self, amount: u128, signer: &S) -> Result<FundReceipt>
    where
        S: TxSigner + ?Sized,
    {
        let url = self.node_url.join("account/fund/ethereum")?;

        let address = signer.address();
        let amount = amount.to_string();

        let signing_input = format!("{}:{}", address, amount);
        let (signature, recovery_id) = signer.sign(signing_input.as_bytes()).await?;

        let request = FundRequest {
            address: address.to_string(),
            amount,
            signature: encode_signature(&signature, recovery_id),
        };

        let bytes = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await?
            .bytes()
            .await?;

        if let Ok(res) = serde_json::from_slice::<FundReceipt>(&bytes) {
            return Ok(res);
        }

        let error = serde_json::from_slice::<NodeError>(&bytes)?;

        Err(error.into())
    }

    /// Node reachability and version probe.
    pub async fn info(&self) -> Result<NodeInfo> {
        let url = self.node_url.join("info")?;

        let bytes = self.client.get(url).send().await?.bytes().await?;

        if let Ok(res) = serde_json::from_slice::<NodeInfo>(&bytes) {
            return Ok(res);
        }

        let error = serde_json::from_slice::<NodeError>(&bytes)?;

        Err(error.into())
    }
}

/// Hex encoding of a 65 byte r || s || v recoverable signature.
fn encode_signature(signature: &k256::ecdsa::Signature, recovery_id: k256::ecdsa::RecoveryId) -> String {
    let mut bytes = signature.to_bytes().to_vec();
    bytes.push(27 + recovery_id.to_byte());

    format!("0x{}", hex::encode(bytes))
}
