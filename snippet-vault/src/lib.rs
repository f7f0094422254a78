pub mod errors;
pub mod mirror;
pub mod publisher;
pub mod signers;
pub mod utils;

use std::cmp::Reverse;

use errors::Error;

use futures::{
    stream::{self, FuturesUnordered},
    Stream, StreamExt,
};

use irys_api::{responses::TagFilter, IrysService};

use tracing::warn;

use vault_data::{Address, ContentEnvelope, Network, Snippet, APPLICATION_ID};

/// Page cap of the tag index query.
pub const MAX_QUERY_RESULTS: u32 = 100;

/// Read side of the vault.
///
/// Queries the storage network's tag index, the eventually consistent
/// source of truth the metadata store mirror is reconciled against.
/// Never mutates anything.
#[derive(Default, Clone)]
pub struct Vault {
    irys: IrysService,
}

impl Vault {
    pub fn new(irys: IrysService) -> Self {
        Self { irys }
    }

    pub fn network(&self) -> Network {
        self.irys.network()
    }

    /// Lazily stream every snippet this wallet published, most recent
    /// first, at most `MAX_QUERY_RESULTS` of them.
    ///
    /// Transactions that fail to resolve are skipped, partial results
    /// are always acceptable on this best effort read path.
    pub fn stream_wallet_snippets(&self, wallet: Address) -> impl Stream<Item = Snippet> + '_ {
        stream::once(async move {
            let snippets = match self.wallet_snippets(wallet).await {
                Ok(snippets) => snippets,
                Err(e) => {
                    warn!("tag index search for {} failed: {}", wallet, e);

                    Vec::new()
                }
            };

            stream::iter(snippets)
        })
        .flatten()
    }

    /// Eager form of `stream_wallet_snippets`, surfacing search errors.
    pub async fn wallet_snippets(&self, wallet: Address) -> Result<Vec<Snippet>, Error> {
        let filters = vec![
            TagFilter::new("application-id", [APPLICATION_ID]),
            TagFilter::new("user", [wallet.to_string()]),
        ];

        let metas = self.irys.search(filters, MAX_QUERY_RESULTS).await?;

        // Body resolution has no ordering dependency, only the final
        // sort is ordered.
        let stream: FuturesUnordered<_> = metas
            .into_iter()
            .map(|meta| async move {
                match self.irys.gateway_get::<ContentEnvelope>(&meta.id).await {
                    Ok(envelope) => Some(Snippet {
                        id: meta.id,
                        envelope,
                    }),
                    Err(e) => {
                        warn!("dropping transaction {}: {}", meta.id, e);

                        None
                    }
                }
            })
            .collect();

        let snippets = stream
            .filter_map(|option| async move { option })
            .collect()
            .await;

        Ok(order_snippets(snippets, wallet))
    }

    /// Resolve a single transaction into a snippet.
    pub async fn resolve(&self, id: impl Into<String>) -> Result<Snippet, Error> {
        let id = id.into();

        let envelope = self.irys.gateway_get::<ContentEnvelope>(&id).await?;

        Ok(Snippet { id, envelope })
    }
}

/// Drop envelopes claiming another wallet, then sort most recent first.
fn order_snippets(mut snippets: Vec<Snippet>, wallet: Address) -> Vec<Snippet> {
    snippets.retain(|snippet| snippet.envelope.user == wallet);

    snippets.sort_unstable_by_key(|snippet| Reverse(snippet.timestamp()));

    snippets
}
