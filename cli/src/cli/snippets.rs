use clap::{Parser, Subcommand};

use futures_util::{pin_mut, StreamExt};

use irys_api::IrysService;

use snippet_vault::{errors::Error, Vault};

use vault_data::{Address, Network, Snippet};

#[derive(Debug, Parser)]
pub struct SnippetsCLI {
    /// Storage network to read from.
    #[arg(long, default_value = "devnet")]
    network: Network,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every snippet a wallet published, most recent first.
    List(List),

    /// Resolve one transaction into a snippet.
    Resolve(Resolve),
}

#[derive(Debug, Parser)]
struct List {
    /// Wallet address of the publisher.
    #[arg(short, long)]
    wallet: Address,
}

#[derive(Debug, Parser)]
struct Resolve {
    /// Transaction identifier.
    #[arg(short, long)]
    id: String,
}

pub async fn snippets_cli(cli: SnippetsCLI) {
    let vault = Vault::new(IrysService::new(cli.network));

    let res = match cli.cmd {
        Command::List(args) => list(&vault, args).await,
        Command::Resolve(args) => resolve(&vault, args).await,
    };

    if let Err(e) = res {
        eprintln!("❗ Irys: {:#?}", e);
    }
}

async fn list(vault: &Vault, args: List) -> Result<(), Error> {
    let List { wallet } = args;

    let stream = vault.stream_wallet_snippets(wallet);
    pin_mut!(stream);

    let mut count = 0usize;

    while let Some(snippet) = stream.next().await {
        print_snippet(&snippet);

        count += 1;
    }

    println!("🗃️ {} Snippets On {}", count, vault.network());

    Ok(())
}

async fn resolve(vault: &Vault, args: Resolve) -> Result<(), Error> {
    let Resolve { id } = args;

    let snippet = vault.resolve(id).await?;

    println!("{}", serde_json::to_string_pretty(&snippet.envelope)?);

    Ok(())
}

fn print_snippet(snippet: &Snippet) {
    println!(
        "📌 {} [{}]\n   {}\n   🏷️ {}\n   🔗 {}",
        snippet.envelope.title,
        snippet.envelope.content_type,
        snippet.envelope.summary,
        snippet.envelope.tags.join(", "),
        snippet.gateway_url(),
    );
}
