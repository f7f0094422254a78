mod cli;

use clap::{Parser, Subcommand};

use tracing_subscriber::EnvFilter;

use crate::cli::{
    account::{account_cli, AccountCLI},
    publish::{publish_cli, PublishCLI},
    snippets::{snippets_cli, SnippetsCLI},
};

#[derive(Parser)]
#[command(name = "snippet-vault", bin_name = "snippet-vault", version, about, long_about = None, rename_all = "kebab-case")]
struct SnippetVault {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Clip content and publish it permanently.
    Publish(PublishCLI),

    /// Browse previously published snippets.
    Snippets(SnippetsCLI),

    /// Manage the upload account.
    #[command(subcommand)]
    Account(AccountCLI),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = SnippetVault::parse();

    match cli.command {
        Commands::Publish(args) => publish_cli(args).await,
        Commands::Snippets(args) => snippets_cli(args).await,
        Commands::Account(args) => account_cli(args).await,
    }
}
