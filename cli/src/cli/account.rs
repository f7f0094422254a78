use clap::{Parser, Subcommand};

use irys_api::IrysService;

use snippet_vault::{errors::Error, publisher::Publisher, signers::EthereumSigner, utils};

use vault_data::Network;

use super::signer;

#[derive(Debug, Subcommand)]
pub enum AccountCLI {
    /// Print the wallet address of the configured signing key.
    Address,

    /// Print the upload account balance.
    Balance(NetworkArgs),

    /// Credit the upload account from the wallet.
    Fund(Fund),
}

#[derive(Debug, Parser)]
pub struct NetworkArgs {
    /// Storage network the account lives on.
    #[arg(long, default_value = "devnet")]
    network: Network,
}

#[derive(Debug, Parser)]
pub struct Fund {
    #[command(flatten)]
    network: NetworkArgs,

    /// Token amount, decimal. 18 decimal places at most.
    #[arg(short, long)]
    amount: String,
}

pub async fn account_cli(cli: AccountCLI) {
    let res = match cli {
        AccountCLI::Address => address(),
        AccountCLI::Balance(args) => balance(args).await,
        AccountCLI::Fund(args) => fund(args).await,
    };

    if let Err(e) = res {
        eprintln!("❗ Irys: {:#?}", e);
    }
}

fn address() -> Result<(), Error> {
    let signer = signer()?;

    println!("🔑 Wallet Address {}", signer.address());

    Ok(())
}

fn publisher(network: Network) -> Result<Publisher<EthereumSigner>, Error> {
    Ok(Publisher::new(IrysService::new(network), signer()?))
}

async fn balance(args: NetworkArgs) -> Result<(), Error> {
    let publisher = publisher(args.network)?;

    let balance = publisher.balance().await?;

    println!(
        "💰 Balance {} {} ({} atomic)",
        balance.formatted, balance.token, balance.atomic
    );

    Ok(())
}

async fn fund(args: Fund) -> Result<(), Error> {
    let Fund { network, amount } = args;

    let publisher = publisher(network.network)?;

    let atomic = utils::to_atomic(&amount)?;

    let receipt = publisher.fund(atomic).await?;

    println!(
        "✅ Funded Account {} ({} atomic)",
        receipt.id, receipt.amount
    );

    Ok(())
}
