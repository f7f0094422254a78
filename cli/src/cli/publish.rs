use std::path::PathBuf;

use clap::{Parser, Subcommand};

use irys_api::{responses::UploadReceipt, IrysService};

use snippet_vault::{
    errors::Error,
    mirror::MirrorClient,
    publisher::Publisher,
    signers::EthereumSigner,
    utils::image_data_url,
};

use url::Url;

use vault_data::{Network, Summary};

use super::signer;

#[derive(Debug, Parser)]
pub struct PublishCLI {
    /// Storage network receiving the write.
    #[arg(long, default_value = "devnet")]
    network: Network,

    /// Social backend mirroring publish metadata, best effort.
    /// Must end with a slash.
    #[arg(long)]
    mirror: Option<Url>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Clip a web page extract.
    Web(Web),

    /// Clip authored text.
    Text(Text),

    /// Clip an image file.
    Image(Image),
}

#[derive(Debug, Parser)]
struct Web {
    /// Source URL of the extract.
    #[arg(long)]
    url: String,

    /// Display title.
    #[arg(long)]
    title: String,

    /// The extracted text.
    #[arg(long)]
    content: String,

    #[command(flatten)]
    summary: SummaryArgs,
}

#[derive(Debug, Parser)]
struct Text {
    /// Display title.
    #[arg(long)]
    title: String,

    /// The authored text.
    #[arg(long)]
    content: String,

    #[command(flatten)]
    summary: SummaryArgs,
}

#[derive(Debug, Parser)]
struct Image {
    /// Display title.
    #[arg(long)]
    title: String,

    /// Path to the image file.
    #[arg(long)]
    path: PathBuf,

    #[command(flatten)]
    summary: SummaryArgs,
}

/// Output of the summarization collaborator, passed through verbatim.
#[derive(Debug, Parser)]
struct SummaryArgs {
    #[arg(long)]
    summary: String,

    /// Content tags, repeatable, order preserved.
    #[arg(long = "tag")]
    tags: Vec<String>,

    #[arg(long)]
    mood: Option<String>,

    #[arg(long)]
    theme: Option<String>,
}

impl From<SummaryArgs> for Summary {
    fn from(args: SummaryArgs) -> Self {
        Self {
            summary: args.summary,
            tags: args.tags,
            mood: args.mood,
            theme: args.theme,
        }
    }
}

pub async fn publish_cli(cli: PublishCLI) {
    let PublishCLI {
        network,
        mirror,
        cmd,
    } = cli;

    let res = match build_publisher(network, mirror).await {
        Ok(publisher) => match cmd {
            Command::Web(args) => web(&publisher, args).await,
            Command::Text(args) => text(&publisher, args).await,
            Command::Image(args) => image(&publisher, args).await,
        },
        Err(e) => Err(e),
    };

    match res {
        Ok(receipt) => {
            println!(
                "✅ Published Snippet {}\n🔗 {}{}",
                receipt.id,
                network.gateway_url(),
                receipt.id
            );
        }
        Err(e) => eprintln!("❗ Irys: {:#?}", e),
    }
}

async fn build_publisher(
    network: Network,
    mirror: Option<Url>,
) -> Result<Publisher<EthereumSigner>, Error> {
    let irys = IrysService::new(network);

    let mut publisher = Publisher::new(irys, signer()?);

    if let Some(base_url) = mirror {
        publisher = publisher.with_mirror(MirrorClient::new(base_url));
    }

    publisher.ready().await?;

    Ok(publisher)
}

async fn web(publisher: &Publisher<EthereumSigner>, args: Web) -> Result<UploadReceipt, Error> {
    let Web {
        url,
        title,
        content,
        summary,
    } = args;

    publisher
        .clip_web_snippet(url, title, content, summary.into())
        .await
}

async fn text(publisher: &Publisher<EthereumSigner>, args: Text) -> Result<UploadReceipt, Error> {
    let Text {
        title,
        content,
        summary,
    } = args;

    publisher.clip_text(title, content, summary.into()).await
}

async fn image(publisher: &Publisher<EthereumSigner>, args: Image) -> Result<UploadReceipt, Error> {
    let Image {
        title,
        path,
        summary,
    } = args;

    let data_url = image_data_url(&path).await?;

    publisher.clip_image(title, data_url, summary.into()).await
}
