mod card;
mod lookup;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cardstock-cli")]
#[command(about = "Product card lookup command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up a product by SKU and print the normalized record
    Lookup {
        /// SKU as typed or scanned; non-digit characters are stripped
        sku: String,

        /// Print the record as pretty JSON instead of a card preview
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Lookup { sku, json } => lookup::run(&sku, json).await,
    }
}
