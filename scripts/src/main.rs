use clap::Parser;
use eyre::Result;
use scripts::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().pretty().init();

    Cli::parse().run().await?;
    Ok(())
}
