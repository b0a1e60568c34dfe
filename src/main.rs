// src/main.rs
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use tea_disperser::Disperser;
use tea_disperser::chain::RpcChainClient;
use tea_disperser::config::{self, DisperserConfig};
use tea_disperser::pool::WalletPool;
use tea_disperser::{prompt, recipients};

#[derive(Parser, Debug)]
#[command(version)]
#[command(about = "Distribute randomized TEA amounts from a funded wallet pool to addresses read from a file")]
struct Args {
    /// Path to the newline-separated recipient address file
    #[clap(short, long, default_value = "addresses.txt")]
    addresses: PathBuf,

    /// Where to write the validated recipients of a completed run
    #[clap(short, long, default_value = "sent_addresses.txt")]
    output: PathBuf,

    /// JSON-RPC endpoint of the target network
    #[clap(long, default_value = config::DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // Secrets first: with no funded keys there is nothing to do, so fail
    // before touching any file.
    let keys = config::funding_keys_from_env().context("loading funding keys")?;
    let (pool, wallet) = WalletPool::from_keys(&keys)?;
    info!(wallets = pool.len(), "funding wallet pool ready");

    let mut addresses = recipients::load(&args.addresses)?;
    recipients::shuffle(&mut addresses, &mut rand::thread_rng());
    info!(
        count = addresses.len(),
        file = %args.addresses.display(),
        "loaded recipient addresses"
    );

    let stdin = io::stdin();
    let count = prompt::read_transfer_count(stdin.lock(), io::stdout())?;

    let config = DisperserConfig {
        rpc_url: args.rpc_url,
        sent_file: args.output,
        ..Default::default()
    };
    let client = RpcChainClient::connect(&config.rpc_url, wallet, config.confirmation_poll)
        .await
        .context("connecting to the RPC endpoint")?;

    let mut disperser = Disperser::new(client, pool, config)?;
    let summary = disperser.run(&addresses, count as usize).await?;

    info!(
        requested = summary.requested,
        attempted = summary.attempted,
        confirmed = summary.confirmed,
        failed = summary.failed,
        skipped = summary.skipped,
        "distribution run complete"
    );
    Ok(())
}
