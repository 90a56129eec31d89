//! Definitions of CLI arguments and commands for deploy scripts

use std::{path::PathBuf, time::Duration};

use alloy_primitives::Address;
use clap::{Args, Parser, Subcommand};

use crate::{
    client::setup_client,
    commands::{deploy_pool_token, show_output},
    constants::{
        ARTH_ADDRESS, DEFAULT_ARTIFACTS_DIR, DEFAULT_MAX_ATTEMPTS, DEFAULT_OUTPUT_DIR,
        DEFAULT_RETRY_DELAY_MS, DEFAULT_RPC_URL, MAHA_ADDRESS, NUM_DEPLOY_CONFIRMATIONS,
        POOL_TOKEN_NAME, POOL_TOKEN_OUTPUT_NAME, POOL_TOKEN_SYMBOL, PROXY_ADMIN, SCLP_ADDRESS,
        USDC_ADDRESS,
    },
    errors::ScriptError,
    retry::RetryPolicy,
    types::DeploymentParams,
    utils::load_signer,
};

/// Deploy and manage the MAHA staking pool token
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Private key of the deployer
    #[arg(long = "pkey", env = "PKEY", hide_env_values = true)]
    pub priv_key: Option<String>,

    /// Encrypted JSON keystore of the deployer, used if no private key is given
    #[arg(long)]
    pub keystore: Option<PathBuf>,

    /// Password of the keystore
    #[arg(long, env = "KEYSTORE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Directory output records are written to and read from
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// The script to run
    #[command(subcommand)]
    pub command: Command,
}

/// The available scripts
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the pool token behind an upgradeability proxy and initialize it
    DeployPoolToken(DeployPoolTokenArgs),
    /// Print a previously written output record
    ShowOutput(ShowOutputArgs),
}

impl Cli {
    /// Run the selected command
    pub async fn run(self) -> Result<(), ScriptError> {
        match self.command {
            Command::DeployPoolToken(args) => {
                let signer = load_signer(
                    self.priv_key.as_deref(),
                    self.keystore.as_deref(),
                    self.password.as_deref(),
                )?;
                let client = setup_client(signer, &self.rpc_url).await?;

                deploy_pool_token(args, &client, &self.output_dir)
                    .await
                    .map(|_| ())
            }
            Command::ShowOutput(args) => show_output(args, &self.output_dir),
        }
    }
}

/// Deploy the `PoolToken` logic contract behind an `AdminUpgradeabilityProxy`.
///
/// The proxy is then initialized, through the `PoolToken` ABI, with the
/// configured tokens and the deployer as governance and owner.
#[derive(Args, Clone)]
pub struct DeployPoolTokenArgs {
    /// Directory containing the compiled contract artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,

    /// MAHA token address
    #[arg(long, default_value = MAHA_ADDRESS)]
    pub maha: Address,

    /// ARTH token address
    #[arg(long, default_value = ARTH_ADDRESS)]
    pub arth: Address,

    /// USDC token address
    #[arg(long, default_value = USDC_ADDRESS)]
    pub usdc: Address,

    /// SCLP token address
    #[arg(long, default_value = SCLP_ADDRESS)]
    pub sclp: Address,

    /// Admin of the upgradeability proxy
    #[arg(long, default_value = PROXY_ADMIN)]
    pub proxy_admin: Address,

    /// Number of confirmations to wait for on each transaction
    #[arg(short, long, default_value_t = NUM_DEPLOY_CONFIRMATIONS)]
    pub confirmations: u64,

    /// Maximum number of attempts for each transaction
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Delay between attempts, in milliseconds
    #[arg(long, default_value_t = DEFAULT_RETRY_DELAY_MS)]
    pub retry_delay_ms: u64,
}

impl DeployPoolTokenArgs {
    /// The deployment parameters selected by the arguments
    pub fn params(&self) -> DeploymentParams {
        DeploymentParams {
            name: POOL_TOKEN_NAME.to_string(),
            symbol: POOL_TOKEN_SYMBOL.to_string(),
            maha: self.maha,
            arth: self.arth,
            usdc: self.usdc,
            sclp: self.sclp,
            proxy_admin: self.proxy_admin,
            confirmations: self.confirmations,
        }
    }

    /// The retry policy selected by the arguments
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            delay: Duration::from_millis(self.retry_delay_ms),
        }
    }
}

/// Print a previously written output record
#[derive(Args, Clone)]
pub struct ShowOutputArgs {
    /// Name of the output record
    #[arg(short, long, default_value = POOL_TOKEN_OUTPUT_NAME)]
    pub name: String,

    /// Only print the contract recorded under this key
    #[arg(short, long)]
    pub key: Option<String>,
}
