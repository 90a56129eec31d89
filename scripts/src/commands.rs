//! Implementations of the various deploy scripts

use std::path::Path;

use alloy_primitives::Bytes;
use tracing::info;

use crate::{
    artifacts::{load_artifact, require_function, ContractArtifact},
    cli::{DeployPoolTokenArgs, ShowOutputArgs},
    client::ChainClient,
    constants::{
        ARTH_KEY, ERC20_ABI_KIND, INITIALIZE_FUNCTION, MAHA_TOKEN_KEY, POOL_TOKEN_CONTRACT,
        POOL_TOKEN_KEY, POOL_TOKEN_OUTPUT_NAME, PROXY_CONTRACT, SCLP_KEY, USDC_KEY,
    },
    errors::ScriptError,
    output::{read_entry, read_output, save_abi, save_output},
    retry::{repeat, RetryPolicy},
    solidity::{pool_token_initialize_calldata, proxy_constructor_args},
    types::{DeploymentParams, DeploymentStage, OutputRecord, PoolTokenDeployment},
};

/// The compiled contracts a pool token deployment needs
#[derive(Clone, Debug)]
pub struct PoolTokenArtifacts {
    /// The pool token logic contract
    pub pool_token: ContractArtifact,
    /// The upgradeability proxy
    pub proxy: ContractArtifact,
}

impl PoolTokenArtifacts {
    /// Load both artifacts from `artifacts_dir`
    pub fn load(artifacts_dir: &Path) -> Result<Self, ScriptError> {
        let pool_token = load_artifact(artifacts_dir, POOL_TOKEN_CONTRACT)?;
        require_function(&pool_token, INITIALIZE_FUNCTION)?;
        let proxy = load_artifact(artifacts_dir, PROXY_CONTRACT)?;

        Ok(Self { pool_token, proxy })
    }
}

/// Deploy and initialize the pool token, then write its output record
pub async fn deploy_pool_token(
    args: DeployPoolTokenArgs,
    client: &impl ChainClient,
    output_dir: &Path,
) -> Result<PoolTokenDeployment, ScriptError> {
    let artifacts = PoolTokenArtifacts::load(&args.artifacts_dir)?;

    deploy_and_record(
        client,
        &args.params(),
        &artifacts,
        &args.retry_policy(),
        output_dir,
    )
    .await
}

/// Run the full deployment sequence against `client`.
///
/// The output record and the pool token ABI are only written once every
/// transaction has succeeded.
pub async fn deploy_and_record(
    client: &impl ChainClient,
    params: &DeploymentParams,
    artifacts: &PoolTokenArtifacts,
    retry: &RetryPolicy,
    output_dir: &Path,
) -> Result<PoolTokenDeployment, ScriptError> {
    let deployer = client.sender();
    let confs = params.confirmations;
    info!("deployer is {deployer:#x}");
    log_stage(DeploymentStage::Start);

    let mut record = OutputRecord::new();
    record.insert(MAHA_TOKEN_KEY, ERC20_ABI_KIND, params.maha);
    record.insert(ARTH_KEY, ERC20_ABI_KIND, params.arth);
    record.insert(USDC_KEY, ERC20_ABI_KIND, params.usdc);
    record.insert(SCLP_KEY, ERC20_ABI_KIND, params.sclp);

    // Logic contract
    let logic = repeat(retry, "deploy PoolToken", move || {
        client.deploy(artifacts.pool_token.bytecode.clone(), confs)
    })
    .await?;
    info!("instance deployed at {logic:#x}");
    log_stage(DeploymentStage::LogicDeployed);

    // Proxy, with no initialization calldata
    let proxy_code = deploy_code(
        &artifacts.proxy,
        &proxy_constructor_args(logic, params.proxy_admin, Bytes::new()),
    );
    let proxy = repeat(retry, "deploy AdminUpgradeabilityProxy", move || {
        client.deploy(proxy_code.clone(), confs)
    })
    .await?;
    info!("proxy deployed at {proxy:#x}, admin {:#x}", params.proxy_admin);
    log_stage(DeploymentStage::ProxyDeployed);

    // The record points at the logic contract rather than the proxy
    record.insert(POOL_TOKEN_KEY, ERC20_ABI_KIND, logic);

    // Initialize through the proxy
    let calldata: Bytes = pool_token_initialize_calldata(
        &params.name,
        &params.symbol,
        params.pool_tokens(),
        deployer,
        deployer,
    )
    .into();
    let tx_hash = repeat(retry, "initialize PoolToken", move || {
        client.transact(proxy, calldata.clone(), confs)
    })
    .await?;
    info!("initialized in {tx_hash:#x}");
    log_stage(DeploymentStage::Initialized);

    save_output(&record, POOL_TOKEN_OUTPUT_NAME, output_dir)?;
    save_abi(&artifacts.pool_token.abi, POOL_TOKEN_CONTRACT, output_dir)?;
    log_stage(DeploymentStage::Recorded);

    Ok(PoolTokenDeployment {
        logic,
        proxy,
        record,
    })
}

/// Log the contents of a previously written output record
pub fn show_output(args: ShowOutputArgs, output_dir: &Path) -> Result<(), ScriptError> {
    match args.key {
        Some(key) => {
            let entry = read_entry(&args.name, &key, output_dir)?;
            info!("{key}: {:#x} ({})", entry.address, entry.abi);
        }
        None => {
            let record = read_output(&args.name, output_dir)?;
            for (key, entry) in record.iter() {
                info!("{key}: {:#x} ({})", entry.address, entry.abi);
            }
        }
    }

    Ok(())
}

// -----------
// | Helpers |
// -----------

/// Creation bytecode followed by the encoded constructor arguments
fn deploy_code(artifact: &ContractArtifact, constructor_args: &[u8]) -> Bytes {
    [artifact.bytecode.as_ref(), constructor_args].concat().into()
}

/// Log a stage transition
fn log_stage(stage: DeploymentStage) {
    info!(%stage, "pool token deployment");
}
