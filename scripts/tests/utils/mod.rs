//! Shared helpers for the deployment tests

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    path::Path,
    str::FromStr,
    time::Duration,
};

use alloy_primitives::{Address, Bytes, TxHash};
use alloy_sol_types::SolCall;
use scripts::{
    artifacts::parse_artifact,
    client::ChainClient,
    commands::PoolTokenArtifacts,
    constants::{
        ARTH_ADDRESS, MAHA_ADDRESS, NUM_DEPLOY_CONFIRMATIONS, POOL_TOKEN_NAME, POOL_TOKEN_SYMBOL,
        PROXY_ADMIN, SCLP_ADDRESS, USDC_ADDRESS,
    },
    errors::ScriptError,
    retry::RetryPolicy,
    solidity::initializeCall,
    types::DeploymentParams,
};

/// The deployer used by the mock chain
pub const DEPLOYER: Address = Address::repeat_byte(0xde);

/// Creation bytecode of the mock pool token
pub const POOL_TOKEN_CODE: [u8; 4] = [0x60, 0x80, 0x60, 0x01];

/// Creation bytecode of the mock proxy
pub const PROXY_CODE: [u8; 4] = [0x60, 0x80, 0x60, 0x02];

/// A pool token artifact in the Brownie layout
pub fn pool_token_artifact_json() -> String {
    format!(
        r#"{{
            "abi": [{{
                "type": "function",
                "name": "initialize",
                "inputs": [
                    {{"name": "name_", "type": "string", "internalType": "string"}},
                    {{"name": "symbol_", "type": "string", "internalType": "string"}},
                    {{"name": "tokens_", "type": "address[]", "internalType": "address[]"}},
                    {{"name": "governance_", "type": "address", "internalType": "address"}},
                    {{"name": "owner_", "type": "address", "internalType": "address"}}
                ],
                "outputs": [],
                "stateMutability": "nonpayable"
            }}],
            "bytecode": "0x{}"
        }}"#,
        alloy_primitives::hex::encode(POOL_TOKEN_CODE)
    )
}

/// A proxy artifact in the Foundry layout
pub fn proxy_artifact_json() -> String {
    format!(
        r#"{{"abi": [], "bytecode": {{"object": "0x{}"}}}}"#,
        alloy_primitives::hex::encode(PROXY_CODE)
    )
}

/// Artifacts for the mock contracts
pub fn mock_artifacts() -> PoolTokenArtifacts {
    PoolTokenArtifacts {
        pool_token: parse_artifact("PoolToken", &pool_token_artifact_json()).unwrap(),
        proxy: parse_artifact("AdminUpgradeabilityProxy", &proxy_artifact_json()).unwrap(),
    }
}

/// Write the mock artifacts into `dir`
pub fn write_mock_artifacts(dir: &Path) {
    std::fs::write(dir.join("PoolToken.json"), pool_token_artifact_json()).unwrap();
    std::fs::write(
        dir.join("AdminUpgradeabilityProxy.json"),
        proxy_artifact_json(),
    )
    .unwrap();
}

/// The default deployment parameters
pub fn default_params() -> DeploymentParams {
    DeploymentParams {
        name: POOL_TOKEN_NAME.to_string(),
        symbol: POOL_TOKEN_SYMBOL.to_string(),
        maha: Address::from_str(MAHA_ADDRESS).unwrap(),
        arth: Address::from_str(ARTH_ADDRESS).unwrap(),
        usdc: Address::from_str(USDC_ADDRESS).unwrap(),
        sclp: Address::from_str(SCLP_ADDRESS).unwrap(),
        proxy_admin: Address::from_str(PROXY_ADMIN).unwrap(),
        confirmations: NUM_DEPLOY_CONFIRMATIONS,
    }
}

/// A retry policy which does not sleep
pub fn instant_retry(max_attempts: usize) -> RetryPolicy {
    RetryPolicy {
        max_attempts,
        delay: Duration::ZERO,
    }
}

/// A transaction accepted by the mock chain
#[derive(Clone, Debug)]
pub enum SentTx {
    /// A contract creation
    Deploy {
        /// The creation code
        code: Bytes,
        /// The address the contract was created at
        address: Address,
    },
    /// A call to a contract
    Transact {
        /// The called contract
        to: Address,
        /// The calldata
        calldata: Bytes,
    },
}

/// An in-memory chain which derives contract addresses from the deployer nonce
#[derive(Default)]
pub struct MockChain {
    /// The deployer's next nonce
    nonce: Cell<u64>,
    /// The number of submissions seen, including failed ones
    attempts: Cell<usize>,
    /// Errors to return on specific submissions, by attempt index
    failures: RefCell<HashMap<usize, ScriptError>>,
    /// Errors to return after specific submissions have been broadcast
    receipt_failures: RefCell<HashMap<usize, ScriptError>>,
    /// The transactions accepted so far
    sent: RefCell<Vec<SentTx>>,
    /// The confirmation counts requested
    confirmations: RefCell<Vec<u64>>,
}

impl MockChain {
    /// Fail the `attempt`-th submission (zero-indexed) with `err`
    pub fn fail_attempt(&self, attempt: usize, err: ScriptError) {
        self.failures.borrow_mut().insert(attempt, err);
    }

    /// Broadcast the `attempt`-th submission, then fail waiting for it with `err`
    pub fn fail_receipt(&self, attempt: usize, err: ScriptError) {
        self.receipt_failures.borrow_mut().insert(attempt, err);
    }

    /// The transactions accepted so far
    pub fn sent(&self) -> Vec<SentTx> {
        self.sent.borrow().clone()
    }

    /// The number of submissions seen, including failed ones
    pub fn attempts(&self) -> usize {
        self.attempts.get()
    }

    /// The confirmation counts requested
    pub fn confirmations(&self) -> Vec<u64> {
        self.confirmations.borrow().clone()
    }

    /// The decoded `initialize` calls sent to `to`
    pub fn initialize_calls(&self, to: Address) -> Vec<initializeCall> {
        self.sent()
            .into_iter()
            .filter_map(|tx| match tx {
                SentTx::Transact {
                    to: target,
                    calldata,
                } if target == to => initializeCall::abi_decode(&calldata).ok(),
                _ => None,
            })
            .collect()
    }

    /// Register a submission, returning the injected failure if any.
    ///
    /// On success returns the nonce the transaction was sent with, and the
    /// attempt index to pass to [`MockChain::receipt`]
    fn submit(&self, confirmations: u64) -> Result<(u64, usize), ScriptError> {
        let attempt = self.attempts.get();
        self.attempts.set(attempt + 1);
        if let Some(err) = self.failures.borrow_mut().remove(&attempt) {
            return Err(err);
        }

        self.confirmations.borrow_mut().push(confirmations);
        let nonce = self.nonce.get();
        self.nonce.set(nonce + 1);
        Ok((nonce, attempt))
    }

    /// Wait for the broadcast `attempt`, returning the injected failure if any
    fn receipt(&self, attempt: usize) -> Result<(), ScriptError> {
        match self.receipt_failures.borrow_mut().remove(&attempt) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl ChainClient for MockChain {
    fn sender(&self) -> Address {
        DEPLOYER
    }

    async fn deploy(&self, code: Bytes, confirmations: u64) -> Result<Address, ScriptError> {
        let (nonce, attempt) = self.submit(confirmations)?;
        let address = DEPLOYER.create(nonce);
        self.sent.borrow_mut().push(SentTx::Deploy { code, address });
        self.receipt(attempt)?;

        Ok(address)
    }

    async fn transact(
        &self,
        to: Address,
        calldata: Bytes,
        confirmations: u64,
    ) -> Result<TxHash, ScriptError> {
        let (nonce, attempt) = self.submit(confirmations)?;
        self.sent
            .borrow_mut()
            .push(SentTx::Transact { to, calldata });
        self.receipt(attempt)?;

        Ok(TxHash::with_last_byte(nonce as u8))
    }
}
