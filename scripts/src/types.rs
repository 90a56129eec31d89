//! Type definitions used throughout the scripts

use std::{
    collections::BTreeMap,
    fmt::{self, Display},
};

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// A single contract in an output record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractEntry {
    /// The interface the contract should be addressed with
    pub abi: String,
    /// The on-chain address of the contract
    pub address: Address,
}

/// A mapping from logical contract name to the deployed contract
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputRecord(BTreeMap<String, ContractEntry>);

impl OutputRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a contract under the given key, replacing any previous entry
    pub fn insert(&mut self, key: &str, abi: &str, address: Address) {
        let entry = ContractEntry {
            abi: abi.to_string(),
            address,
        };
        self.0.insert(key.to_string(), entry);
    }

    /// Get the entry recorded under the given key
    pub fn get(&self, key: &str) -> Option<&ContractEntry> {
        self.0.get(key)
    }

    /// The number of recorded contracts
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the recorded contracts in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ContractEntry)> {
        self.0.iter()
    }
}

/// The externally configured inputs of a pool token deployment
#[derive(Clone, Debug)]
pub struct DeploymentParams {
    /// The name the pool token is initialized with
    pub name: String,
    /// The symbol the pool token is initialized with
    pub symbol: String,
    /// The MAHA token address
    pub maha: Address,
    /// The ARTH token address
    pub arth: Address,
    /// The USDC token address
    pub usdc: Address,
    /// The SCLP token address
    pub sclp: Address,
    /// The admin of the upgradeability proxy
    pub proxy_admin: Address,
    /// The number of confirmations to wait for on each transaction
    pub confirmations: u64,
}

impl DeploymentParams {
    /// The tokens the pool token is initialized with, in call order
    pub fn pool_tokens(&self) -> Vec<Address> {
        vec![self.arth, self.usdc, self.maha, self.sclp]
    }
}

/// The stages a pool token deployment moves through
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeploymentStage {
    /// Nothing has been sent yet
    Start,
    /// The logic contract is deployed
    LogicDeployed,
    /// The proxy contract is deployed
    ProxyDeployed,
    /// The proxy has been initialized
    Initialized,
    /// The output record has been written
    Recorded,
}

impl Display for DeploymentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeploymentStage::Start => write!(f, "start"),
            DeploymentStage::LogicDeployed => write!(f, "logic-deployed"),
            DeploymentStage::ProxyDeployed => write!(f, "proxy-deployed"),
            DeploymentStage::Initialized => write!(f, "initialized"),
            DeploymentStage::Recorded => write!(f, "recorded"),
        }
    }
}

/// The result of a completed pool token deployment
#[derive(Clone, Debug)]
pub struct PoolTokenDeployment {
    /// The pool token logic contract
    pub logic: Address,
    /// The upgradeability proxy in front of the logic contract
    pub proxy: Address,
    /// The record persisted for the deployment
    pub record: OutputRecord,
}
