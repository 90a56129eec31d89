//! Loading of compiled contract artifacts

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::json_abi::JsonAbi;
use alloy_primitives::{hex, Bytes};
use serde::Deserialize;

use crate::{constants::JSON_EXTENSION, errors::ScriptError};

/// The ABI and creation bytecode of a compiled contract
#[derive(Clone, Debug)]
pub struct ContractArtifact {
    /// The contract name the artifact was loaded for
    pub name: String,
    /// The contract's JSON ABI
    pub abi: JsonAbi,
    /// The contract's creation bytecode
    pub bytecode: Bytes,
}

/// The on-disk layout of an artifact.
///
/// Brownie and Hardhat store the bytecode as a hex string, Foundry nests it
/// under `object`.
#[derive(Deserialize)]
struct RawArtifact {
    /// The JSON ABI
    abi: JsonAbi,
    /// The creation bytecode
    bytecode: RawBytecode,
}

/// The bytecode field of an artifact
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    /// A bare hex string
    Hex(String),
    /// An object holding the hex string
    Object {
        /// The hex string
        object: String,
    },
}

impl RawBytecode {
    /// The hex string of the bytecode
    fn hex(&self) -> &str {
        match self {
            RawBytecode::Hex(s) | RawBytecode::Object { object: s } => s,
        }
    }
}

/// The path of the artifact for `contract` in `artifacts_dir`
pub fn artifact_path(artifacts_dir: &Path, contract: &str) -> PathBuf {
    artifacts_dir.join(contract).with_extension(JSON_EXTENSION)
}

/// Load the artifact for `contract` from `artifacts_dir`
pub fn load_artifact(artifacts_dir: &Path, contract: &str) -> Result<ContractArtifact, ScriptError> {
    let path = artifact_path(artifacts_dir, contract);
    let contents = fs::read_to_string(&path)
        .map_err(|e| ScriptError::ReadArtifact(format!("{}: {}", path.display(), e)))?;

    parse_artifact(contract, &contents)
}

/// Parse an artifact from its JSON contents
pub fn parse_artifact(contract: &str, contents: &str) -> Result<ContractArtifact, ScriptError> {
    let raw: RawArtifact =
        serde_json::from_str(contents).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let bytecode: Bytes = hex::decode(raw.bytecode.hex())
        .map_err(|e| ScriptError::ArtifactParsing(format!("{contract} bytecode: {e}")))?
        .into();
    if bytecode.is_empty() {
        return Err(ScriptError::ArtifactParsing(format!(
            "{contract} has no creation bytecode"
        )));
    }

    Ok(ContractArtifact {
        name: contract.to_string(),
        abi: raw.abi,
        bytecode,
    })
}

/// Ensure the artifact's ABI exposes the named function
pub fn require_function(artifact: &ContractArtifact, function: &str) -> Result<(), ScriptError> {
    if artifact.abi.function(function).is_none() {
        return Err(ScriptError::ArtifactParsing(format!(
            "{} ABI has no `{}` function",
            artifact.name, function
        )));
    }

    Ok(())
}
