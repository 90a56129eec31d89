//! Persistence of deployment output records

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::json_abi::JsonAbi;
use tracing::info;

use crate::{
    constants::{ABIS_SUBDIR, JSON_EXTENSION},
    errors::ScriptError,
    types::{ContractEntry, OutputRecord},
};

/// The path of the output record `name` in `output_dir`
pub fn output_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(name).with_extension(JSON_EXTENSION)
}

/// The path of the saved ABI `name` in `output_dir`
pub fn abi_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir
        .join(ABIS_SUBDIR)
        .join(name)
        .with_extension(JSON_EXTENSION)
}

/// Write `record` to `<output_dir>/<name>.json`, replacing any previous record
pub fn save_output(
    record: &OutputRecord,
    name: &str,
    output_dir: &Path,
) -> Result<PathBuf, ScriptError> {
    let path = output_path(output_dir, name);
    write_pretty_json(&path, record)?;

    info!("saved {} contracts into {}", record.len(), path.display());
    Ok(path)
}

/// Write a contract's ABI to `<output_dir>/abis/<name>.json`
pub fn save_abi(abi: &JsonAbi, name: &str, output_dir: &Path) -> Result<PathBuf, ScriptError> {
    let path = abi_path(output_dir, name);
    write_pretty_json(&path, abi)?;

    info!("saved {name} abi into {}", path.display());
    Ok(path)
}

/// Read the output record `name` from `output_dir`
pub fn read_output(name: &str, output_dir: &Path) -> Result<OutputRecord, ScriptError> {
    let path = output_path(output_dir, name);
    let contents = fs::read_to_string(&path)
        .map_err(|e| ScriptError::ReadOutput(format!("{}: {}", path.display(), e)))?;

    serde_json::from_str(&contents).map_err(|e| ScriptError::ReadOutput(e.to_string()))
}

/// Read a single contract from the output record `name`
pub fn read_entry(name: &str, key: &str, output_dir: &Path) -> Result<ContractEntry, ScriptError> {
    read_output(name, output_dir)?
        .get(key)
        .cloned()
        .ok_or_else(|| ScriptError::ReadOutput(format!("key {key} not found in {name}")))
}

/// Serialize `value` as pretty JSON to `path`, creating parent directories
fn write_pretty_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), ScriptError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ScriptError::WriteOutput(e.to_string()))?;
    }

    let json =
        serde_json::to_string_pretty(value).map_err(|e| ScriptError::WriteOutput(e.to_string()))?;
    fs::write(path, json).map_err(|e| ScriptError::WriteOutput(e.to_string()))
}
