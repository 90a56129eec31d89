//! Utilities for the deploy scripts.

use std::{path::Path, str::FromStr};

use alloy::signers::local::PrivateKeySigner;

use crate::errors::ScriptError;

/// Load the deployer's signer, either from a raw private key or from an
/// encrypted JSON keystore.
///
/// A raw private key takes precedence when both are given.
pub fn load_signer(
    priv_key: Option<&str>,
    keystore: Option<&Path>,
    password: Option<&str>,
) -> Result<PrivateKeySigner, ScriptError> {
    if let Some(priv_key) = priv_key {
        return PrivateKeySigner::from_str(priv_key)
            .map_err(|e| ScriptError::ClientInitialization(e.to_string()));
    }

    let keystore = keystore.ok_or_else(|| {
        ScriptError::ClientInitialization(
            "either a private key or a keystore must be given".to_string(),
        )
    })?;
    let password = password.unwrap_or_default();

    PrivateKeySigner::decrypt_keystore(keystore, password)
        .map_err(|e| ScriptError::ClientInitialization(format!("{}: {}", keystore.display(), e)))
}
