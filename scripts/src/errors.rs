//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use alloy_primitives::TxHash;

/// Substrings of the node's rejection message which indicate that
/// resubmitting the same transaction may succeed
const TRANSIENT_ERROR_MARKERS: [&str; 11] = [
    "underpriced",
    "nonce too low",
    "nonce too high",
    "replacement transaction",
    "already known",
    "timeout",
    "timed out",
    "connection",
    "rate limit",
    "too many requests",
    "header not found",
];

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error setting up the deployer credential or the RPC client
    ClientInitialization(String),
    /// Error reading a compilation artifact from disk
    ReadArtifact(String),
    /// Error parsing a compilation artifact
    ArtifactParsing(String),
    /// The node rejected a contract deployment
    ContractDeployment(String),
    /// The node rejected a contract call
    ContractInteraction(String),
    /// A transaction was broadcast but waiting for its receipt failed
    TransactionPending(TxHash, String),
    /// A transaction was mined but reverted
    TransactionReverted(TxHash),
    /// Error reading an output record
    ReadOutput(String),
    /// Error writing an output record
    WriteOutput(String),
    /// The retry helper gave up on an action
    RetriesExhausted {
        /// The name of the action which was retried
        label: String,
        /// The number of attempts made
        attempts: usize,
        /// The error returned by the final attempt
        last: Box<ScriptError>,
    },
}

impl ScriptError {
    /// Whether resubmitting the action that produced this error may succeed
    pub fn is_transient(&self) -> bool {
        match self {
            ScriptError::ContractDeployment(msg) | ScriptError::ContractInteraction(msg) => {
                let msg = msg.to_lowercase();
                TRANSIENT_ERROR_MARKERS
                    .iter()
                    .any(|marker| msg.contains(marker))
            }
            _ => false,
        }
    }
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::ReadArtifact(s) => write!(f, "error reading artifact: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ContractInteraction(s) => {
                write!(f, "error interacting with contract: {}", s)
            }
            ScriptError::TransactionPending(hash, s) => {
                write!(f, "error awaiting transaction {:#x}: {}", hash, s)
            }
            ScriptError::TransactionReverted(hash) => {
                write!(f, "transaction {:#x} reverted", hash)
            }
            ScriptError::ReadOutput(s) => write!(f, "error reading output: {}", s),
            ScriptError::WriteOutput(s) => write!(f, "error writing output: {}", s),
            ScriptError::RetriesExhausted {
                label,
                attempts,
                last,
            } => write!(f, "{} failed after {} attempts: {}", label, attempts, last),
        }
    }
}

impl Error for ScriptError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_rejections_are_transient() {
        let underpriced =
            ScriptError::ContractDeployment("replacement transaction underpriced".to_string());
        let nonce = ScriptError::ContractInteraction("Nonce too low".to_string());

        assert!(underpriced.is_transient());
        assert!(nonce.is_transient());
    }

    #[test]
    fn reverts_and_local_errors_are_not_transient() {
        assert!(!ScriptError::TransactionReverted(TxHash::ZERO).is_transient());
        assert!(!ScriptError::ContractDeployment("insufficient funds".to_string()).is_transient());
        assert!(!ScriptError::ArtifactParsing("timeout".to_string()).is_transient());
    }

    #[test]
    fn broadcast_transactions_are_not_transient() {
        let pending = ScriptError::TransactionPending(TxHash::ZERO, "request timed out".to_string());
        assert!(!pending.is_transient());
    }

    #[test]
    fn hex_digits_do_not_mark_errors_transient() {
        let revert = ScriptError::ContractInteraction(
            "0x3f1c429a77be: execution reverted, data: \"0x08c379a0429\"".to_string(),
        );
        let rate_limited = ScriptError::ContractInteraction("429 Too Many Requests".to_string());

        assert!(!revert.is_transient());
        assert!(rate_limited.is_transient());
    }
}
