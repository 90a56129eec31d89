//! The client through which the scripts reach the chain

use alloy::{
    network::{Ethereum, TransactionBuilder},
    providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder},
    rpc::types::{TransactionReceipt, TransactionRequest},
    signers::local::PrivateKeySigner,
    transports::{http::reqwest::Url, RpcError, TransportError, TransportErrorKind},
};
use alloy_primitives::{Address, Bytes, TxHash};
use tracing::info;

use crate::errors::ScriptError;

/// The message recorded for a node answering with HTTP 429
const RATE_LIMITED_MESSAGE: &str = "too many requests";

/// The remote operations a deployment needs from the chain.
///
/// Both submitting methods block until the transaction has the requested
/// number of confirmations, and fail if it reverted.
#[allow(async_fn_in_trait)]
pub trait ChainClient {
    /// The account every transaction is sent from
    fn sender(&self) -> Address;

    /// Deploy `code` (creation bytecode followed by constructor arguments),
    /// returning the address of the new contract
    async fn deploy(&self, code: Bytes, confirmations: u64) -> Result<Address, ScriptError>;

    /// Send `calldata` to the contract at `to`
    async fn transact(
        &self,
        to: Address,
        calldata: Bytes,
        confirmations: u64,
    ) -> Result<TxHash, ScriptError>;
}

/// A [`ChainClient`] backed by a JSON-RPC node
#[derive(Clone)]
pub struct RpcClient {
    /// The signing provider
    provider: DynProvider<Ethereum>,
    /// The deployer's address
    sender: Address,
}

/// Sets up a signing client for the given deployer and RPC url
pub async fn setup_client(signer: PrivateKeySigner, rpc_url: &str) -> Result<RpcClient, ScriptError> {
    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let sender = signer.address();

    let provider = ProviderBuilder::new()
        .wallet(signer)
        .with_simple_nonce_management()
        .connect_http(url);
    let provider = DynProvider::new(provider);

    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    info!("connected to chain {chain_id} as {sender:#x}");

    Ok(RpcClient { provider, sender })
}

impl ChainClient for RpcClient {
    fn sender(&self) -> Address {
        self.sender
    }

    async fn deploy(&self, code: Bytes, confirmations: u64) -> Result<Address, ScriptError> {
        let tx = TransactionRequest::default()
            .with_from(self.sender)
            .with_deploy_code(code);

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(node_message(&e)))?;
        let receipt = await_receipt(pending, confirmations).await?;
        check_status(&receipt)?;

        receipt.contract_address.ok_or_else(|| {
            ScriptError::ContractDeployment(format!(
                "receipt for {:#x} has no contract address",
                receipt.transaction_hash
            ))
        })
    }

    async fn transact(
        &self,
        to: Address,
        calldata: Bytes,
        confirmations: u64,
    ) -> Result<TxHash, ScriptError> {
        let tx = TransactionRequest::default()
            .with_from(self.sender)
            .with_to(to)
            .with_input(calldata);

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractInteraction(node_message(&e)))?;
        let receipt = await_receipt(pending, confirmations).await?;
        check_status(&receipt)?;

        Ok(receipt.transaction_hash)
    }
}

// -----------
// | Helpers |
// -----------

/// The part of a send error that describes why the node refused the
/// transaction
fn node_message(err: &TransportError) -> String {
    match err {
        RpcError::ErrorResp(payload) => payload.message.to_string(),
        RpcError::Transport(TransportErrorKind::HttpError(http)) if http.status == 429 => {
            RATE_LIMITED_MESSAGE.to_string()
        }
        other => other.to_string(),
    }
}

/// Wait for a pending transaction to reach `confirmations` and fetch its receipt.
///
/// The transaction is already broadcast at this point, so failures here are
/// never resubmitted.
async fn await_receipt(
    pending: PendingTransactionBuilder<Ethereum>,
    confirmations: u64,
) -> Result<TransactionReceipt, ScriptError> {
    let tx_hash = *pending.tx_hash();
    info!("sent {tx_hash:#x}, waiting for {confirmations} confirmation(s)");

    pending
        .with_required_confirmations(confirmations)
        .get_receipt()
        .await
        .map_err(|e| ScriptError::TransactionPending(tx_hash, e.to_string()))
}

/// Fail if the receipt reports a reverted transaction
fn check_status(receipt: &TransactionReceipt) -> Result<(), ScriptError> {
    if receipt.status() {
        Ok(())
    } else {
        Err(ScriptError::TransactionReverted(receipt.transaction_hash))
    }
}
