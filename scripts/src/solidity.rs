//! Definitions of Solidity functions called during deployment

use alloy_primitives::{Address, Bytes};
use alloy_sol_types::{SolCall, SolValue};

pub use abi::initializeCall;

/// The pool token functions called by the scripts
#[allow(missing_docs, clippy::missing_docs_in_private_items)]
mod abi {
    use alloy_sol_types::sol;

    sol! {
        function initialize(string memory name_, string memory symbol_, address[] memory tokens_, address governance_, address owner_) external;
    }
}

/// ABI-encode the `AdminUpgradeabilityProxy` constructor arguments
pub fn proxy_constructor_args(logic: Address, admin: Address, data: Bytes) -> Vec<u8> {
    (logic, admin, data).abi_encode_params()
}

/// Prepare calldata for the pool token's `initialize` method
pub fn pool_token_initialize_calldata(
    name: &str,
    symbol: &str,
    tokens: Vec<Address>,
    governance: Address,
    owner: Address,
) -> Vec<u8> {
    initializeCall::new((name.to_string(), symbol.to_string(), tokens, governance, owner))
        .abi_encode()
}
