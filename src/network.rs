//! Network gating for the read adapter.
//!
//! The adapter serves exactly one chain (the TrueMarkets reference
//! deployment); everything else is rejected up front, including other
//! EVM-compatible chains.

use serde::{Deserialize, Serialize};

use crate::constants::{BASE_CHAIN_ID, BASE_NETWORK_ID, EVM_PROTOCOL_FAMILY};

/// Network identity as reported by the wallet/account collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub protocol_family: String,
    pub network_id: String,
    pub chain_id: Option<u64>,
}

impl Network {
    /// The one network this adapter supports.
    pub fn base_mainnet() -> Self {
        Self {
            protocol_family: EVM_PROTOCOL_FAMILY.to_string(),
            network_id: BASE_NETWORK_ID.to_string(),
            chain_id: Some(BASE_CHAIN_ID),
        }
    }
}

/// True iff the network is the supported EVM deployment. Pure, no I/O.
pub fn supports(network: &Network) -> bool {
    network.protocol_family == EVM_PROTOCOL_FAMILY && network.network_id == BASE_NETWORK_ID
}
