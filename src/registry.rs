//! Single-call reads against the market-registry (manager) contract.

use alloy::primitives::{Address, U256};

use crate::constants::{FN_ACTIVE_MARKET_ADDRESS, FN_ACTIVE_MARKET_COUNT, FN_MARKET_QUESTION};
use crate::port::{CallArg, ContractCall, ContractReadPort, ReadError};

/// Thin read view over the registry; borrowed per request, holds no state
/// beyond the manager address.
pub struct MarketRegistry<'a, P: ContractReadPort + ?Sized> {
    port: &'a P,
    manager: Address,
}

impl<'a, P: ContractReadPort + ?Sized> MarketRegistry<'a, P> {
    pub fn new(port: &'a P, manager: Address) -> Self {
        Self { port, manager }
    }

    /// Number of active markets. A failed read propagates to the caller;
    /// zero is a valid answer and must not be conflated with failure.
    pub async fn active_count(&self) -> Result<u64, ReadError> {
        let value = self
            .port
            .read_one(ContractCall::new(self.manager, FN_ACTIVE_MARKET_COUNT))
            .await?;
        u64::try_from(value.as_uint()?)
            .map_err(|_| ReadError::Decode("active market count exceeds u64".to_string()))
    }

    /// Market address at a registry index.
    pub async fn address_at(&self, index: u64) -> Result<Address, ReadError> {
        let call = ContractCall::new(self.manager, FN_ACTIVE_MARKET_ADDRESS)
            .with_arg(CallArg::Uint(U256::from(index)));
        self.port.read_one(call).await?.as_address()
    }

    /// Question text of a market contract.
    pub async fn question_of(&self, market: Address) -> Result<String, ReadError> {
        self.port
            .read_one(ContractCall::new(market, FN_MARKET_QUESTION))
            .await?
            .as_string()
    }
}
