//! Read-only aggregation of TrueMarkets binary prediction markets.
//!
//! Turns on-chain state (registry, market contracts, outcome-token pools)
//! into normalized snapshots: listings with pagination and ordering, and
//! per-market detail with computed outcome prices and TVL. All chain access
//! goes through the [`port::ContractReadPort`] seam; the transport, wallet
//! and retry policy live with the embedding application.

pub mod config;
pub mod constants;
pub mod network;
pub mod port;
pub mod pricing;
pub mod reader;
pub mod registry;
pub mod status;
pub mod types;

pub use config::{ConfigError, ReaderConfig, Settings};
pub use network::{supports, Network};
pub use port::{CallArg, CallResult, CallValue, ContractCall, ContractReadPort, ReadError};
pub use reader::{MarketReader, SortOrder};
pub use registry::MarketRegistry;
pub use status::MarketStatus;
pub use types::{
    ActiveMarketsResponse, MarketDetailResponse, MarketSummary, OutcomePrices, OutcomeToken,
    OutcomeTokens, PoolState,
};
