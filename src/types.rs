use alloy::primitives::U256;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::status::MarketStatus;

/// One row of a market listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSummary {
    /// Registry index at the time of the listing
    pub id: u64,
    /// Checksummed market contract address; the market's identity
    pub address: String,
    pub question: String,
}

/// One side of a binary market: the outcome token and the pool pairing it
/// with the reference asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeToken {
    pub token_address: String,
    pub lp_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeTokens {
    pub yes: OutcomeToken,
    pub no: OutcomeToken,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomePrices {
    pub yes: Decimal,
    pub no: Decimal,
}

/// Raw fixed-point state of one liquidity pool, as read from the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolState {
    pub sqrt_price_x96: U256,
    pub reference_balance: U256,
    pub outcome_balance: U256,
}

/// Envelope for the market-listing operation. Failures are data: `error`
/// is `None` on success, including the valid zero-markets case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveMarketsResponse {
    pub total_markets: u64,
    pub markets: Vec<MarketSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActiveMarketsResponse {
    pub fn ok(total_markets: u64, markets: Vec<MarketSummary>) -> Self {
        Self {
            total_markets,
            markets,
            error: None,
        }
    }

    pub fn failure(error: String) -> Self {
        Self {
            total_markets: 0,
            markets: Vec::new(),
            error: Some(error),
        }
    }
}

/// Full snapshot of one market. On failure every field holds its zero/empty
/// default except `market_address`, which always echoes the caller's
/// requested identifier so the failure can be correlated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketDetailResponse {
    pub market_address: String,
    pub question: String,
    pub additional_info: String,
    pub source: String,
    pub status: MarketStatus,
    pub end_of_trading: DateTime<Utc>,
    pub tokens: OutcomeTokens,
    pub prices: OutcomePrices,
    pub tvl: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MarketDetailResponse {
    pub fn failure(market_address: impl Into<String>, error: String) -> Self {
        Self {
            market_address: market_address.into(),
            question: String::new(),
            additional_info: String::new(),
            source: String::new(),
            status: MarketStatus::default(),
            end_of_trading: DateTime::<Utc>::default(),
            tokens: OutcomeTokens::default(),
            prices: OutcomePrices::default(),
            tvl: Decimal::ZERO,
            error: Some(error),
        }
    }
}
