//! Market listing and detail aggregation.
//!
//! The two public operations never fail with an `Err`: every outcome,
//! including transport failures, is normalized into a response envelope
//! whose `error` field is the sole failure signal.

use std::str::FromStr;

use alloy::primitives::{Address, U256};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ReaderConfig;
use crate::constants::{
    FN_ADDITIONAL_INFO, FN_BALANCE_OF, FN_CURRENT_STATUS, FN_END_OF_TRADING, FN_MARKET_SOURCE,
    FN_MARKET_QUESTION, FN_POOL_ADDRESSES, FN_SLOT0, FN_TOKEN0, FN_TOKEN1,
};
use crate::port::{CallArg, CallResult, ContractCall, ContractReadPort, ReadError};
use crate::pricing::{outcome_price, tvl, ReferenceSlot};
use crate::registry::MarketRegistry;
use crate::status::MarketStatus;
use crate::types::{
    ActiveMarketsResponse, MarketDetailResponse, MarketSummary, OutcomePrices, OutcomeToken,
    OutcomeTokens, PoolState,
};

/// Listing order over registry indices. `Desc` surfaces the most recently
/// created markets first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Read-only aggregator over the market registry and market contracts.
///
/// Holds no mutable state; every request builds its own values and returns
/// its own envelope, so concurrent calls do not interact.
pub struct MarketReader<P: ContractReadPort> {
    port: P,
    config: ReaderConfig,
}

/// Structural fields from the basic-info batch.
struct BasicInfo {
    question: String,
    additional_info: String,
    source: String,
    status: MarketStatus,
    end_of_trading: i64,
    yes_pool: Address,
    no_pool: Address,
}

/// Per-pool facts derived from the pool/token-info batch.
struct PoolRead {
    pool: Address,
    outcome_token: Address,
    reference_slot: ReferenceSlot,
    sqrt_price_x96: U256,
}

impl<P: ContractReadPort> MarketReader<P> {
    pub fn new(port: P, config: ReaderConfig) -> Self {
        Self { port, config }
    }

    /// Paginated, ordered listing of active markets.
    pub async fn get_active_markets(
        &self,
        limit: u64,
        offset: u64,
        sort: SortOrder,
    ) -> ActiveMarketsResponse {
        match self.list_markets(limit, offset, sort).await {
            Ok((total_markets, markets)) => ActiveMarketsResponse::ok(total_markets, markets),
            Err(e) => ActiveMarketsResponse::failure(format!("Error getting active markets: {e}")),
        }
    }

    /// Full snapshot of one market, aggregated from three sequential
    /// batched reads.
    pub async fn get_market_details(&self, market_address: &str) -> MarketDetailResponse {
        let market = match Address::from_str(market_address.trim()) {
            Ok(a) => a,
            Err(_) => {
                return MarketDetailResponse::failure(
                    market_address,
                    format!("Error getting market details: invalid market address: {market_address}"),
                );
            }
        };

        match self.aggregate_detail(market).await {
            Ok(detail) => detail,
            Err(e) => MarketDetailResponse::failure(
                market.to_checksum(None),
                format!("Error getting market details: {e}"),
            ),
        }
    }

    async fn list_markets(
        &self,
        limit: u64,
        offset: u64,
        sort: SortOrder,
    ) -> Result<(u64, Vec<MarketSummary>), ReadError> {
        let registry = MarketRegistry::new(&self.port, self.config.manager);
        let total = registry.active_count().await?;
        if total == 0 {
            return Ok((0, Vec::new()));
        }

        let mut markets = Vec::new();
        for position in 0..limit {
            // Window [offset, offset+limit) clipped to [0, total).
            let logical = offset + position;
            if logical >= total {
                break;
            }
            let index = match sort {
                SortOrder::Asc => logical,
                SortOrder::Desc => total - 1 - logical,
            };

            // One unresolvable market must not fail the whole listing.
            match self.summary_at(&registry, index).await {
                Ok(summary) => markets.push(summary),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping market that failed to resolve");
                }
            }
        }

        tracing::debug!(total, returned = markets.len(), "listed active markets");
        Ok((total, markets))
    }

    async fn summary_at(
        &self,
        registry: &MarketRegistry<'_, P>,
        index: u64,
    ) -> Result<MarketSummary, ReadError> {
        let address = registry.address_at(index).await?;
        let question = registry.question_of(address).await?;
        Ok(MarketSummary {
            id: index,
            address: address.to_checksum(None),
            question,
        })
    }

    async fn aggregate_detail(&self, market: Address) -> Result<MarketDetailResponse, ReadError> {
        // The three batches are data-dependent and therefore strictly
        // sequential: pool addresses feed batch 2, token roles feed batch 3.
        let basic = self.read_basic_info(market).await?;
        let (yes, no) = self.read_pool_info(basic.yes_pool, basic.no_pool).await?;
        let (yes_state, no_state) = self.read_balances(&yes, &no).await?;

        let cfg = &self.config;
        Ok(MarketDetailResponse {
            market_address: market.to_checksum(None),
            question: basic.question,
            additional_info: basic.additional_info,
            source: basic.source,
            status: basic.status,
            end_of_trading: DateTime::<Utc>::from_timestamp(basic.end_of_trading, 0)
                .unwrap_or_default(),
            tokens: OutcomeTokens {
                yes: OutcomeToken {
                    token_address: yes.outcome_token.to_checksum(None),
                    lp_address: yes.pool.to_checksum(None),
                },
                no: OutcomeToken {
                    token_address: no.outcome_token.to_checksum(None),
                    lp_address: no.pool.to_checksum(None),
                },
            },
            prices: OutcomePrices {
                yes: outcome_price(
                    yes_state.sqrt_price_x96,
                    yes.reference_slot,
                    cfg.reference_decimals,
                    cfg.outcome_decimals,
                ),
                no: outcome_price(
                    no_state.sqrt_price_x96,
                    no.reference_slot,
                    cfg.reference_decimals,
                    cfg.outcome_decimals,
                ),
            },
            tvl: tvl(
                yes_state.reference_balance,
                no_state.reference_balance,
                cfg.reference_decimals,
            ),
            error: None,
        })
    }

    /// Batch 1: six structural reads against the market contract. Any
    /// per-call failure fails the whole detail request.
    async fn read_basic_info(&self, market: Address) -> Result<BasicInfo, ReadError> {
        let calls = vec![
            ContractCall::new(market, FN_MARKET_QUESTION),
            ContractCall::new(market, FN_ADDITIONAL_INFO),
            ContractCall::new(market, FN_MARKET_SOURCE),
            ContractCall::new(market, FN_CURRENT_STATUS),
            ContractCall::new(market, FN_END_OF_TRADING),
            ContractCall::new(market, FN_POOL_ADDRESSES),
        ];
        let [question, info, source, status, end, pools] =
            fixed_batch(self.port.read_batch(calls).await?)?;

        let status_code = u8::try_from(status?.as_uint()?).unwrap_or(u8::MAX);
        let (yes_pool, no_pool) = pools?.as_address_pair()?;

        Ok(BasicInfo {
            question: question?.as_string()?,
            additional_info: info?.as_string()?,
            source: source?.as_string()?,
            status: MarketStatus::from_code(status_code),
            end_of_trading: i64::try_from(end?.as_uint()?).unwrap_or(0),
            yes_pool,
            no_pool,
        })
    }

    /// Batch 2: token addresses and price slot for both pools. Structural;
    /// any per-call failure fails the request, as does a pool whose tokens
    /// do not include the reference asset.
    async fn read_pool_info(
        &self,
        yes_pool: Address,
        no_pool: Address,
    ) -> Result<(PoolRead, PoolRead), ReadError> {
        let calls = vec![
            ContractCall::new(yes_pool, FN_TOKEN0),
            ContractCall::new(yes_pool, FN_TOKEN1),
            ContractCall::new(yes_pool, FN_SLOT0),
            ContractCall::new(no_pool, FN_TOKEN0),
            ContractCall::new(no_pool, FN_TOKEN1),
            ContractCall::new(no_pool, FN_SLOT0),
        ];
        let [y_t0, y_t1, y_slot, n_t0, n_t1, n_slot] =
            fixed_batch(self.port.read_batch(calls).await?)?;

        let yes = self.pool_read(yes_pool, y_t0, y_t1, y_slot)?;
        let no = self.pool_read(no_pool, n_t0, n_t1, n_slot)?;
        Ok((yes, no))
    }

    fn pool_read(
        &self,
        pool: Address,
        token0: CallResult,
        token1: CallResult,
        slot0: CallResult,
    ) -> Result<PoolRead, ReadError> {
        let token0 = token0?.as_address()?;
        let token1 = token1?.as_address()?;
        let (reference_slot, outcome_token) =
            ReferenceSlot::detect(token0, token1, self.config.reference_asset).ok_or_else(|| {
                ReadError::Decode(format!("pool {pool} does not hold the reference asset"))
            })?;
        Ok(PoolRead {
            pool,
            outcome_token,
            reference_slot,
            sqrt_price_x96: slot0?.first_uint()?,
        })
    }

    /// Batch 3: reference and outcome balances per pool. A failed balance
    /// call degrades to zero (reducing TVL) instead of failing the request.
    async fn read_balances(
        &self,
        yes: &PoolRead,
        no: &PoolRead,
    ) -> Result<(PoolState, PoolState), ReadError> {
        let reference = self.config.reference_asset;
        let calls = vec![
            balance_call(reference, yes.pool),
            balance_call(yes.outcome_token, yes.pool),
            balance_call(reference, no.pool),
            balance_call(no.outcome_token, no.pool),
        ];
        let [yes_ref, yes_out, no_ref, no_out] = fixed_batch(self.port.read_batch(calls).await?)?;

        let yes_state = PoolState {
            sqrt_price_x96: yes.sqrt_price_x96,
            reference_balance: balance_or_zero(yes_ref, yes.pool, "reference"),
            outcome_balance: balance_or_zero(yes_out, yes.pool, "outcome"),
        };
        let no_state = PoolState {
            sqrt_price_x96: no.sqrt_price_x96,
            reference_balance: balance_or_zero(no_ref, no.pool, "reference"),
            outcome_balance: balance_or_zero(no_out, no.pool, "outcome"),
        };
        Ok((yes_state, no_state))
    }
}

fn balance_call(token: Address, holder: Address) -> ContractCall {
    ContractCall::new(token, FN_BALANCE_OF).with_arg(CallArg::Address(holder))
}

fn balance_or_zero(result: CallResult, pool: Address, kind: &str) -> U256 {
    match result.and_then(|v| v.as_uint()) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(%pool, kind, error = %e, "balance read failed, defaulting to zero");
            U256::ZERO
        }
    }
}

/// A batch response must have exactly as many elements as the request.
fn fixed_batch<const N: usize>(results: Vec<CallResult>) -> Result<[CallResult; N], ReadError> {
    results
        .try_into()
        .map_err(|_| ReadError::Decode("unexpected batch result length".to_string()))
}
