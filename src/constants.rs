//! Constants for the TrueMarkets read adapter.

// =============================================================================
// Chain Configuration
// =============================================================================

/// TrueMarkets' reference deployment lives on Base mainnet
pub const BASE_CHAIN_ID: u64 = 8453;

/// Network identifier of the one supported chain
pub const BASE_NETWORK_ID: &str = "base-mainnet";

/// Protocol family gate value
pub const EVM_PROTOCOL_FAMILY: &str = "evm";

// =============================================================================
// Reference Asset Configuration
// =============================================================================

/// USDC on Base: the stable asset outcome tokens are priced against
pub const DEFAULT_REFERENCE_ASSET: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";

/// USDC decimals
pub const DEFAULT_REFERENCE_DECIMALS: u32 = 6;

/// Outcome tokens are standard 18-decimal ERC-20s
pub const DEFAULT_OUTCOME_DECIMALS: u32 = 18;

// =============================================================================
// Registry (TruthMarketManager) Functions
// =============================================================================

pub const FN_ACTIVE_MARKET_COUNT: &str = "numberOfActiveMarkets";
pub const FN_ACTIVE_MARKET_ADDRESS: &str = "getActiveMarketAddress";

// =============================================================================
// Market Contract Functions
// =============================================================================

pub const FN_MARKET_QUESTION: &str = "marketQuestion";
pub const FN_ADDITIONAL_INFO: &str = "additionalInfo";
pub const FN_MARKET_SOURCE: &str = "marketSource";
pub const FN_CURRENT_STATUS: &str = "getCurrentStatus";
pub const FN_END_OF_TRADING: &str = "endOfTrading";
pub const FN_POOL_ADDRESSES: &str = "getPoolAddresses";

// =============================================================================
// Liquidity Pool / ERC-20 Functions
// =============================================================================

pub const FN_TOKEN0: &str = "token0";
pub const FN_TOKEN1: &str = "token1";
pub const FN_SLOT0: &str = "slot0";
pub const FN_BALANCE_OF: &str = "balanceOf";

// =============================================================================
// Fixed-Point Math
// =============================================================================

/// Q96 fixed point: `sqrtPriceX96` is `sqrt(token1/token0) << 96`
pub const SQRT_PRICE_SHIFT: i32 = 96;
