//! Pure price and TVL math over raw pool state.
//!
//! Pools expose a Q96 square-root price quoting token1 in units of token0,
//! in raw integer units. Which slot holds the reference asset varies per
//! pool, so the ratio sometimes has to be inverted to land on
//! "reference per outcome token".

use alloy::primitives::{Address, U256};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::constants::SQRT_PRICE_SHIFT;

/// Displayed precision of computed prices.
const PRICE_SCALE: u32 = 6;

/// Which pool slot holds the reference asset. Computed once per pool from
/// the pool's token addresses, then threaded through price computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceSlot {
    Token0,
    Token1,
}

impl ReferenceSlot {
    /// Detect the reference slot by address comparison. Returns the slot
    /// and the outcome-token address occupying the other slot, or `None`
    /// when neither slot matches the reference asset.
    pub fn detect(token0: Address, token1: Address, reference: Address) -> Option<(Self, Address)> {
        if token0 == reference {
            Some((ReferenceSlot::Token0, token1))
        } else if token1 == reference {
            Some((ReferenceSlot::Token1, token0))
        } else {
            None
        }
    }
}

/// Price of one outcome token denominated in the reference asset.
///
/// `(sqrtPriceX96 / 2^96)^2` is token1-per-token0 in raw integer units;
/// `10^(dec0 - dec1)` converts to real units, and the ratio is inverted
/// when the reference asset sits in slot 0. A zero raw price is a valid
/// degenerate output, not an error.
pub fn outcome_price(
    sqrt_price_x96: U256,
    reference_slot: ReferenceSlot,
    reference_decimals: u32,
    outcome_decimals: u32,
) -> Decimal {
    let sqrt = u256_to_f64(sqrt_price_x96) / 2f64.powi(SQRT_PRICE_SHIFT);
    let raw_ratio = sqrt * sqrt;

    let (dec0, dec1) = match reference_slot {
        ReferenceSlot::Token0 => (reference_decimals as i32, outcome_decimals as i32),
        ReferenceSlot::Token1 => (outcome_decimals as i32, reference_decimals as i32),
    };
    let real_ratio = raw_ratio * 10f64.powi(dec0 - dec1);

    let price = match reference_slot {
        // ratio is outcome-per-reference; invert to reference-per-outcome
        ReferenceSlot::Token0 => {
            if real_ratio > 0.0 {
                1.0 / real_ratio
            } else {
                0.0
            }
        }
        ReferenceSlot::Token1 => real_ratio,
    };

    if !price.is_finite() || price < 0.0 {
        return Decimal::ZERO;
    }
    Decimal::from_f64(price)
        .map(|d| d.round_dp(PRICE_SCALE).normalize())
        .unwrap_or(Decimal::ZERO)
}

/// Total value locked: the summed reference-asset holdings of both pools,
/// in decimal reference units. Outcome-token balances do not enter TVL.
pub fn tvl(
    yes_reference_balance: U256,
    no_reference_balance: U256,
    reference_decimals: u32,
) -> Decimal {
    scale_balance(yes_reference_balance, reference_decimals)
        + scale_balance(no_reference_balance, reference_decimals)
}

/// Integer on-chain balance -> decimal units.
pub(crate) fn scale_balance(raw: U256, decimals: u32) -> Decimal {
    let Ok(narrowed) = u128::try_from(raw) else {
        tracing::warn!(balance = %raw, "balance exceeds u128, treating as zero");
        return Decimal::ZERO;
    };
    let Some(whole) = Decimal::from_u128(narrowed) else {
        tracing::warn!(balance = %raw, "balance exceeds decimal range, treating as zero");
        return Decimal::ZERO;
    };
    (whole * Decimal::new(1, decimals)).normalize()
}

fn u256_to_f64(value: U256) -> f64 {
    // f64 parsing of decimal digits never fails; overflow saturates to inf,
    // which the finite-ness guard above turns into a zero price.
    value.to_string().parse::<f64>().unwrap_or(0.0)
}
