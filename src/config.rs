//! Configuration loading from environment variables.

use std::str::FromStr;

use alloy::primitives::Address;
use serde::Deserialize;
use thiserror::Error;

use crate::constants::{DEFAULT_OUTCOME_DECIMALS, DEFAULT_REFERENCE_ASSET, DEFAULT_REFERENCE_DECIMALS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load environment configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid address in {field}: {value}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("unsupported decimal precision {0} (max 28)")]
    DecimalsOutOfRange(u32),
}

/// Raw settings as read from the environment.
///
/// Required variables:
/// - MANAGER_ADDRESS: the market-registry (manager) contract
///
/// Optional variables (with defaults):
/// - REFERENCE_ASSET_ADDRESS: reference asset contract (Base USDC)
/// - REFERENCE_DECIMALS: reference asset decimals (6)
/// - OUTCOME_DECIMALS: outcome token decimals (18)
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub manager_address: String,

    #[serde(default = "default_reference_asset")]
    pub reference_asset_address: String,

    #[serde(default = "default_reference_decimals")]
    pub reference_decimals: u32,

    #[serde(default = "default_outcome_decimals")]
    pub outcome_decimals: u32,
}

fn default_reference_asset() -> String {
    DEFAULT_REFERENCE_ASSET.to_string()
}

fn default_reference_decimals() -> u32 {
    DEFAULT_REFERENCE_DECIMALS
}

fn default_outcome_decimals() -> u32 {
    DEFAULT_OUTCOME_DECIMALS
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env_only()
    }

    /// Load from the process environment without touching any .env file.
    /// Useful for testing.
    pub fn from_env_only() -> Result<Self, ConfigError> {
        let c = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;
        Ok(c.try_deserialize()?)
    }
}

/// Validated, typed configuration for the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    pub manager: Address,
    pub reference_asset: Address,
    pub reference_decimals: u32,
    pub outcome_decimals: u32,
}

impl ReaderConfig {
    /// Reference-deployment configuration: Base USDC as the reference
    /// asset, 18-decimal outcome tokens.
    pub fn base_mainnet(manager: Address) -> Self {
        Self {
            manager,
            // Constant is a known-good literal; parse cannot fail.
            reference_asset: Address::from_str(DEFAULT_REFERENCE_ASSET).unwrap_or(Address::ZERO),
            reference_decimals: DEFAULT_REFERENCE_DECIMALS,
            outcome_decimals: DEFAULT_OUTCOME_DECIMALS,
        }
    }
}

impl TryFrom<Settings> for ReaderConfig {
    type Error = ConfigError;

    fn try_from(s: Settings) -> Result<Self, Self::Error> {
        let manager = parse_address("manager_address", &s.manager_address)?;
        let reference_asset =
            parse_address("reference_asset_address", &s.reference_asset_address)?;
        for decimals in [s.reference_decimals, s.outcome_decimals] {
            // rust_decimal caps scale at 28
            if decimals > 28 {
                return Err(ConfigError::DecimalsOutOfRange(decimals));
            }
        }
        Ok(Self {
            manager,
            reference_asset,
            reference_decimals: s.reference_decimals,
            outcome_decimals: s.outcome_decimals,
        })
    }
}

fn parse_address(field: &'static str, value: &str) -> Result<Address, ConfigError> {
    Address::from_str(value.trim()).map_err(|_| ConfigError::InvalidAddress {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const MANAGER: &str = "0x0000000000000000000000000000000000000777";

    fn clear_env() {
        for key in [
            "MANAGER_ADDRESS",
            "REFERENCE_ASSET_ADDRESS",
            "REFERENCE_DECIMALS",
            "OUTCOME_DECIMALS",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn missing_manager_address_fails() {
        clear_env();
        assert!(Settings::from_env_only().is_err());
    }

    #[test]
    #[serial]
    fn defaults_apply_when_only_manager_is_set() {
        clear_env();
        std::env::set_var("MANAGER_ADDRESS", MANAGER);

        let settings = Settings::from_env_only().unwrap();
        assert_eq!(settings.reference_asset_address, DEFAULT_REFERENCE_ASSET);
        assert_eq!(settings.reference_decimals, 6);
        assert_eq!(settings.outcome_decimals, 18);

        let cfg = ReaderConfig::try_from(settings).unwrap();
        assert_eq!(cfg.manager, Address::from_str(MANAGER).unwrap());
        assert_eq!(cfg, ReaderConfig::base_mainnet(cfg.manager));
        clear_env();
    }

    #[test]
    #[serial]
    fn invalid_manager_address_is_rejected() {
        let settings = Settings {
            manager_address: "not-an-address".to_string(),
            reference_asset_address: DEFAULT_REFERENCE_ASSET.to_string(),
            reference_decimals: 6,
            outcome_decimals: 18,
        };
        let err = ReaderConfig::try_from(settings).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddress { field, .. } if field == "manager_address"));
    }

    #[test]
    #[serial]
    fn oversized_decimals_are_rejected() {
        let settings = Settings {
            manager_address: MANAGER.to_string(),
            reference_asset_address: DEFAULT_REFERENCE_ASSET.to_string(),
            reference_decimals: 40,
            outcome_decimals: 18,
        };
        assert!(matches!(
            ReaderConfig::try_from(settings),
            Err(ConfigError::DecimalsOutOfRange(40))
        ));
    }
}
