//! Market lifecycle status decoding.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a market, decoded from the on-chain status code.
///
/// The set is protocol-defined and may grow; codes outside the known range
/// decode to [`MarketStatus::Unknown`] rather than failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketStatus {
    Created,
    OpenForResolution,
    ResolutionProposed,
    DisputeRaised,
    SetByCouncil,
    ResetByCouncil,
    EscalatedDisputeRaised,
    Finalized,
    Unknown,
}

impl MarketStatus {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => MarketStatus::Created,
            1 => MarketStatus::OpenForResolution,
            2 => MarketStatus::ResolutionProposed,
            3 => MarketStatus::DisputeRaised,
            4 => MarketStatus::SetByCouncil,
            5 => MarketStatus::ResetByCouncil,
            6 => MarketStatus::EscalatedDisputeRaised,
            7 => MarketStatus::Finalized,
            _ => MarketStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketStatus::Created => "Created",
            MarketStatus::OpenForResolution => "OpenForResolution",
            MarketStatus::ResolutionProposed => "ResolutionProposed",
            MarketStatus::DisputeRaised => "DisputeRaised",
            MarketStatus::SetByCouncil => "SetByCouncil",
            MarketStatus::ResetByCouncil => "ResetByCouncil",
            MarketStatus::EscalatedDisputeRaised => "EscalatedDisputeRaised",
            MarketStatus::Finalized => "Finalized",
            MarketStatus::Unknown => "Unknown",
        }
    }
}

impl Default for MarketStatus {
    fn default() -> Self {
        MarketStatus::Unknown
    }
}

impl std::fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
