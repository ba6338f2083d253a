//! Chain read port: the seam between this crate and the RPC transport.
//!
//! The transport collaborator owns ABI encoding/decoding, retries and
//! timeouts. This crate only describes which function to call on which
//! contract and consumes decoded values back. Batched reads tolerate
//! partial failure: each element of the batch result is tagged
//! independently.

use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use thiserror::Error;

/// Failure of a single contract read, surfaced as a value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReadError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("call reverted: {0}")]
    Reverted(String),
}

/// Argument to a contract function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArg {
    Address(Address),
    Uint(U256),
}

/// One contract-function read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    pub target: Address,
    pub function: &'static str,
    pub args: Vec<CallArg>,
}

impl ContractCall {
    pub fn new(target: Address, function: &'static str) -> Self {
        Self {
            target,
            function,
            args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: CallArg) -> Self {
        self.args.push(arg);
        self
    }
}

/// Decoded return value of a contract read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallValue {
    Uint(U256),
    Address(Address),
    String(String),
    /// Multi-member return (structs, address pairs). Members in ABI order.
    Tuple(Vec<CallValue>),
}

impl CallValue {
    pub fn as_uint(&self) -> Result<U256, ReadError> {
        match self {
            CallValue::Uint(v) => Ok(*v),
            other => Err(decode_mismatch("uint", other)),
        }
    }

    pub fn as_address(&self) -> Result<Address, ReadError> {
        match self {
            CallValue::Address(a) => Ok(*a),
            other => Err(decode_mismatch("address", other)),
        }
    }

    pub fn as_string(&self) -> Result<String, ReadError> {
        match self {
            CallValue::String(s) => Ok(s.clone()),
            other => Err(decode_mismatch("string", other)),
        }
    }

    /// Two-address return, e.g. a market's `(yesPool, noPool)` pair.
    pub fn as_address_pair(&self) -> Result<(Address, Address), ReadError> {
        match self {
            CallValue::Tuple(members) if members.len() == 2 => {
                Ok((members[0].as_address()?, members[1].as_address()?))
            }
            other => Err(decode_mismatch("address pair", other)),
        }
    }

    /// First uint member of a struct return (or the value itself when the
    /// collaborator already collapsed the struct to its first field).
    /// Used for `slot0().sqrtPriceX96`.
    pub fn first_uint(&self) -> Result<U256, ReadError> {
        match self {
            CallValue::Uint(v) => Ok(*v),
            CallValue::Tuple(members) => members
                .first()
                .ok_or_else(|| ReadError::Decode("empty tuple return".to_string()))?
                .as_uint(),
            other => Err(decode_mismatch("uint-led tuple", other)),
        }
    }
}

fn decode_mismatch(expected: &str, got: &CallValue) -> ReadError {
    ReadError::Decode(format!("expected {expected}, got {got:?}"))
}

/// Per-call outcome within a batch.
pub type CallResult = Result<CallValue, ReadError>;

/// Read-only access to contracts on the supported chain.
///
/// `read_batch` bundles independent reads into one round trip; the outer
/// `Err` means the whole round trip failed, while individual calls fail
/// independently inside the returned vector (same length and order as the
/// request).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContractReadPort: Send + Sync {
    async fn read_one(&self, call: ContractCall) -> Result<CallValue, ReadError>;

    async fn read_batch(&self, calls: Vec<ContractCall>) -> Result<Vec<CallResult>, ReadError>;
}
