use std::sync::Arc;

use alloy::{contract, primitives::U256, transports::TransportError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("contracts unavailable: {0}")]
    Provider(Arc<ReadError>),

    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Derivation(#[from] DerivationError),
}

/// A single contract read that failed upstream.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("contract call failed: {0}")]
    Contract(#[from] contract::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DerivationError {
    #[error("{field} value {value} does not fit in a u64")]
    OutOfRange { field: &'static str, value: U256 },

    #[error("{field} overflowed while converting")]
    Overflow { field: &'static str },
}
