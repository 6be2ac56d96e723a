//! Network-subsystem error type.

use thiserror::Error;

use pn_core::CityId;

/// Errors produced by `pn-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("city table full ({max} cities)")]
    CityCapacityExceeded { max: usize },

    #[error("city {0} not found in network")]
    CityNotFound(CityId),

    #[error("unknown city name {0:?}")]
    UnknownCity(String),

    #[error("network CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
