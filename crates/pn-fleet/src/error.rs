use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FleetError {
    #[error("no rider named {0:?}")]
    RiderNotFound(String),

    #[error("rider pool capacity exceeded (max {max})")]
    PoolFull { max: usize },

    #[error("rider {name:?} has non-positive max load")]
    InvalidMaxLoad { name: String },
}

pub type FleetResult<T> = Result<T, FleetError>;
