use pn_core::CoreError;
use thiserror::Error;

use crate::ShipmentStatus;

#[derive(Debug, Error, PartialEq)]
pub enum LifecycleError {
    #[error("parcel {id:?} cannot be cancelled while {status}")]
    CannotCancel { id: String, status: ShipmentStatus },

    #[error("invalid pickup request: {0}")]
    Invalid(#[from] CoreError),
}

pub type LifecycleResult<T> = Result<T, LifecycleError>;
