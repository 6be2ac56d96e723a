use pn_core::CoreError;
use pn_dispatch::DispatchError;
use pn_fleet::FleetError;
use pn_lifecycle::LifecycleError;
use pn_network::NetworkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("hub city {0:?} is not in the network")]
    UnknownHub(String),

    #[error("destination {0:?} is not in the network")]
    UnknownDestination(String),

    #[error("parcel {0:?} already exists")]
    DuplicateParcel(String),

    #[error("no parcel with id {0:?}")]
    UnknownParcel(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Fleet(#[from] FleetError),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

pub type SimResult<T> = Result<T, SimError>;
