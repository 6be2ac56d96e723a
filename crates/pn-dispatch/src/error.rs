use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("parcel registry full ({capacity} identifiers)")]
    RegistryFull { capacity: usize },
}

pub type DispatchResult<T> = Result<T, DispatchError>;
