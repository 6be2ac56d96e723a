//! `pn-dispatch` — the warehouse side of the simulator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`queue`]     | `DispatchQueue` — stable max-heap of pending parcels    |
//! | [`registry`]  | `ParcelRegistry<V>` — bounded upsert store keyed by id  |
//! | [`error`]     | `DispatchError`, `DispatchResult<T>`                    |
//!
//! The registry owns every parcel record for the lifetime of the run and
//! hands out [`ParcelKey`][pn_core::ParcelKey] slots.  The queue and the
//! lifecycle tracker only ever hold those keys.

pub mod error;
pub mod queue;
pub mod registry;

#[cfg(test)]
mod tests;

pub use error::{DispatchError, DispatchResult};
pub use queue::DispatchQueue;
pub use registry::{ParcelRegistry, DEFAULT_REGISTRY_CAPACITY};
