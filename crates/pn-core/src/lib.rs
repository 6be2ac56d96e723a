//! `pn-core` — foundational types for the `parcel_net` logistics simulator.
//!
//! This crate is a dependency of every other `pn-*` crate.  It has no `pn-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`ids`]    | `CityId`, `EdgeId`, `ParcelKey`, `RiderId`             |
//! | [`time`]   | `Tick`, `SimClock`, `SimConfig`                        |
//! | [`rng`]    | `DecisionSource` trait, `SimRng`                       |
//! | [`parcel`] | `Priority`, `WeightClass`                              |
//! | [`error`]  | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod parcel;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{CityId, EdgeId, ParcelKey, RiderId};
pub use parcel::{check_weight, Priority, WeightClass, MAX_WEIGHT_KG};
pub use rng::{DecisionSource, SimRng};
pub use time::{SimClock, SimConfig, Tick};
