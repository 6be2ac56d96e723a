//! `pn-fleet` — courier storage and rider assignment for `parcel_net`.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`rider`]     | `RiderCategory`, `RiderView`                              |
//! | [`pool`]      | `RiderPool` (SoA arrays), `FleetConfig`, `AssignmentRequest` |
//! | [`builder`]   | `RiderPoolBuilder` (fluent construction)                  |
//! | [`error`]     | `FleetError`, `FleetResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on config and snapshots. |

pub mod builder;
pub mod error;
pub mod pool;
pub mod rider;

#[cfg(test)]
mod tests;

pub use builder::RiderPoolBuilder;
pub use error::{FleetError, FleetResult};
pub use pool::{AssignmentRequest, FleetConfig, RiderPool};
pub use rider::{RiderCategory, RiderView};
