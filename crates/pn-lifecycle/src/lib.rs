//! `pn-lifecycle` — parcel records and their per-tick state machine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`status`]   | `ShipmentStatus` — ordered lifecycle states                   |
//! | [`parcel`]   | `Parcel`, `PickupRequest`, `HistoryEvent`, `StatusChange`     |
//! | [`config`]   | `LifecycleConfig` — delays, timeouts and probabilities        |
//! | [`engine`]   | `advance`, `cancel`, rerouting around blocked roads           |
//! | [`error`]    | `LifecycleError`, `LifecycleResult<T>`                        |
//!
//! # Tick model
//!
//! One tick is one simulated second.  [`engine::advance`] applies at most
//! one status transition per parcel per tick:
//!
//! ```text
//! PickupQueue ─► Warehouse ─► Loading ─► InTransit ─► DeliveryAttempt ─► Delivered
//!      │             │                     │   ▲             │
//!      └─ Cancelled ◄┘                     │   └─ retry ─────┤
//!                                          ├─► Missing       └─► Returned
//!                                          └─► Returned (cancelled)
//! ```
//!
//! Every random branch draws from a [`DecisionSource`][pn_core::DecisionSource],
//! so tests script outcomes exactly.

pub mod config;
pub mod engine;
pub mod error;
pub mod parcel;
pub mod status;


pub use config::LifecycleConfig;
pub use engine::{advance, cancel, needs_reroute, reroute, CancelOutcome, Reroute};
pub use error::{LifecycleError, LifecycleResult};
pub use parcel::{HistoryEvent, Parcel, PickupRequest, StatusChange};
pub use status::ShipmentStatus;
