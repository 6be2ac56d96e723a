//! `pn-sim` — tick loop orchestrator for the `parcel_net` simulator.
//!
//! # Operator calls
//!
//! | Call                  | Effect                                                  |
//! |-----------------------|---------------------------------------------------------|
//! | `request_pickup`      | validate, register, move to Warehouse, enqueue          |
//! | `dispatch_next`       | pop best parcel → rider → route → Loading               |
//! | `cancel`              | cancel a queued parcel or return an in-transit one      |
//! | `force_reroute`       | run the rerouting pass outside the tick loop            |
//! | `tick` / `run`        | advance simulated time                                  |
//!
//! # Tick order
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Overload scan — every `overload_scan_interval_ticks`, block edges
//!                     whose load reached capacity.
//!   ② Reroute       — in-transit parcels whose road ahead is reported
//!                     blocked get a fresh shortest path.
//!   ③ Lifecycle     — one state-machine step per tracked parcel; parcels
//!                     leaving the road release route load and rider.
//! ```
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `serde`   | Serialize/deserialize config, events and summaries.      |
//! | `fx-hash` | FxHash for the parcel registry index.                    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pn_core::{SimConfig, SimRng};
//! use pn_lifecycle::PickupRequest;
//! use pn_network::BoundedDfs;
//! use pn_sim::{EventLog, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config, graph, BoundedDfs::default(), SimRng::new(42))
//!     .build()?;
//! let mut log = EventLog::default();
//! sim.request_pickup(PickupRequest::new("P1", "Karachi", 3.0, 2), &mut log)?;
//! sim.dispatch_next(&mut log)?;
//! sim.run(&mut log)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod event;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use config::DispatchConfig;
pub use error::{SimError, SimResult};
pub use event::{DispatchOutcome, SimEvent, TickSummary};
pub use observer::{EventLog, NoopObserver, SimObserver};
pub use sim::LogisticsSim;
