//! Values the simulator reports: dispatch outcomes, events and per-tick
//! summaries.

use std::fmt;

use pn_core::{EdgeId, ParcelKey, RiderId, Tick};
use pn_lifecycle::ShipmentStatus;

// ── DispatchOutcome ───────────────────────────────────────────────────────────

/// Result of one dispatch cycle.  Resource exhaustion is an outcome, not an
/// error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The parcel is loading onto a truck along its route.
    Dispatched { key: ParcelKey, rider: RiderId, distance_km: u32 },
    /// Nothing was waiting.
    QueueEmpty,
    /// Every rider is busy; the parcel went back into the queue.
    NoRider { key: ParcelKey },
    /// No usable path from the hub; the parcel was returned to sender.
    NoRoute { key: ParcelKey },
    /// The parcel was cancelled while queued and has been dropped.
    Discarded { key: ParcelKey },
}

impl DispatchOutcome {
    pub fn key(&self) -> Option<ParcelKey> {
        match *self {
            DispatchOutcome::Dispatched { key, .. }
            | DispatchOutcome::NoRider { key }
            | DispatchOutcome::NoRoute { key }
            | DispatchOutcome::Discarded { key } => Some(key),
            DispatchOutcome::QueueEmpty => None,
        }
    }
}

// ── SimEvent ──────────────────────────────────────────────────────────────────

/// Everything an observer can be told about, in the order it happened.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimEvent {
    PickupLogged {
        parcel:      String,
        destination: String,
        score:       u32,
    },
    Dispatched {
        parcel:      String,
        rider:       String,
        distance_km: u32,
        eta_ticks:   u64,
    },
    NoRider {
        parcel: String,
    },
    NoRoute {
        parcel: String,
    },
    /// A road closure injected by a live disruption.
    RoadBlocked {
        edge: EdgeId,
        road: String,
    },
    /// A road closed because its load reached capacity.
    RoadOverloaded {
        edge: EdgeId,
        road: String,
    },
    Rerouted {
        parcel:          String,
        old_distance_km: u32,
        new_distance_km: u32,
    },
    StatusChanged {
        parcel:      String,
        from:        ShipmentStatus,
        to:          ShipmentStatus,
        description: String,
        location:    String,
    },
}

impl SimEvent {
    /// Short machine-readable tag.
    pub fn kind(&self) -> &'static str {
        match self {
            SimEvent::PickupLogged { .. }   => "pickup",
            SimEvent::Dispatched { .. }     => "dispatched",
            SimEvent::NoRider { .. }        => "no_rider",
            SimEvent::NoRoute { .. }        => "no_route",
            SimEvent::RoadBlocked { .. }    => "road_blocked",
            SimEvent::RoadOverloaded { .. } => "road_overloaded",
            SimEvent::Rerouted { .. }       => "rerouted",
            SimEvent::StatusChanged { .. }  => "status",
        }
    }

    /// Parcel the event is about, if any.
    pub fn parcel(&self) -> Option<&str> {
        match self {
            SimEvent::PickupLogged { parcel, .. }
            | SimEvent::Dispatched { parcel, .. }
            | SimEvent::NoRider { parcel }
            | SimEvent::NoRoute { parcel }
            | SimEvent::Rerouted { parcel, .. }
            | SimEvent::StatusChanged { parcel, .. } => Some(parcel),
            SimEvent::RoadBlocked { .. } | SimEvent::RoadOverloaded { .. } => None,
        }
    }
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimEvent::PickupLogged { parcel, destination, score } => {
                write!(f, "{parcel}: pickup logged for {destination} (score {score})")
            }
            SimEvent::Dispatched { parcel, rider, distance_km, eta_ticks } => {
                write!(f, "{parcel}: dispatched with {rider}, {distance_km} km, ETA {eta_ticks}s")
            }
            SimEvent::NoRider { parcel } => write!(f, "{parcel}: no rider available, requeued"),
            SimEvent::NoRoute { parcel } => write!(f, "{parcel}: no route, returned to sender"),
            SimEvent::RoadBlocked { road, .. } => write!(f, "road blocked: {road}"),
            SimEvent::RoadOverloaded { road, .. } => write!(f, "road overloaded: {road}"),
            SimEvent::Rerouted { parcel, old_distance_km, new_distance_km } => {
                write!(f, "{parcel}: rerouted {old_distance_km} km -> {new_distance_km} km")
            }
            SimEvent::StatusChanged { parcel, from, to, description, location } => {
                write!(f, "{parcel}: {from} -> {to} ({description} @ {location})")
            }
        }
    }
}

// ── TickSummary ───────────────────────────────────────────────────────────────

/// Counters for one tick, handed to `SimObserver::on_tick_end`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSummary {
    pub tick:          Tick,
    /// Status transitions applied by the lifecycle pass.
    pub transitions:   usize,
    pub reroutes:      usize,
    /// Edges blocked by the overload scan this tick.
    pub newly_blocked: usize,
    /// Parcels still tracked after the tick.
    pub in_flight:     usize,
    /// Parcels waiting in the dispatch queue.
    pub queued:        usize,
}
