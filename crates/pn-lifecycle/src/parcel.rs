//! The parcel record: attributes fixed at pickup plus mutable tracking state.

use pn_core::{check_weight, CityId, CoreResult, Priority, RiderId, Tick, WeightClass};
use pn_network::Route;

use crate::ShipmentStatus;

// ── PickupRequest ─────────────────────────────────────────────────────────────

/// What a customer supplies.  Destination is a city name, priority a 1–3 tier.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupRequest {
    pub id:          String,
    pub destination: String,
    pub weight_kg:   f64,
    pub priority:    u8,
}

impl PickupRequest {
    pub fn new(id: impl Into<String>, destination: impl Into<String>, weight_kg: f64, priority: u8) -> Self {
        Self { id: id.into(), destination: destination.into(), weight_kg, priority }
    }
}

// ── HistoryEvent ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEvent {
    pub description: String,
    pub tick:        Tick,
    pub location:    String,
}

/// A status transition produced by the lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StatusChange {
    pub from: ShipmentStatus,
    pub to:   ShipmentStatus,
}

// ── Parcel ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Parcel {
    pub id:               String,
    pub destination:      CityId,
    pub destination_name: String,
    pub weight_kg:        f64,
    pub priority:         Priority,
    pub weight_class:     WeightClass,
    /// Zone of the destination city.
    pub zone:             String,
    /// `priority * 1000 + floor(weight)`.
    pub score:            u32,

    pub status:            ShipmentStatus,
    pub rider:             Option<RiderId>,
    /// `"<name> (<Category>)"` of the assigned rider.
    pub rider_label:       Option<String>,
    pub delivery_attempts: u32,
    pub route:             Option<Route>,
    /// Index into `route.cities` of the city last reached.
    pub position:          usize,

    pub dispatched_at: Tick,
    pub last_update:   Tick,
    pub last_signal:   Tick,
    pub arrival:       Tick,

    /// Append-only.
    pub history: Vec<HistoryEvent>,
}

impl Parcel {
    /// Validate `req` and create the record in `PickupQueue` with its
    /// creation event logged.
    pub fn new(req: &PickupRequest, destination: CityId, zone: &str, now: Tick) -> CoreResult<Self> {
        let priority = Priority::from_tier(req.priority)?;
        let weight_kg = check_weight(req.weight_kg)?;
        let mut parcel = Self {
            id:                req.id.clone(),
            destination,
            destination_name:  req.destination.clone(),
            weight_kg,
            priority,
            weight_class:      WeightClass::from_weight(weight_kg),
            zone:              zone.to_owned(),
            score:             priority.score(weight_kg),
            status:            ShipmentStatus::PickupQueue,
            rider:             None,
            rider_label:       None,
            delivery_attempts: 0,
            route:             None,
            position:          0,
            dispatched_at:     Tick::ZERO,
            last_update:       now,
            last_signal:       now,
            arrival:           Tick::ZERO,
            history:           Vec::new(),
        };
        parcel.log_event("Pickup Request Created", "Customer Loc", now);
        Ok(parcel)
    }

    /// Append a history event without changing status or signal freshness.
    pub fn log_event(&mut self, description: impl Into<String>, location: impl Into<String>, now: Tick) {
        self.history.push(HistoryEvent {
            description: description.into(),
            tick:        now,
            location:    location.into(),
        });
    }

    /// Move to `status`, log the event and refresh last-update and
    /// last-known-signal to `now`.
    pub fn update_status(
        &mut self,
        status:      ShipmentStatus,
        description: impl Into<String>,
        location:    impl Into<String>,
        now:         Tick,
    ) -> StatusChange {
        let change = StatusChange { from: self.status, to: status };
        self.status = status;
        self.log_event(description, location, now);
        self.last_update = now;
        self.last_signal = now;
        change
    }

    /// City the parcel last reached, if it has a route.
    pub fn current_city(&self) -> Option<CityId> {
        self.route.as_ref().and_then(|r| r.city_at(self.position))
    }

    /// Seconds until the scheduled arrival while loading or in transit.
    /// Overdue parcels report zero.
    pub fn eta(&self, now: Tick) -> Option<u64> {
        match self.status {
            ShipmentStatus::Loading | ShipmentStatus::InTransit => Some(self.arrival.since(now)),
            _ => None,
        }
    }

    /// Fraction of the dispatch-to-arrival window elapsed at `now`, in `[0, 1]`.
    pub fn progress(&self, now: Tick) -> f64 {
        let total = self.arrival.since(self.dispatched_at).max(1);
        let elapsed = now.since(self.dispatched_at);
        (elapsed as f64 / total as f64).min(1.0)
    }

    pub fn route_distance_km(&self) -> Option<u32> {
        self.route.as_ref().map(|r| r.distance_km)
    }

    pub fn last_event(&self) -> Option<&HistoryEvent> {
        self.history.last()
    }
}
