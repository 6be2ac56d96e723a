//! The `LogisticsSim` struct: operator calls and the tick loop.

use pn_core::{CityId, DecisionSource, ParcelKey, SimClock, SimConfig, Tick};
use pn_dispatch::{DispatchQueue, ParcelRegistry};
use pn_fleet::{AssignmentRequest, RiderPool, RiderView};
use pn_lifecycle::{
    advance, cancel, needs_reroute, reroute, CancelOutcome, LifecycleConfig, Parcel, PickupRequest,
    ShipmentStatus, StatusChange,
};
use pn_network::{select_shortest, CityGraph, NetworkSnapshot, PathFinder, Route};

use crate::{DispatchConfig, DispatchOutcome, SimError, SimEvent, SimObserver, SimResult, TickSummary};

/// The main simulation runner.
///
/// Owns the network, the rider pool, every parcel ever created, the dispatch
/// queue, and the list of parcels currently on the road.  All mutation goes
/// through `&mut self`.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct LogisticsSim<P: PathFinder, D: DecisionSource> {
    pub config:    SimConfig,
    pub dispatch:  DispatchConfig,
    pub lifecycle: LifecycleConfig,
    pub clock:     SimClock,

    pub network: CityGraph,
    pub riders:  RiderPool,
    pub parcels: ParcelRegistry<Parcel>,
    pub queue:   DispatchQueue,

    /// Route search used at dispatch and for rerouting.
    pub finder: P,
    /// Source of every random decision.
    pub decisions: D,

    pub(crate) hub: CityId,
    /// Dispatched parcels not yet in a terminal state, in dispatch order.
    pub(crate) tracked: Vec<ParcelKey>,
}

impl<P: PathFinder, D: DecisionSource> LogisticsSim<P, D> {
    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn now(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn hub(&self) -> CityId {
        self.hub
    }

    pub fn parcel(&self, id: &str) -> Option<&Parcel> {
        self.parcels.search(id)
    }

    /// Every parcel in creation order.
    pub fn parcels(&self) -> impl Iterator<Item = &Parcel> + '_ {
        self.parcels.iter().map(|(_, p)| p)
    }

    /// Seconds until arrival for a loading or in-transit parcel.
    pub fn eta(&self, id: &str) -> Option<u64> {
        self.parcel(id)?.eta(self.now())
    }

    pub fn riders(&self) -> Vec<RiderView> {
        self.riders.views()
    }

    pub fn network_snapshot(&self) -> NetworkSnapshot {
        self.network.snapshot()
    }

    /// Identifiers waiting for dispatch, best first.
    pub fn queued(&self) -> Vec<&str> {
        self.queue
            .pending()
            .into_iter()
            .filter_map(|k| self.parcels.id_of(k))
            .collect()
    }

    /// Identifiers of parcels currently loading or on the road.
    pub fn in_flight(&self) -> Vec<&str> {
        self.tracked.iter().filter_map(|&k| self.parcels.id_of(k)).collect()
    }

    // ── Operator calls ────────────────────────────────────────────────────

    /// Register a pickup, move it into the warehouse and enqueue it.
    ///
    /// Every check runs before anything is stored: unknown destination,
    /// duplicate id, invalid priority or weight, and a full registry are
    /// all rejected without side effects.
    pub fn request_pickup<O: SimObserver>(
        &mut self,
        req:      PickupRequest,
        observer: &mut O,
    ) -> SimResult<ParcelKey> {
        let now = self.now();
        let destination = self
            .network
            .lookup_city(&req.destination)
            .ok_or_else(|| SimError::UnknownDestination(req.destination.clone()))?;
        if self.parcels.contains(&req.id) {
            return Err(SimError::DuplicateParcel(req.id));
        }
        let zone = self.network.city(destination).zone.clone();
        let mut parcel = Parcel::new(&req, destination, &zone, now)?;
        let change = parcel.update_status(ShipmentStatus::Warehouse, "Arrived at Warehouse", "Central Hub", now);
        let score = parcel.score;
        let moved = status_event(&parcel, change);

        let key = self.parcels.insert(&req.id, parcel)?;
        self.queue.push(key, score);

        observer.on_event(now, &SimEvent::PickupLogged {
            parcel:      req.id,
            destination: req.destination,
            score,
        });
        observer.on_event(now, &moved);
        Ok(key)
    }

    /// Pop the highest-priority parcel and try to put it on the road.
    pub fn dispatch_next<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<DispatchOutcome> {
        let now = self.now();
        let Some(key) = self.queue.pop() else {
            return Ok(DispatchOutcome::QueueEmpty);
        };
        let Some(parcel) = self.parcels.get_mut(key) else {
            return Ok(DispatchOutcome::Discarded { key });
        };
        if parcel.status != ShipmentStatus::Warehouse {
            return Ok(DispatchOutcome::Discarded { key });
        }

        // ── Rider ─────────────────────────────────────────────────────────
        let request = AssignmentRequest {
            priority:  parcel.priority,
            class:     parcel.weight_class,
            weight_kg: parcel.weight_kg,
        };
        let Some(rider) = self.riders.assign(&request) else {
            self.queue.push(key, parcel.score);
            observer.on_event(now, &SimEvent::NoRider { parcel: parcel.id.clone() });
            return Ok(DispatchOutcome::NoRider { key });
        };
        let label = self.riders.label(rider).unwrap_or_default();
        parcel.rider = Some(rider);
        parcel.rider_label = Some(label.clone());

        // ── Route ─────────────────────────────────────────────────────────
        let destination = parcel.destination;
        let mut candidates = self.finder.find_paths(&self.network, self.hub, destination);
        if select_shortest(&candidates).is_none() {
            return self.return_to_sender(key, "No Route Available", now, observer);
        }

        // Live update: a closure or overload may invalidate the choice.
        if self.decisions.chance(self.dispatch.disruption_probability) {
            if self.decisions.chance(0.5) {
                if let Some(edge) = self.network.inject_disruption(&mut self.decisions) {
                    let road = self.network.edge_label(edge);
                    observer.on_event(now, &SimEvent::RoadBlocked { edge, road });
                }
            } else {
                for edge in self.network.scan_for_overloads() {
                    let road = self.network.edge_label(edge);
                    observer.on_event(now, &SimEvent::RoadOverloaded { edge, road });
                }
            }
            candidates = self.finder.find_paths(&self.network, self.hub, destination);
        }
        let Some(best) = select_shortest(&candidates) else {
            return self.return_to_sender(key, "Dynamic Route Issue - RTS", now, observer);
        };
        let route: Route = candidates.swap_remove(best);

        // ── Commit ────────────────────────────────────────────────────────
        self.network.apply_load_delta(&route.cities, 1);
        let transit = self
            .decisions
            .between(self.dispatch.transit_min_ticks, self.dispatch.transit_max_ticks);
        let Some(parcel) = self.parcels.get_mut(key) else {
            return Ok(DispatchOutcome::Discarded { key });
        };
        let distance_km = route.distance_km;
        parcel.route = Some(route);
        parcel.position = 0;
        let change = parcel.update_status(ShipmentStatus::Loading, "Loading onto Truck", "Bay 4", now);
        parcel.dispatched_at = now;
        parcel.arrival = now + transit + self.lifecycle.loading_delay_ticks;
        self.tracked.push(key);

        observer.on_event(now, &SimEvent::Dispatched {
            parcel:    parcel.id.clone(),
            rider:     label,
            distance_km,
            eta_ticks: parcel.arrival.since(now),
        });
        observer.on_event(now, &status_event(parcel, change));
        Ok(DispatchOutcome::Dispatched { key, rider, distance_km })
    }

    /// Dispatch until the queue is empty or no rider is free.
    pub fn dispatch_pending<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Vec<DispatchOutcome>> {
        let mut outcomes = Vec::new();
        loop {
            let outcome = self.dispatch_next(observer)?;
            match outcome {
                DispatchOutcome::QueueEmpty => break,
                DispatchOutcome::NoRider { .. } => {
                    outcomes.push(outcome);
                    break;
                }
                _ => outcomes.push(outcome),
            }
        }
        Ok(outcomes)
    }

    /// Cancel parcel `id`.
    ///
    /// A parcel still in the warehouse is cancelled and later discarded by
    /// dispatch.  An in-transit parcel is returned to sender and its route
    /// load and rider are released.  Anything else is rejected.
    pub fn cancel<O: SimObserver>(&mut self, id: &str, observer: &mut O) -> SimResult<CancelOutcome> {
        let now = self.now();
        let key = self
            .parcels
            .key_of(id)
            .ok_or_else(|| SimError::UnknownParcel(id.to_owned()))?;
        let Some(parcel) = self.parcels.get_mut(key) else {
            return Err(SimError::UnknownParcel(id.to_owned()));
        };
        let from = parcel.status;
        let outcome = cancel(parcel, now)?;
        let change = StatusChange { from, to: parcel.status };
        observer.on_event(now, &status_event(parcel, change));
        if outcome == CancelOutcome::ReturnedFromTransit {
            release_resources(&mut self.network, &mut self.riders, parcel)?;
            self.tracked.retain(|&k| k != key);
        }
        Ok(outcome)
    }

    /// Run the rerouting pass now, outside the tick loop.  Returns the
    /// number of parcels that got a new route.
    pub fn force_reroute<O: SimObserver>(&mut self, observer: &mut O) -> usize {
        let now = self.now();
        self.reroute_pass(now, observer)
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.now() < self.config.end_tick() {
            self.tick(observer)?;
        }
        observer.on_sim_end(self.now());
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.tick(observer)?;
        }
        Ok(())
    }

    /// Process the current tick and advance the clock.
    pub fn tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TickSummary> {
        let now = self.now();
        observer.on_tick_start(now);
        let mut summary = TickSummary { tick: now, ..TickSummary::default() };

        // ── ① Overload scan ──────────────────────────────────────────────
        if now.is_multiple_of(self.dispatch.overload_scan_interval_ticks) {
            for edge in self.network.scan_for_overloads() {
                summary.newly_blocked += 1;
                let road = self.network.edge_label(edge);
                observer.on_event(now, &SimEvent::RoadOverloaded { edge, road });
            }
        }

        // ── ② Reroute ────────────────────────────────────────────────────
        summary.reroutes = self.reroute_pass(now, observer);

        // ── ③ Lifecycle ──────────────────────────────────────────────────
        for &key in &self.tracked {
            let Some(parcel) = self.parcels.get_mut(key) else {
                continue;
            };
            let Some(change) = advance(parcel, now, &self.lifecycle, &mut self.decisions) else {
                continue;
            };
            summary.transitions += 1;
            observer.on_event(now, &status_event(parcel, change));
            if matches!(
                change.to,
                ShipmentStatus::Delivered | ShipmentStatus::Returned | ShipmentStatus::Missing
            ) {
                release_resources(&mut self.network, &mut self.riders, parcel)?;
            }
        }
        let parcels = &self.parcels;
        self.tracked
            .retain(|&k| parcels.get(k).is_some_and(|p| !p.status.is_terminal()));

        summary.in_flight = self.tracked.len();
        summary.queued = self.queue.len();
        observer.on_tick_end(now, &summary);
        if self.config.output_interval_ticks > 0 && now.is_multiple_of(self.config.output_interval_ticks) {
            observer.on_snapshot(now, &self.parcels);
        }
        self.clock.advance();
        Ok(summary)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn reroute_pass<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> usize {
        let mut rerouted = 0;
        for &key in &self.tracked {
            let Some(parcel) = self.parcels.get_mut(key) else {
                continue;
            };
            if !needs_reroute(parcel, &self.lifecycle, &mut self.decisions) {
                continue;
            }
            if let Some(r) = reroute(parcel, &mut self.network, &self.finder, now) {
                rerouted += 1;
                observer.on_event(now, &SimEvent::Rerouted {
                    parcel:          parcel.id.clone(),
                    old_distance_km: r.old_distance_km,
                    new_distance_km: r.new_distance_km,
                });
            }
        }
        rerouted
    }

    /// Mark a parcel that could not be routed from the hub as returned and
    /// release its rider.  Nothing was loaded onto the network yet.
    fn return_to_sender<O: SimObserver>(
        &mut self,
        key:         ParcelKey,
        description: &str,
        now:         Tick,
        observer:    &mut O,
    ) -> SimResult<DispatchOutcome> {
        let Some(parcel) = self.parcels.get_mut(key) else {
            return Ok(DispatchOutcome::Discarded { key });
        };
        let change = parcel.update_status(ShipmentStatus::Returned, description, "Warehouse", now);
        if let Some(label) = &parcel.rider_label {
            self.riders.release(label)?;
        }
        observer.on_event(now, &SimEvent::NoRoute { parcel: parcel.id.clone() });
        observer.on_event(now, &status_event(parcel, change));
        Ok(DispatchOutcome::NoRoute { key })
    }
}

/// Give back the route load and the rider held by a parcel leaving the road.
fn release_resources(network: &mut CityGraph, riders: &mut RiderPool, parcel: &Parcel) -> SimResult<()> {
    if let Some(route) = &parcel.route {
        network.apply_load_delta(&route.cities, -1);
    }
    if let Some(label) = &parcel.rider_label {
        riders.release(label)?;
    }
    Ok(())
}

fn status_event(parcel: &Parcel, change: StatusChange) -> SimEvent {
    let (description, location) = parcel
        .last_event()
        .map(|e| (e.description.clone(), e.location.clone()))
        .unwrap_or_default();
    SimEvent::StatusChanged {
        parcel: parcel.id.clone(),
        from: change.from,
        to: change.to,
        description,
        location,
    }
}
