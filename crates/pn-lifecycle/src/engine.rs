//! Per-tick lifecycle advancement, cancellation and dynamic rerouting.
//!
//! These are free functions over a single [`Parcel`]; `pn-sim` owns the
//! registry and decides which parcels to visit and in what order.  Resource
//! bookkeeping (rider release, route load) stays with the caller, which
//! inspects the returned [`StatusChange`].

use pn_core::{CityId, DecisionSource, Tick};
use pn_network::{select_shortest, CityGraph, PathFinder};

use crate::{LifecycleConfig, LifecycleError, LifecycleResult, Parcel, StatusChange};

use crate::ShipmentStatus::*;

/// Advance `parcel` by one tick.
///
/// Rules, in order:
///
/// 1. An in-transit parcel silent for more than `missing_timeout_ticks` is
///    marked `Missing`.
/// 2. `Loading` departs once `loading_delay_ticks` have passed since the
///    last update.
/// 3. `InTransit` moves one hop on every `advance_interval_ticks`-th tick,
///    then either loses its signal or, at the scheduled arrival, goes out
///    for delivery.
/// 4. `DeliveryAttempt` succeeds, retries, or returns to sender after
///    `max_delivery_attempts` failures.
///
/// At most one transition happens per call.  For an in-transit parcel the
/// signal-loss draw is taken every tick; a delivery attempt takes exactly one
/// draw.
pub fn advance<D: DecisionSource>(
    parcel:    &mut Parcel,
    now:       Tick,
    cfg:       &LifecycleConfig,
    decisions: &mut D,
) -> Option<StatusChange> {
    if parcel.status == InTransit && now.since(parcel.last_signal) > cfg.missing_timeout_ticks {
        let desc = format!("No Signal for {}+ Seconds - Marked Missing", cfg.missing_timeout_ticks);
        return Some(parcel.update_status(Missing, desc, "Unknown", now));
    }

    match parcel.status {
        Loading => {
            if now >= parcel.last_update + cfg.loading_delay_ticks {
                return Some(parcel.update_status(InTransit, "Vehicle Departed", "On Road", now));
            }
            None
        }
        InTransit => {
            let hops = parcel.route.as_ref().map_or(0, |r| r.hops());
            if parcel.position < hops && now.is_multiple_of(cfg.advance_interval_ticks) {
                parcel.position += 1;
            }
            if decisions.chance(cfg.signal_loss_probability) {
                Some(parcel.update_status(Missing, "Signal Lost - Investigation Started", "Unknown", now))
            } else if now >= parcel.arrival {
                let location = parcel.destination_name.clone();
                Some(parcel.update_status(DeliveryAttempt, "Arrived at Destination Hub", location, now))
            } else {
                None
            }
        }
        DeliveryAttempt => {
            if decisions.chance(cfg.delivery_success_probability) {
                return Some(parcel.update_status(Delivered, "Handed to Recipient", "Doorstep", now));
            }
            parcel.delivery_attempts += 1;
            if parcel.delivery_attempts >= cfg.max_delivery_attempts {
                Some(parcel.update_status(Returned, "Max Attempts Reached - RTS", "Local Hub", now))
            } else {
                let change = parcel.update_status(InTransit, "Recipient Unavailable - Retrying", "Local Hub", now);
                parcel.arrival = now + cfg.retry_offset_ticks;
                Some(change)
            }
        }
        _ => None,
    }
}

// ── Cancellation ──────────────────────────────────────────────────────────────

/// What a successful cancellation did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CancelOutcome {
    /// Still at the warehouse; nothing was committed.
    Cancelled,
    /// Was on the road; the caller must release its route load and rider.
    ReturnedFromTransit,
}

/// Cancel `parcel` at `now`.
///
/// Parcels not yet dispatched become `Cancelled`.  In-transit parcels are
/// returned to sender.  Any other state is rejected without mutation.
pub fn cancel(parcel: &mut Parcel, now: Tick) -> LifecycleResult<CancelOutcome> {
    if parcel.status <= Warehouse {
        parcel.update_status(Cancelled, "Cancelled by User", "Warehouse", now);
        Ok(CancelOutcome::Cancelled)
    } else if parcel.status == InTransit {
        parcel.update_status(Returned, "Cancelled During Transit - Returning", "In Transit", now);
        Ok(CancelOutcome::ReturnedFromTransit)
    } else {
        Err(LifecycleError::CannotCancel { id: parcel.id.clone(), status: parcel.status })
    }
}

// ── Rerouting ─────────────────────────────────────────────────────────────────

/// A route replacement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Reroute {
    /// City the new route starts from.
    pub from:            CityId,
    pub old_distance_km: u32,
    pub new_distance_km: u32,
}

/// Draw once per untraveled hop; `true` as soon as one draw reports the road
/// ahead blocked.  Only in-transit parcels with a route are eligible.
pub fn needs_reroute<D: DecisionSource>(parcel: &Parcel, cfg: &LifecycleConfig, decisions: &mut D) -> bool {
    if parcel.status != InTransit {
        return false;
    }
    let Some(route) = &parcel.route else {
        return false;
    };
    let remaining = route.hops().saturating_sub(parcel.position);
    (0..remaining).any(|_| decisions.chance(cfg.reroute_probability_per_hop))
}

/// Replace the remaining route with the shortest path from the current city
/// to the destination.
///
/// Edge load moves from the whole old route to the new one and the position
/// resets to the new origin.  When no path exists the stale route is kept
/// and `None` is returned.
pub fn reroute<P: PathFinder + ?Sized>(
    parcel: &mut Parcel,
    graph:  &mut CityGraph,
    finder: &P,
    now:    Tick,
) -> Option<Reroute> {
    let (from, old_distance_km) = {
        let route = parcel.route.as_ref()?;
        (route.city_at(parcel.position)?, route.distance_km)
    };
    let mut candidates = finder.find_paths(graph, from, parcel.destination);
    let best = select_shortest(&candidates)?;
    let new_route = candidates.swap_remove(best);

    if let Some(old) = parcel.route.take() {
        graph.apply_load_delta(&old.cities, -1);
    }
    graph.apply_load_delta(&new_route.cities, 1);
    let new_distance_km = new_route.distance_km;
    parcel.route = Some(new_route);
    parcel.position = 0;
    parcel.log_event("Route Recalculated Due to Blockage", "System", now);

    Some(Reroute { from, old_distance_km, new_distance_km })
}
