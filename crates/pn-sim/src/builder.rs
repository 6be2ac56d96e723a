//! Fluent builder for constructing a [`LogisticsSim`].

use pn_core::{DecisionSource, SimConfig};
use pn_dispatch::{DispatchQueue, ParcelRegistry};
use pn_fleet::{FleetConfig, RiderPool};
use pn_lifecycle::LifecycleConfig;
use pn_network::{CityGraph, PathFinder};

use crate::{DispatchConfig, LogisticsSim, SimError, SimResult};

/// Fluent builder for [`LogisticsSim<P, D>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, output cadence
/// - [`CityGraph`] — the road network, containing the hub city
/// - `P: PathFinder` — route search (e.g. [`pn_network::BoundedDfs`])
/// - `D: DecisionSource` — randomness (e.g. [`pn_core::SimRng`])
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                               |
/// |-------------------|---------------------------------------|
/// | `.dispatch(c)`    | `DispatchConfig::default()`           |
/// | `.lifecycle(c)`   | `LifecycleConfig::default()`          |
/// | `.fleet(c)`       | `FleetConfig::default()`              |
/// | `.riders(pool)`   | `RiderPool::standard(fleet config)`   |
pub struct SimBuilder<P: PathFinder, D: DecisionSource> {
    config:    SimConfig,
    network:   CityGraph,
    finder:    P,
    decisions: D,
    dispatch:  DispatchConfig,
    lifecycle: LifecycleConfig,
    fleet:     FleetConfig,
    riders:    Option<RiderPool>,
}

impl<P: PathFinder, D: DecisionSource> SimBuilder<P, D> {
    pub fn new(config: SimConfig, network: CityGraph, finder: P, decisions: D) -> Self {
        Self {
            config,
            network,
            finder,
            decisions,
            dispatch:  DispatchConfig::default(),
            lifecycle: LifecycleConfig::default(),
            fleet:     FleetConfig::default(),
            riders:    None,
        }
    }

    pub fn dispatch(mut self, dispatch: DispatchConfig) -> Self {
        self.dispatch = dispatch;
        self
    }

    pub fn lifecycle(mut self, lifecycle: LifecycleConfig) -> Self {
        self.lifecycle = lifecycle;
        self
    }

    /// Thresholds for the standard pool.  Ignored when `.riders` is given.
    pub fn fleet(mut self, fleet: FleetConfig) -> Self {
        self.fleet = fleet;
        self
    }

    /// Replace the standard four-rider pool.
    pub fn riders(mut self, riders: RiderPool) -> Self {
        self.riders = Some(riders);
        self
    }

    /// Validate inputs, resolve the hub, and return a ready-to-run sim.
    pub fn build(self) -> SimResult<LogisticsSim<P, D>> {
        self.config.validate()?;
        let d = &self.dispatch;
        if d.transit_min_ticks > d.transit_max_ticks {
            return Err(SimError::Config(format!(
                "transit range {}..={} is empty",
                d.transit_min_ticks, d.transit_max_ticks
            )));
        }
        if d.registry_capacity == 0 {
            return Err(SimError::Config("registry_capacity must be non-zero".into()));
        }
        let hub = self
            .network
            .lookup_city(&d.hub)
            .ok_or_else(|| SimError::UnknownHub(d.hub.clone()))?;

        let riders = match self.riders {
            Some(pool) => pool,
            None => RiderPool::standard(self.fleet),
        };
        if riders.is_empty() {
            return Err(SimError::Config("rider pool is empty".into()));
        }

        Ok(LogisticsSim {
            clock:     self.config.make_clock(),
            parcels:   ParcelRegistry::new(self.dispatch.registry_capacity),
            queue:     DispatchQueue::new(),
            config:    self.config,
            dispatch:  self.dispatch,
            lifecycle: self.lifecycle,
            network:   self.network,
            riders,
            finder:    self.finder,
            decisions: self.decisions,
            hub,
            tracked:   Vec::new(),
        })
    }
}
