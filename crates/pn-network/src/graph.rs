//! City graph with capacity-aware, blockable road edges.
//!
//! # Data layout
//!
//! Cities are appended once at construction time; roads may be added in any
//! order afterwards.  Edge attributes live in parallel arrays indexed by
//! `EdgeId`:
//!
//! ```text
//! edge_from / edge_to / edge_distance_km / edge_capacity / edge_load / edge_blocked
//! ```
//!
//! Each city keeps its outgoing `EdgeId`s in insertion order in `city_out`.
//! The path search walks that order, so the order in which roads are added
//! decides which five simple paths are discovered first.

use serde::Serialize;

use pn_core::{CityId, DecisionSource, EdgeId};

use crate::{NetworkError, NetworkResult};

/// Upper bound on cities used when none is configured.
pub const DEFAULT_CITY_CAPACITY: usize = 200;

/// A delivery city.  Identity is immutable once added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub name: String,
    pub zone: String,
}

// ── CityGraph ─────────────────────────────────────────────────────────────────

/// Undirected road network stored as symmetric directed edge pairs.
///
/// Fields are `pub` for direct indexed reads; mutate through the methods so
/// the load floor and sticky blocking hold.
#[derive(Debug)]
pub struct CityGraph {
    max_cities: usize,

    pub cities: Vec<City>,

    /// Outgoing edges of each city, in insertion order.  Indexed by `CityId`.
    pub city_out: Vec<Vec<EdgeId>>,

    pub edge_from: Vec<CityId>,
    pub edge_to: Vec<CityId>,

    /// Road length in kilometres.  Used as the path cost.
    pub edge_distance_km: Vec<u32>,

    /// Number of parcels that may be routed over the edge at once.
    pub edge_capacity: Vec<u32>,

    /// Parcels currently routed over the edge.  Never negative.
    pub edge_load: Vec<u32>,

    /// Sticky closure flag.
    pub edge_blocked: Vec<bool>,
}

impl CityGraph {
    /// An empty graph that accepts at most `max_cities` cities.
    pub fn new(max_cities: usize) -> Self {
        Self {
            max_cities,
            cities:           Vec::new(),
            city_out:         Vec::new(),
            edge_from:        Vec::new(),
            edge_to:          Vec::new(),
            edge_distance_km: Vec::new(),
            edge_capacity:    Vec::new(),
            edge_load:        Vec::new(),
            edge_blocked:     Vec::new(),
        }
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Append a city and return its id (sequential from 0).
    ///
    /// Names are expected to be unique; duplicates are accepted but
    /// [`lookup_city`](Self::lookup_city) only ever finds the first.
    pub fn add_city(&mut self, name: impl Into<String>, zone: impl Into<String>) -> NetworkResult<CityId> {
        if self.cities.len() >= self.max_cities {
            return Err(NetworkError::CityCapacityExceeded { max: self.max_cities });
        }
        let id = CityId(self.cities.len() as u32);
        self.cities.push(City { name: name.into(), zone: zone.into() });
        self.city_out.push(Vec::new());
        Ok(id)
    }

    /// Add a road between `a` and `b` as two directed edges with independent
    /// load and blocked state.  Returns `(a→b, b→a)`.
    pub fn add_road(
        &mut self,
        a:           CityId,
        b:           CityId,
        distance_km: u32,
        capacity:    u32,
    ) -> NetworkResult<(EdgeId, EdgeId)> {
        for id in [a, b] {
            if id.index() >= self.cities.len() {
                return Err(NetworkError::CityNotFound(id));
            }
        }
        let forward = self.push_edge(a, b, distance_km, capacity);
        let back    = self.push_edge(b, a, distance_km, capacity);
        Ok((forward, back))
    }

    fn push_edge(&mut self, from: CityId, to: CityId, distance_km: u32, capacity: u32) -> EdgeId {
        let id = EdgeId(self.edge_to.len() as u32);
        self.edge_from.push(from);
        self.edge_to.push(to);
        self.edge_distance_km.push(distance_km);
        self.edge_capacity.push(capacity);
        self.edge_load.push(0);
        self.edge_blocked.push(false);
        self.city_out[from.index()].push(id);
        id
    }

    // ── Dimensions & lookup ───────────────────────────────────────────────

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn max_cities(&self) -> usize {
        self.max_cities
    }

    pub fn contains(&self, city: CityId) -> bool {
        city.index() < self.cities.len()
    }

    pub fn city(&self, id: CityId) -> &City {
        &self.cities[id.index()]
    }

    /// Linear scan by name.
    pub fn lookup_city(&self, name: &str) -> Option<CityId> {
        self.cities
            .iter()
            .position(|c| c.name == name)
            .map(|i| CityId(i as u32))
    }

    pub fn zone_of(&self, name: &str) -> Option<&str> {
        self.lookup_city(name).map(|id| self.cities[id.index()].zone.as_str())
    }

    #[inline]
    pub fn out_edges(&self, city: CityId) -> impl Iterator<Item = EdgeId> + '_ {
        self.city_out[city.index()].iter().copied()
    }

    /// First directed edge `from → to`, if any.
    pub fn edge_between(&self, from: CityId, to: CityId) -> Option<EdgeId> {
        self.out_edges(from).find(|e| self.edge_to[e.index()] == to)
    }

    // ── Edge state ────────────────────────────────────────────────────────

    #[inline]
    pub fn is_over_capacity(&self, edge: EdgeId) -> bool {
        self.edge_load[edge.index()] >= self.edge_capacity[edge.index()]
    }

    /// Unblocked and below capacity.
    #[inline]
    pub fn is_usable(&self, edge: EdgeId) -> bool {
        !self.edge_blocked[edge.index()] && !self.is_over_capacity(edge)
    }

    /// Add `delta` to the load of every edge along `path` (consecutive city
    /// pairs).  Loads are floored at zero; pairs with no connecting edge are
    /// skipped.
    pub fn apply_load_delta(&mut self, path: &[CityId], delta: i32) {
        for pair in path.windows(2) {
            let Some(edge) = self.edge_between(pair[0], pair[1]) else {
                continue;
            };
            let load = &mut self.edge_load[edge.index()];
            *load = if delta >= 0 {
                load.saturating_add(delta as u32)
            } else {
                load.saturating_sub(delta.unsigned_abs())
            };
        }
    }

    /// Block `edge`.  Returns `true` if it was not already blocked.
    pub fn block(&mut self, edge: EdgeId) -> bool {
        !std::mem::replace(&mut self.edge_blocked[edge.index()], true)
    }

    /// Block every edge whose load has reached capacity.
    ///
    /// Idempotent: returns only the edges newly blocked by this call.
    pub fn scan_for_overloads(&mut self) -> Vec<EdgeId> {
        let saturated: Vec<EdgeId> = (0..self.edge_count())
            .map(|i| EdgeId(i as u32))
            .filter(|&e| self.is_over_capacity(e) && !self.edge_blocked[e.index()])
            .collect();
        for &edge in &saturated {
            self.edge_blocked[edge.index()] = true;
        }
        saturated
    }

    /// Simulated road closure: block a uniformly random edge incident to a
    /// uniformly random city.
    ///
    /// Returns the chosen edge, or `None` when the graph has fewer than two
    /// cities or the chosen city has no roads.  The edge is returned even if
    /// it was already blocked.
    pub fn inject_disruption<D: DecisionSource>(&mut self, decisions: &mut D) -> Option<EdgeId> {
        if self.cities.len() < 2 {
            return None;
        }
        let city = decisions.pick(self.cities.len());
        let out = &self.city_out[city];
        if out.is_empty() {
            return None;
        }
        let edge = out[decisions.pick(out.len())];
        self.block(edge);
        Some(edge)
    }

    /// Human-readable `"From -> To"` label for an edge.
    pub fn edge_label(&self, edge: EdgeId) -> String {
        format!(
            "{} -> {}",
            self.cities[self.edge_from[edge.index()].index()].name,
            self.cities[self.edge_to[edge.index()].index()].name,
        )
    }

    /// City names along `path`, for display.
    pub fn path_names(&self, path: &[CityId]) -> Vec<&str> {
        path.iter().map(|c| self.cities[c.index()].name.as_str()).collect()
    }

    // ── Snapshot ──────────────────────────────────────────────────────────

    /// Owned copy of the topology and current edge state for display.
    pub fn snapshot(&self) -> NetworkSnapshot {
        let cities = self
            .cities
            .iter()
            .enumerate()
            .map(|(i, city)| CityView {
                name:  city.name.clone(),
                zone:  city.zone.clone(),
                roads: self.city_out[i]
                    .iter()
                    .map(|&e| RoadView {
                        to:          self.cities[self.edge_to[e.index()].index()].name.clone(),
                        distance_km: self.edge_distance_km[e.index()],
                        load:        self.edge_load[e.index()],
                        capacity:    self.edge_capacity[e.index()],
                        blocked:     self.edge_blocked[e.index()],
                        overloaded:  self.is_over_capacity(e),
                    })
                    .collect(),
            })
            .collect();
        NetworkSnapshot { cities }
    }
}

impl Default for CityGraph {
    fn default() -> Self {
        Self::new(DEFAULT_CITY_CAPACITY)
    }
}

// ── Snapshot types ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkSnapshot {
    pub cities: Vec<CityView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityView {
    pub name:  String,
    pub zone:  String,
    pub roads: Vec<RoadView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadView {
    pub to:          String,
    pub distance_km: u32,
    pub load:        u32,
    pub capacity:    u32,
    pub blocked:     bool,
    pub overloaded:  bool,
}
