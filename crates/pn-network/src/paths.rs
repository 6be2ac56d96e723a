//! Route search: bounded simple-path enumeration and shortest selection.
//!
//! # Pluggability
//!
//! `pn-sim` and `pn-lifecycle` call the search through the [`PathFinder`]
//! trait, so a different strategy (Dijkstra, k-shortest) can be swapped in
//! without touching the dispatch code.  The default [`BoundedDfs`] mirrors
//! the operator workflow: list a handful of alternatives, recommend the
//! shortest.
//!
//! # Bounded, not optimal
//!
//! The search stops after [`MAX_CANDIDATES`] simple paths.  When more exist,
//! the shortest *discovered* path is returned, which need not be the global
//! shortest.  That trade keeps the per-dispatch work bounded on dense graphs.

use pn_core::CityId;

use crate::CityGraph;

/// Maximum number of candidate paths recorded per search.
pub const MAX_CANDIDATES: usize = 5;

// ── Route ─────────────────────────────────────────────────────────────────────

/// An ordered sequence of cities and its total road distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Cities to visit in order, origin first.  Never empty.
    pub cities: Vec<CityId>,
    pub distance_km: u32,
}

impl Route {
    /// Number of road segments.
    pub fn hops(&self) -> usize {
        self.cities.len().saturating_sub(1)
    }

    /// `true` if origin and destination are the same city.
    pub fn is_trivial(&self) -> bool {
        self.hops() == 0
    }

    /// First city; `None` only for a hand-built empty route.
    pub fn origin(&self) -> Option<CityId> {
        self.cities.first().copied()
    }

    pub fn destination(&self) -> Option<CityId> {
        self.cities.last().copied()
    }

    /// City at `position`, clamped to the destination.
    pub fn city_at(&self, position: usize) -> Option<CityId> {
        self.cities.get(position.min(self.hops())).copied()
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable candidate-route search.
pub trait PathFinder {
    /// Candidate routes from `start` to `end`, in discovery order.
    ///
    /// Only edges that are unblocked and below capacity may be used.  An
    /// empty result means "no route" and is not an error.  Unknown city ids
    /// yield an empty result.
    fn find_paths(&self, graph: &CityGraph, start: CityId, end: CityId) -> Vec<Route>;
}

/// Index of the minimum-distance route; ties go to the earliest.
pub fn select_shortest(routes: &[Route]) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (i, route) in routes.iter().enumerate() {
        if best.is_none_or(|(_, d)| route.distance_km < d) {
            best = Some((i, route.distance_km));
        }
    }
    best.map(|(i, _)| i)
}

// ── BoundedDfs ────────────────────────────────────────────────────────────────

/// Depth-first simple-path enumeration capped at `limit` results.
///
/// Cities are marked visited only while on the current path and unmarked on
/// backtrack, so other branches can pass through them.  Edges are tried in
/// each city's insertion order.
#[derive(Debug, Clone, Copy)]
pub struct BoundedDfs {
    pub limit: usize,
}

impl Default for BoundedDfs {
    fn default() -> Self {
        Self { limit: MAX_CANDIDATES }
    }
}

impl PathFinder for BoundedDfs {
    fn find_paths(&self, graph: &CityGraph, start: CityId, end: CityId) -> Vec<Route> {
        let mut found = Vec::new();
        if self.limit == 0 || !graph.contains(start) || !graph.contains(end) {
            return found;
        }
        let mut search = Search {
            graph,
            end,
            limit:   self.limit,
            visited: vec![false; graph.city_count()],
            path:    Vec::new(),
            found:   &mut found,
        };
        search.descend(start, 0);
        found
    }
}

struct Search<'a> {
    graph:   &'a CityGraph,
    end:     CityId,
    limit:   usize,
    visited: Vec<bool>,
    path:    Vec<CityId>,
    found:   &'a mut Vec<Route>,
}

impl Search<'_> {
    fn descend(&mut self, city: CityId, distance_km: u32) {
        if self.found.len() >= self.limit {
            return;
        }
        self.visited[city.index()] = true;
        self.path.push(city);

        if city == self.end {
            self.found.push(Route { cities: self.path.clone(), distance_km });
        } else {
            let graph = self.graph;
            for edge in graph.out_edges(city) {
                if self.found.len() >= self.limit {
                    break;
                }
                let next = graph.edge_to[edge.index()];
                if !self.visited[next.index()] && graph.is_usable(edge) {
                    self.descend(next, distance_km.saturating_add(graph.edge_distance_km[edge.index()]));
                }
            }
        }

        self.path.pop();
        self.visited[city.index()] = false;
    }
}
