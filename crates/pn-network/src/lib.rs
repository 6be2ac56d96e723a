//! `pn-network` — city graph, bounded path search, and network loading.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`graph`]    | `CityGraph`, `City`, topology snapshot types              |
//! | [`paths`]    | `PathFinder` trait, `BoundedDfs`, `Route`, `select_shortest` |
//! | [`loader`]   | `load_network_csv`, `load_network_reader`                 |
//! | [`error`]    | `NetworkError`, `NetworkResult<T>`                        |
//!
//! # Edge state
//!
//! Every road is stored as two directed edges with independent load and
//! blocked state.  An edge is *usable* for routing while it is not blocked
//! and its load is below capacity.  Blocking is sticky: nothing in the
//! simulator ever clears it.

pub mod error;
pub mod graph;
pub mod loader;
pub mod paths;


pub use error::{NetworkError, NetworkResult};
pub use graph::{City, CityGraph, CityView, NetworkSnapshot, RoadView, DEFAULT_CITY_CAPACITY};
pub use loader::{load_network_csv, load_network_reader};
pub use paths::{select_shortest, BoundedDfs, PathFinder, Route, MAX_CANDIDATES};
