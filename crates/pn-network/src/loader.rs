//! CSV network loader.
//!
//! # CSV format
//!
//! Two files (or readers).  Cities first, one row per city:
//!
//! ```csv
//! city,zone
//! Lahore,Zone A
//! Islamabad,Zone B
//! ```
//!
//! Then roads, one row per undirected road.  `capacity` may be left empty,
//! in which case [`DEFAULT_ROAD_CAPACITY`] applies:
//!
//! ```csv
//! from,to,distance_km,capacity
//! Lahore,Islamabad,375,20
//! Islamabad,Rawalpindi,20,
//! ```
//!
//! Road endpoints are resolved by city name; an unknown name fails the load.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{CityGraph, NetworkError, NetworkResult};

/// Capacity applied to roads whose CSV row leaves it blank.
pub const DEFAULT_ROAD_CAPACITY: u32 = 10;

#[derive(Deserialize)]
struct CityRecord {
    city: String,
    zone: String,
}

#[derive(Deserialize)]
struct RoadRecord {
    from:        String,
    to:          String,
    distance_km: u32,
    capacity:    Option<u32>,
}

/// Load a [`CityGraph`] from a cities CSV and a roads CSV on disk.
pub fn load_network_csv(cities: &Path, roads: &Path, max_cities: usize) -> NetworkResult<CityGraph> {
    let cities = std::fs::File::open(cities)?;
    let roads = std::fs::File::open(roads)?;
    load_network_reader(cities, roads, max_cities)
}

/// Like [`load_network_csv`] but accepts any `Read` sources.
pub fn load_network_reader<C: Read, R: Read>(
    cities:     C,
    roads:      R,
    max_cities: usize,
) -> NetworkResult<CityGraph> {
    let mut graph = CityGraph::new(max_cities);

    let mut city_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(cities);
    for record in city_reader.deserialize::<CityRecord>() {
        let record = record?;
        graph.add_city(record.city, record.zone)?;
    }

    let mut road_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(roads);
    for record in road_reader.deserialize::<RoadRecord>() {
        let record = record?;
        let from = graph
            .lookup_city(&record.from)
            .ok_or_else(|| NetworkError::UnknownCity(record.from.clone()))?;
        let to = graph
            .lookup_city(&record.to)
            .ok_or_else(|| NetworkError::UnknownCity(record.to.clone()))?;
        graph.add_road(
            from,
            to,
            record.distance_km,
            record.capacity.unwrap_or(DEFAULT_ROAD_CAPACITY),
        )?;
    }

    Ok(graph)
}
