//! national — parcel_net run over the 25-city seed network.
//!
//! Usage: `national [config.json]`.  The optional JSON file overrides any of
//! the `sim`, `lifecycle`, `dispatch` and `fleet` sections, `city_capacity`
//! and `output_dir`; missing fields keep their defaults.  Events stream to
//! stdout and to CSV under `output_dir` (default `output/national`).

mod network;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;

use pn_core::{SimConfig, SimRng, Tick};
use pn_dispatch::ParcelRegistry;
use pn_fleet::FleetConfig;
use pn_lifecycle::{LifecycleConfig, Parcel, PickupRequest};
use pn_network::{BoundedDfs, DEFAULT_CITY_CAPACITY};
use pn_output::{CsvWriter, OutputWriter, SimOutputObserver};
use pn_sim::{DispatchConfig, DispatchOutcome, SimBuilder, SimEvent, SimObserver, TickSummary};

use network::build_network;

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(default)]
struct DemoConfig {
    sim:           SimConfig,
    lifecycle:     LifecycleConfig,
    dispatch:      DispatchConfig,
    fleet:         FleetConfig,
    /// City table bound for the seed network.
    city_capacity: usize,
    output_dir:    PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sim:           SimConfig { total_ticks: 120, ..SimConfig::default() },
            lifecycle:     LifecycleConfig::default(),
            dispatch:      DispatchConfig::default(),
            fleet:         FleetConfig::default(),
            city_capacity: DEFAULT_CITY_CAPACITY,
            output_dir:    PathBuf::from("output/national"),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

// ── Pickups ───────────────────────────────────────────────────────────────────

// (id, destination, weight_kg, priority tier)
const PICKUPS: &[(&str, &str, f64, u8)] = &[
    ("PK-1001", "Karachi",        12.0, 2),
    ("PK-1002", "Islamabad",       3.5, 1),
    ("PK-1003", "Peshawar",       48.0, 3),
    ("PK-1004", "Multan",        140.0, 3),
    ("PK-1005", "Sialkot",         0.8, 1),
    ("PK-1006", "Quetta",         22.0, 2),
    ("PK-1007", "Rahim Yar Khan",  6.0, 3),
    ("PK-1008", "Hyderabad",      75.0, 2),
];

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints every event and forwards everything to the CSV observer.
struct ConsoleObserver<W: OutputWriter> {
    inner:  SimOutputObserver<W>,
    events: usize,
    ticks:  usize,
}

impl<W: OutputWriter> ConsoleObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, events: 0, ticks: 0 }
    }
}

impl<W: OutputWriter> SimObserver for ConsoleObserver<W> {
    fn on_event(&mut self, tick: Tick, event: &SimEvent) {
        self.events += 1;
        println!("[{tick}] {event}");
        self.inner.on_event(tick, event);
    }

    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        self.ticks += 1;
        self.inner.on_tick_end(tick, summary);
    }

    fn on_snapshot(&mut self, tick: Tick, parcels: &ParcelRegistry<Parcel>) {
        self.inner.on_snapshot(tick, parcels);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let arg = std::env::args().nth(1).map(PathBuf::from);
    let cfg = load_config(arg.as_deref())?;

    println!("=== national — parcel_net ===");
    println!(
        "Hub: {}  |  Ticks: {}  |  Seed: {}",
        cfg.dispatch.hub, cfg.sim.total_ticks, cfg.sim.seed
    );
    println!();

    // 1. Seed network.
    let network = build_network(cfg.city_capacity)?;
    println!("Road network: {} cities, {} directed edges", network.city_count(), network.edge_count());

    // 2. Sim.
    let mut sim = SimBuilder::new(cfg.sim.clone(), network, BoundedDfs::default(), SimRng::new(cfg.sim.seed))
        .dispatch(cfg.dispatch.clone())
        .lifecycle(cfg.lifecycle.clone())
        .fleet(cfg.fleet.clone())
        .build()?;

    // 3. Output.
    let writer = CsvWriter::new(&cfg.output_dir)?;
    let mut obs = ConsoleObserver::new(SimOutputObserver::new(writer, &cfg.sim));

    // 4. Pickups, then one dispatch round.
    for &(id, destination, weight_kg, priority) in PICKUPS {
        sim.request_pickup(PickupRequest::new(id, destination, weight_kg, priority), &mut obs)?;
    }
    let outcomes = sim.dispatch_pending(&mut obs)?;
    let dispatched = outcomes
        .iter()
        .filter(|o| matches!(o, DispatchOutcome::Dispatched { .. }))
        .count();
    println!();
    println!("Dispatched {dispatched} of {} parcels, {} still queued", PICKUPS.len(), sim.queued().len());
    println!();

    // 5. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  {} events over {} ticks, CSV in {}", obs.events, obs.ticks, cfg.output_dir.display());
    println!();

    println!("{:<10} {:<16} {:<20} {:<24} {:>8}", "Parcel", "Destination", "Status", "Rider", "Attempts");
    println!("{}", "-".repeat(82));
    for p in sim.parcels() {
        println!(
            "{:<10} {:<16} {:<20} {:<24} {:>8}",
            p.id,
            p.destination_name,
            p.status.label(),
            p.rider_label.as_deref().unwrap_or("-"),
            p.delivery_attempts,
        );
    }
    println!();

    println!("{:<24} {:>10} {:>10} {:>10}", "Rider", "Load", "Max", "Available");
    println!("{}", "-".repeat(58));
    for r in sim.riders() {
        println!(
            "{:<24} {:>10.1} {:>10.1} {:>10}",
            r.label(),
            r.current_load,
            r.max_load,
            if r.available { "yes" } else { "no" },
        );
    }

    let blocked = sim
        .network_snapshot()
        .cities
        .iter()
        .flat_map(|c| c.roads.iter())
        .filter(|r| r.blocked)
        .count();
    println!();
    println!("Blocked directed roads at end of run: {blocked}");

    Ok(())
}
