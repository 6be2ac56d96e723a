//! Simulation observer trait for progress reporting and data collection.

use pn_core::Tick;
use pn_dispatch::ParcelRegistry;
use pn_lifecycle::Parcel;

use crate::{SimEvent, TickSummary};

/// Callbacks invoked by [`LogisticsSim`][crate::LogisticsSim] as things
/// happen.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_event(&mut self, tick: Tick, event: &SimEvent) {
///         println!("[{tick}] {event}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with that tick's counters.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called for every event, including those raised by operator calls
    /// between ticks.
    fn on_event(&mut self, _tick: Tick, _event: &SimEvent) {}

    /// Called every `config.output_interval_ticks` ticks with read-only
    /// access to every parcel.
    fn on_snapshot(&mut self, _tick: Tick, _parcels: &ParcelRegistry<Parcel>) {}

    /// Called once after the final tick of `run`.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Collects every event and tick summary in memory.
#[derive(Debug, Default)]
pub struct EventLog {
    pub events:    Vec<(Tick, SimEvent)>,
    pub summaries: Vec<TickSummary>,
    pub ended_at:  Option<Tick>,
}

impl EventLog {
    /// Events of the given [`SimEvent::kind`].
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a (Tick, SimEvent)> + 'a {
        self.events.iter().filter(move |(_, e)| e.kind() == kind)
    }

    /// Events about parcel `id`.
    pub fn for_parcel<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a (Tick, SimEvent)> + 'a {
        self.events.iter().filter(move |(_, e)| e.parcel() == Some(id))
    }
}

impl SimObserver for EventLog {
    fn on_tick_end(&mut self, _tick: Tick, summary: &TickSummary) {
        self.summaries.push(*summary);
    }

    fn on_event(&mut self, tick: Tick, event: &SimEvent) {
        self.events.push((tick, event.clone()));
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.ended_at = Some(final_tick);
    }
}
