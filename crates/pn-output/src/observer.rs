//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use pn_core::{SimConfig, Tick};
use pn_dispatch::ParcelRegistry;
use pn_lifecycle::Parcel;
use pn_sim::{SimEvent, SimObserver, TickSummary};

use crate::row::{ParcelEventRow, ParcelSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes events, tick summaries and parcel snapshots
/// to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:             W,
    start_unix_secs:    i64,
    tick_duration_secs: u32,
    last_error:         Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for wall-clock
    /// conversion.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            start_unix_secs:    config.start_unix_secs,
            tick_duration_secs: config.tick_duration_secs,
            last_error:         None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer outside `run` (e.g. after operator calls only).
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn unix_time(&self, tick: Tick) -> i64 {
        self.start_unix_secs + tick.0 as i64 * self.tick_duration_secs as i64
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_event(&mut self, tick: Tick, event: &SimEvent) {
        let row = ParcelEventRow {
            tick:           tick.0,
            unix_time_secs: self.unix_time(tick),
            kind:           event.kind(),
            parcel:         event.parcel().unwrap_or_default().to_owned(),
            detail:         event.to_string(),
        };
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        let row = TickSummaryRow {
            tick:           tick.0,
            unix_time_secs: self.unix_time(tick),
            transitions:    summary.transitions as u64,
            reroutes:       summary.reroutes as u64,
            newly_blocked:  summary.newly_blocked as u64,
            in_flight:      summary.in_flight as u64,
            queued:         summary.queued as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, parcels: &ParcelRegistry<Parcel>) {
        let rows: Vec<ParcelSnapshotRow> = parcels
            .iter()
            .map(|(_, p)| ParcelSnapshotRow {
                tick:     tick.0,
                parcel:   p.id.clone(),
                status:   p.status.label(),
                position: p.position as u32,
                eta_secs: p.eta(tick),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
