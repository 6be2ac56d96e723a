//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `parcel_events.csv`
//! - `tick_summaries.csv`
//! - `parcel_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, ParcelEventRow, ParcelSnapshotRow, TickSummaryRow};

pub struct CsvWriter {
    events:    Writer<File>,
    summaries: Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut events = Writer::from_path(dir.join("parcel_events.csv"))?;
        events.write_record(["tick", "unix_time_secs", "kind", "parcel", "detail"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick",
            "unix_time_secs",
            "transitions",
            "reroutes",
            "newly_blocked",
            "in_flight",
            "queued",
        ])?;

        let mut snapshots = Writer::from_path(dir.join("parcel_snapshots.csv"))?;
        snapshots.write_record(["tick", "parcel", "status", "position", "eta_secs"])?;

        Ok(Self { events, summaries, snapshots, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_event(&mut self, row: &ParcelEventRow) -> OutputResult<()> {
        self.events.write_record([
            row.tick.to_string().as_str(),
            row.unix_time_secs.to_string().as_str(),
            row.kind,
            row.parcel.as_str(),
            row.detail.as_str(),
        ])?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.unix_time_secs.to_string(),
            row.transitions.to_string(),
            row.reroutes.to_string(),
            row.newly_blocked.to_string(),
            row.in_flight.to_string(),
            row.queued.to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[ParcelSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.parcel.clone(),
                row.status.to_owned(),
                row.position.to_string(),
                row.eta_secs.map(|e| e.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.summaries.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
