//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, ParcelEventRow, ParcelSnapshotRow, TickSummaryRow};

/// Sink for simulation output.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    fn write_event(&mut self, row: &ParcelEventRow) -> OutputResult<()>;

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    fn write_snapshots(&mut self, rows: &[ParcelSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
