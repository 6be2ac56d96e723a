//! Plain data row types written by output backends.

/// One simulator event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParcelEventRow {
    pub tick:           u64,
    pub unix_time_secs: i64,
    pub kind:           &'static str,
    /// Empty for network-wide events.
    pub parcel:         String,
    pub detail:         String,
}

/// Counters for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:           u64,
    pub unix_time_secs: i64,
    pub transitions:    u64,
    pub reroutes:       u64,
    pub newly_blocked:  u64,
    pub in_flight:      u64,
    pub queued:         u64,
}

/// Status of one parcel at a snapshot tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParcelSnapshotRow {
    pub tick:     u64,
    pub parcel:   String,
    pub status:   &'static str,
    /// Index along the route; 0 before dispatch.
    pub position: u32,
    /// Seconds to arrival; `None` unless loading or in transit.
    pub eta_secs: Option<u64>,
}
