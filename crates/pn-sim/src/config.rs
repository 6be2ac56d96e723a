//! Warehouse and dispatch knobs.

/// Dispatch-side configuration.  Lifecycle and fleet knobs live in their own
/// crates; the city table bound belongs to whoever builds the `CityGraph`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DispatchConfig {
    /// Name of the city every route starts from.
    pub hub: String,
    /// Maximum number of distinct parcel identifiers.
    pub registry_capacity: usize,
    /// Transit time is drawn uniformly from this inclusive range.
    pub transit_min_ticks: u64,
    pub transit_max_ticks: u64,
    /// Chance of a live disruption after route selection.
    pub disruption_probability: f64,
    /// Overload scans run on ticks divisible by this.  0 disables them.
    pub overload_scan_interval_ticks: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            hub:                          "Lahore".into(),
            registry_capacity:            1007,
            transit_min_ticks:            10,
            transit_max_ticks:            30,
            disruption_probability:       0.3,
            overload_scan_interval_ticks: 10,
        }
    }
}
