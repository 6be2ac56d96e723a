//! Lifecycle timing and probability knobs.

/// Defaults reproduce the one-second-tick network model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LifecycleConfig {
    /// Ticks between entering `Loading` and departing.
    pub loading_delay_ticks: u64,
    /// An in-transit parcel silent for longer than this is marked missing.
    pub missing_timeout_ticks: u64,
    /// Route position advances on ticks divisible by this.
    pub advance_interval_ticks: u64,
    /// Per-tick chance an in-transit parcel loses its signal.
    pub signal_loss_probability: f64,
    /// Per-remaining-hop chance the route is reported blocked.
    pub reroute_probability_per_hop: f64,
    /// Chance a delivery attempt succeeds.
    pub delivery_success_probability: f64,
    /// Failed attempts before the parcel is returned to sender.
    pub max_delivery_attempts: u32,
    /// Ticks until the next attempt after a failed one.
    pub retry_offset_ticks: u64,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            loading_delay_ticks:          5,
            missing_timeout_ticks:        15,
            advance_interval_ticks:       3,
            signal_loss_probability:      0.001,
            reroute_probability_per_hop:  0.05,
            delivery_success_probability: 0.8,
            max_delivery_attempts:        3,
            retry_offset_ticks:           5,
        }
    }
}
