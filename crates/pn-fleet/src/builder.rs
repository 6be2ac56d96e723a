//! Fluent builder for a custom `RiderPool`.
//!
//! ```rust
//! use pn_fleet::{FleetConfig, RiderCategory, RiderPoolBuilder};
//!
//! let pool = RiderPoolBuilder::new(FleetConfig::default())
//!     .rider("Sana", RiderCategory::Light, 40.0)
//!     .rider("Omar", RiderCategory::Heavy, 250.0)
//!     .build()
//!     .unwrap();
//! assert_eq!(pool.count, 2);
//! ```

use pn_core::RiderId;

use crate::{FleetConfig, FleetError, FleetResult, RiderCategory, RiderPool};

pub struct RiderPoolBuilder {
    config: FleetConfig,
    riders: Vec<(String, RiderCategory, f64)>,
}

impl RiderPoolBuilder {
    pub fn new(config: FleetConfig) -> Self {
        Self { config, riders: Vec::new() }
    }

    /// Append a rider.  Pool order is append order.
    pub fn rider(mut self, name: impl Into<String>, category: RiderCategory, max_load: f64) -> Self {
        self.riders.push((name.into(), category, max_load));
        self
    }

    pub fn build(self) -> FleetResult<RiderPool> {
        // RiderId::INVALID reserves the top index.
        let max = RiderId::INVALID.index();
        if self.riders.len() > max {
            return Err(FleetError::PoolFull { max });
        }
        let mut pool = RiderPool::new(self.config);
        for (name, category, max_load) in self.riders {
            if !(max_load.is_finite() && max_load > 0.0) {
                return Err(FleetError::InvalidMaxLoad { name });
            }
            pool.push(name, category, max_load);
        }
        Ok(pool)
    }
}
