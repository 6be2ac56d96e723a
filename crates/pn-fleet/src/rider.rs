//! Courier categories and the read-only rider snapshot.

use std::fmt;

use pn_core::RiderId;

/// Specialisation of a courier.  Drives the match bonus during assignment.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiderCategory {
    Light,
    Heavy,
    Priority,
    General,
}

impl RiderCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            RiderCategory::Light    => "Light",
            RiderCategory::Heavy    => "Heavy",
            RiderCategory::Priority => "Priority",
            RiderCategory::General  => "General",
        }
    }
}

impl fmt::Display for RiderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owned copy of one rider's state, for queries and reporting.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiderView {
    pub id:            RiderId,
    pub name:          String,
    pub category:      RiderCategory,
    pub current_load:  f64,
    pub max_load:      f64,
    pub available:     bool,
    pub assigned:      u32,
}

impl RiderView {
    /// `"<name> (<Category>)"`, the label stored on assigned parcels.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.category)
    }
}
