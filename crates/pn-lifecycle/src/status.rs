//! Lifecycle states.

use std::fmt;

/// Where a parcel is in its lifecycle.
///
/// Variant order is meaningful: everything up to and including `Warehouse`
/// is still cancellable without side effects.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipmentStatus {
    #[default]
    PickupQueue,
    Warehouse,
    Loading,
    InTransit,
    DeliveryAttempt,
    Delivered,
    Returned,
    Missing,
    Cancelled,
}

impl ShipmentStatus {
    /// Operator-facing label.
    pub fn label(self) -> &'static str {
        match self {
            ShipmentStatus::PickupQueue     => "Pickup Queue",
            ShipmentStatus::Warehouse       => "Warehouse (Sorted)",
            ShipmentStatus::Loading         => "Loading Vehicle",
            ShipmentStatus::InTransit       => "In Transit",
            ShipmentStatus::DeliveryAttempt => "Out for Delivery",
            ShipmentStatus::Delivered       => "Delivered",
            ShipmentStatus::Returned        => "Returned to Sender",
            ShipmentStatus::Missing         => "MISSING",
            ShipmentStatus::Cancelled       => "Cancelled",
        }
    }

    /// No further transitions happen from this state.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ShipmentStatus::Delivered
                | ShipmentStatus::Returned
                | ShipmentStatus::Missing
                | ShipmentStatus::Cancelled
        )
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
