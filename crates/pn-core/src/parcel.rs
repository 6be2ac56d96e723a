//! Parcel attribute enums shared by the dispatch, fleet and lifecycle crates.

use crate::{CoreError, CoreResult};

/// Declared service tier.  The discriminant is the tier number used in the
/// priority score.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    #[default]
    Standard = 1,
    Express = 2,
    Overnight = 3,
}

impl Priority {
    /// Parse the 1–3 tier number supplied with a pickup request.
    pub fn from_tier(tier: u8) -> CoreResult<Self> {
        match tier {
            1 => Ok(Priority::Standard),
            2 => Ok(Priority::Express),
            3 => Ok(Priority::Overnight),
            other => Err(CoreError::InvalidPriority(other)),
        }
    }

    #[inline]
    pub fn tier(self) -> u8 {
        self as u8
    }

    /// `priority * 1000 + floor(weight)`.
    ///
    /// Weight dominates only within a tier; a 999 kg standard parcel still
    /// ranks below any express parcel.  Saturates at `u32::MAX`.
    #[inline]
    pub fn score(self, weight_kg: f64) -> u32 {
        let score = self.tier() as u64 * 1000 + weight_kg.max(0.0).floor() as u64;
        score.min(u32::MAX as u64) as u32
    }
}

/// Weight category derived from the parcel weight.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeightClass {
    Light,
    Medium,
    Heavy,
}

impl WeightClass {
    /// `< 5 kg` is light, `< 20 kg` medium, anything else heavy.
    pub fn from_weight(weight_kg: f64) -> Self {
        if weight_kg < 5.0 {
            WeightClass::Light
        } else if weight_kg < 20.0 {
            WeightClass::Medium
        } else {
            WeightClass::Heavy
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeightClass::Light  => "Light",
            WeightClass::Medium => "Medium",
            WeightClass::Heavy  => "Heavy",
        }
    }
}

impl std::fmt::Display for WeightClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heaviest accepted pickup.
pub const MAX_WEIGHT_KG: f64 = 100_000.0;

/// Validate a pickup weight: finite, positive and at most [`MAX_WEIGHT_KG`].
pub fn check_weight(weight_kg: f64) -> CoreResult<f64> {
    if weight_kg.is_finite() && weight_kg > 0.0 && weight_kg <= MAX_WEIGHT_KG {
        Ok(weight_kg)
    } else {
        Err(CoreError::InvalidWeight(weight_kg))
    }
}
