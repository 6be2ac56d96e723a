//! `RiderPool` — Structure-of-Arrays courier state plus the assignment
//! heuristic.
//!
//! Every `Vec` field has exactly `count` elements and `RiderId` is the index
//! into all of them.  Pool order matters: assignment ties go to the rider
//! scanned first.
//!
//! # Scoring
//!
//! For each available rider:
//!
//!   score = 100 · [overnight ∧ Priority rider]
//!         +  80 · [Heavy/Heavy or Light/Light]
//!         + 100 − ⌊load · 100 / max⌋
//!
//! The winner takes the parcel weight onto its load and becomes unavailable
//! once the load reaches the busy threshold.  `release` takes a fixed amount
//! off again and restores availability below the lower threshold; the gap
//! between the two thresholds keeps a rider from flapping.

use pn_core::{Priority, RiderId, WeightClass};

use crate::{FleetError, FleetResult, RiderCategory, RiderView};

// ── FleetConfig ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FleetConfig {
    /// Fraction of max load at which a rider stops taking parcels.
    pub busy_threshold: f64,
    /// Fraction of max load below which a released rider is available again.
    pub available_threshold: f64,
    /// Load removed from a rider per `release` call.
    pub release_decrement: f64,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            busy_threshold:      0.9,
            available_threshold: 0.7,
            release_decrement:   10.0,
        }
    }
}

// ── AssignmentRequest ─────────────────────────────────────────────────────────

/// The parcel attributes the heuristic looks at.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AssignmentRequest {
    pub priority:  Priority,
    pub class:     WeightClass,
    pub weight_kg: f64,
}

impl AssignmentRequest {
    pub fn new(priority: Priority, weight_kg: f64) -> Self {
        Self { priority, class: WeightClass::from_weight(weight_kg), weight_kg }
    }
}

// ── RiderPool ─────────────────────────────────────────────────────────────────

pub struct RiderPool {
    /// Number of riders.  Equals the length of every SoA `Vec`.
    pub count: usize,

    pub name:         Vec<String>,
    pub category:     Vec<RiderCategory>,
    pub current_load: Vec<f64>,
    pub max_load:     Vec<f64>,
    pub available:    Vec<bool>,
    /// Parcels handed to this rider over the whole run.
    pub assigned:     Vec<u32>,

    config: FleetConfig,
}

impl RiderPool {
    pub(crate) fn new(config: FleetConfig) -> Self {
        Self {
            count:        0,
            name:         Vec::new(),
            category:     Vec::new(),
            current_load: Vec::new(),
            max_load:     Vec::new(),
            available:    Vec::new(),
            assigned:     Vec::new(),
            config,
        }
    }

    pub(crate) fn push(&mut self, name: String, category: RiderCategory, max_load: f64) {
        self.name.push(name);
        self.category.push(category);
        self.current_load.push(0.0);
        self.max_load.push(max_load);
        self.available.push(true);
        self.assigned.push(0);
        self.count += 1;
    }

    /// The four-courier pool the network runs with by default.
    pub fn standard(config: FleetConfig) -> Self {
        let mut pool = Self::new(config);
        pool.push("Ali Khan".into(),      RiderCategory::Light,    50.0);
        pool.push("Bilal Ahmed".into(),   RiderCategory::Heavy,    200.0);
        pool.push("Usman Tariq".into(),   RiderCategory::Priority, 100.0);
        pool.push("Fahad Mustafa".into(), RiderCategory::General,  150.0);
        pool
    }

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn rider_ids(&self) -> impl Iterator<Item = RiderId> + '_ {
        (0..self.count).map(|i| RiderId(i as u8))
    }

    /// Heuristic score of `rider` for `req`, ignoring availability.
    pub fn score(&self, rider: RiderId, req: &AssignmentRequest) -> i64 {
        let i = rider.index();
        let category = self.category[i];
        let mut score = 0i64;
        if req.priority == Priority::Overnight && category == RiderCategory::Priority {
            score += 100;
        }
        let class_match = matches!(
            (req.class, category),
            (WeightClass::Heavy, RiderCategory::Heavy) | (WeightClass::Light, RiderCategory::Light)
        );
        if class_match {
            score += 80;
        }
        let used_pct = (self.current_load[i] * 100.0 / self.max_load[i]).floor() as i64;
        score + 100 - used_pct
    }

    /// Pick the best available rider and commit the parcel weight to it.
    ///
    /// Returns `None` without mutating anything when every rider is busy.
    pub fn assign(&mut self, req: &AssignmentRequest) -> Option<RiderId> {
        let mut best: Option<(RiderId, i64)> = None;
        for rider in self.rider_ids() {
            if !self.available[rider.index()] {
                continue;
            }
            let score = self.score(rider, req);
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((rider, score));
            }
        }
        let (rider, _) = best?;
        let i = rider.index();
        self.current_load[i] += req.weight_kg;
        self.assigned[i] += 1;
        if self.current_load[i] >= self.max_load[i] * self.config.busy_threshold {
            self.available[i] = false;
        }
        Some(rider)
    }

    /// Look a rider up by name or by assignment label.
    pub fn find(&self, name_or_label: &str) -> Option<RiderId> {
        let name = strip_category(name_or_label);
        self.name.iter().position(|n| n == name).map(|i| RiderId(i as u8))
    }

    /// Take `release_decrement` off the rider's load (floored at zero) and
    /// make it available again once below the availability threshold.
    ///
    /// Accepts either the bare name or the `"<name> (<Category>)"` label.
    pub fn release(&mut self, name_or_label: &str) -> FleetResult<RiderId> {
        let rider = self
            .find(name_or_label)
            .ok_or_else(|| FleetError::RiderNotFound(name_or_label.to_owned()))?;
        let i = rider.index();
        self.current_load[i] = (self.current_load[i] - self.config.release_decrement).max(0.0);
        if self.current_load[i] < self.max_load[i] * self.config.available_threshold {
            self.available[i] = true;
        }
        Ok(rider)
    }

    /// `"<name> (<Category>)"` for `rider`.
    pub fn label(&self, rider: RiderId) -> Option<String> {
        self.view(rider).map(|v| v.label())
    }

    pub fn view(&self, rider: RiderId) -> Option<RiderView> {
        let i = rider.index();
        if i >= self.count {
            return None;
        }
        Some(RiderView {
            id:           rider,
            name:         self.name[i].clone(),
            category:     self.category[i],
            current_load: self.current_load[i],
            max_load:     self.max_load[i],
            available:    self.available[i],
            assigned:     self.assigned[i],
        })
    }

    /// Snapshot of every rider in pool order.
    pub fn views(&self) -> Vec<RiderView> {
        self.rider_ids().filter_map(|r| self.view(r)).collect()
    }
}

fn strip_category(label: &str) -> &str {
    match label.find(" (") {
        Some(pos) => &label[..pos],
        None => label,
    }
}
