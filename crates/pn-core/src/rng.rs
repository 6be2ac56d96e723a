//! Injectable randomness for disruption, signal-loss and delivery outcomes.
//!
//! Every random branch in the simulator goes through [`DecisionSource`]
//! rather than a global RNG, so tests can script exact outcomes and a
//! production run stays reproducible from a single seed.
//!
//! [`SimRng`] is the seeded default.  It wraps a `SmallRng`, which is fast
//! and deterministic for a given seed but not cryptographically secure.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ── DecisionSource ───────────────────────────────────────────────────────────

/// Source of every random decision the simulator makes.
///
/// Implementations must be deterministic for a given construction so that
/// runs can be replayed.
pub trait DecisionSource {
    /// `true` with probability `p` (clamped to `[0, 1]`).
    fn chance(&mut self, p: f64) -> bool;

    /// Uniform index in `0..len`.  Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;

    /// Uniform integer in `lo..=hi`.
    fn between(&mut self, lo: u64, hi: u64) -> u64;
}

impl<D: DecisionSource + ?Sized> DecisionSource for &mut D {
    #[inline]
    fn chance(&mut self, p: f64) -> bool {
        (**self).chance(p)
    }

    #[inline]
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }

    #[inline]
    fn between(&mut self, lo: u64, hi: u64) -> u64 {
        (**self).between(lo, hi)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG.  Single-threaded use only.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl DecisionSource for SimRng {
    #[inline]
    fn chance(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    #[inline]
    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len.max(1))
    }

    #[inline]
    fn between(&mut self, lo: u64, hi: u64) -> u64 {
        if hi <= lo {
            return lo;
        }
        self.0.gen_range(lo..=hi)
    }
}
