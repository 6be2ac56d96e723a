//! `DispatchQueue` — pending parcels ordered by priority score.
//!
//! A `BinaryHeap` keyed on `(score, Reverse(sequence))`: the highest score
//! pops first and equal scores pop in insertion order.  Re-queuing a parcel
//! (after a failed rider assignment) gives it a fresh sequence number, so it
//! goes behind parcels of the same score that were already waiting.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use pn_core::ParcelKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    score: u32,
    seq:   Reverse<u64>,
    key:   ParcelKey,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.score, self.seq).cmp(&(other.score, other.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Max-priority queue of parcels awaiting dispatch.
#[derive(Debug, Default)]
pub struct DispatchQueue {
    heap:     BinaryHeap<Entry>,
    next_seq: u64,
}

impl DispatchQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `key` with its priority score.  O(log n).
    pub fn push(&mut self, key: ParcelKey, score: u32) {
        let seq = Reverse(self.next_seq);
        self.next_seq += 1;
        self.heap.push(Entry { score, seq, key });
    }

    /// Remove and return the highest-scoring parcel.  O(log n).
    pub fn pop(&mut self) -> Option<ParcelKey> {
        self.heap.pop().map(|e| e.key)
    }

    /// The parcel `pop` would return, with its score.
    pub fn peek(&self) -> Option<(ParcelKey, u32)> {
        self.heap.peek().map(|e| (e.key, e.score))
    }

    /// Score of the parcel `pop` would return.
    pub fn peek_score(&self) -> Option<u32> {
        self.heap.peek().map(|e| e.score)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Queued keys in pop order, without draining.
    pub fn pending(&self) -> Vec<ParcelKey> {
        let mut entries: Vec<Entry> = self.heap.iter().copied().collect();
        entries.sort_unstable_by(|a, b| b.cmp(a));
        entries.into_iter().map(|e| e.key).collect()
    }
}
