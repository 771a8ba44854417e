// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search statistics.
//!
//! Counters incremented by the solver as it works; how much restarting and
//! undoing a given mesh forced is the main observable of the search besides
//! its result.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// The events the solver counts.
#[derive(Debug, EnumCountMacro, Copy, Clone)]
#[repr(u8)]
pub enum Counters {
    /// Top-level restart points tried.
    Restarts,
    /// Tentative label assignments (each may set both sides of an edge).
    LabelsTried,
    /// Assignments undone after the recursion below them failed.
    LabelsUndone,
    /// Successful verification passes over fully marked triangles.
    TrianglesConfirmed,
}

/// Counter table indexed by [`Counters`].
#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}
