//! Traversal traces and timings.
//!
//! Plain stemming only needs the final word. Verbose runs additionally record
//! one `Visit` per step and the time spent in each phase; collecting visits
//! allocates, so `StepGraph::traverse` only does it when asked.

use crate::StepId;
use std::time::Duration;

bitflags::bitflags! {
    /// Set of steps, one bit per [`StepId`].
    ///
    /// Used to report which steps rewrote the word during a traversal.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StepSet: u8 {
        const PLURAL       = 1 << 0;
        const FEMININE     = 1 << 1;
        const AUGMENTATIVE = 1 << 2;
        const ADVERB       = 1 << 3;
        const NOUN         = 1 << 4;
        const VERB         = 1 << 5;
        const VOWEL        = 1 << 6;
    }
}

impl From<StepId> for StepSet {
    fn from(id: StepId) -> Self {
        StepSet::from_bits_retain(1 << id.index())
    }
}

impl StepSet {
    /// Steps in this set, in traversal order.
    pub fn steps(self) -> impl Iterator<Item = StepId> {
        StepId::ALL.into_iter().filter(move |id| self.contains(StepSet::from(*id)))
    }
}

/// One visited step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub step: StepId,
    pub input: String,
    pub output: String,
    /// Suffix of the rule that fired, `None` when the step failed.
    pub rule: Option<&'static str>,
}

/// Outcome of walking the step graph.
#[derive(Debug, Clone)]
pub struct Traversal {
    /// Word after the last visited step.
    pub word: String,
    /// Steps whose rules rewrote the word.
    pub applied: StepSet,
    /// Visited steps in order; empty unless tracing was requested.
    pub visits: Vec<Visit>,
}

/// Timings for a single verbose stem.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunMetrics {
    pub total: Duration,
    pub traversal: Duration,
    pub normalize: Duration,
}
