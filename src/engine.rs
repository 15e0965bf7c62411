//! Stemming engine.
//!
//! The engine is split into small submodules under `src/engine/`, wired the
//! same way a parse run is: static tables are compiled once, then every word
//! walks them.
//!
//! ```text
//! rules::get()  ──  StepGraph::new                 (graph.rs)
//!                        │   fixed table indexed by StepId
//!                        v
//! word ── trim + lowercase ── len <= 3 ? ──yes──> word
//!                        │ no
//!                        v
//!               StepGraph::traverse                (graph.rs)
//!                 Step::admits   (entry gate)      (step.rs)
//!                 Step::apply    (first rule wins) (step.rs)
//!                 follow success / failure edge
//!                        │
//!                        v
//!               strip_diacritics (optional)        (normalize.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `step.rs`: `SuffixRule::apply` (suffix match, length check, exceptions)
//!   and `Step::apply` (entry gate + ordered rule scan).
//! - `graph.rs`: `StepGraph`, the immutable step table, and traversal.
//! - `normalize.rs`: NFD, drop combining marks, NFC.
//! - `metrics.rs`: per-step traces and timings for verbose runs.
//!
//! ## Debugging
//!
//! Set `RSLP_DEBUG_STEPS=1` to print every visited step and the normalizer
//! output to stderr.

#[path = "engine/graph.rs"]
mod graph;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/normalize.rs"]
mod normalize;
#[path = "engine/step.rs"]
mod step;

pub use graph::StepGraph;
pub use metrics::{RunMetrics, StepSet, Visit};
pub use normalize::strip_diacritics;

pub(crate) fn debug_enabled() -> bool {
    std::env::var_os("RSLP_DEBUG_STEPS").is_some()
}
