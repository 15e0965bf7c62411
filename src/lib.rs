//! RSLP-style suffix stripping for Portuguese.
//!
//! A word is pushed through a fixed graph of steps (plural, feminine,
//! augmentative, adverb, noun, verb, vowel). Each step holds an ordered list of
//! suffix rules; the first rule that applies rewrites the word and the step's
//! success edge is followed, otherwise the failure edge. The result can
//! optionally be stripped of diacritics.
//!
//! ```
//! assert_eq!(rslp::stem("cantariam"), "cant");
//! assert_eq!(rslp::stem_sentence("Que você faça o bem"), "que voc fac o bem");
//! ```

#[macro_use]
mod macros;
mod api;
mod engine;
mod rules;

use std::fmt;

pub use api::{
    Options, PortugueseStemmer, StemDetails, Stemmer, StepTrace, apply_step, stem, stem_sentence, stem_sentence_with,
    stem_verbose_with, stem_with,
};
pub use engine::StepSet;

// --- Internal types ---------------------------------------------------------

/// Identifier of a step in the stemming graph, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StepId {
    Plural,
    Feminine,
    Augmentative,
    Adverb,
    Noun,
    Verb,
    Vowel,
}

impl StepId {
    /// Number of steps in the graph.
    pub const COUNT: usize = 7;

    /// All steps, indexed by [`StepId::index`].
    pub const ALL: [StepId; StepId::COUNT] = [
        StepId::Plural,
        StepId::Feminine,
        StepId::Augmentative,
        StepId::Adverb,
        StepId::Noun,
        StepId::Verb,
        StepId::Vowel,
    ];

    /// Position of this step in the graph's step table.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            StepId::Plural => "Plural",
            StepId::Feminine => "Feminine",
            StepId::Augmentative => "Augmentative",
            StepId::Adverb => "Adverb",
            StepId::Noun => "Noun",
            StepId::Verb => "Verb",
            StepId::Vowel => "Vowel",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outgoing edge of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Edge {
    To(StepId),
    Terminal,
}

/// A single suffix rewrite: `(suffix, minimum length, replacement, exceptions)`.
///
/// The rule applies when the word ends with `suffix`, is at least
/// `min_stem_length + suffix.len()` bytes long and is not one of
/// `exceptions` (whole-word match).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SuffixRule {
    pub suffix: &'static str,
    pub min_stem_length: usize,
    pub replacement: &'static str,
    pub exceptions: &'static [&'static str],
}

/// A named stage of the graph: an entry gate, an ordered rule list and two
/// outgoing edges.
#[derive(Debug, Clone)]
pub(crate) struct Step {
    pub id: StepId,
    /// Followed when one of `rules` rewrote the word.
    pub on_success: Edge,
    /// Followed when the gate rejected the word or no rule applied.
    pub on_failure: Edge,
    /// Minimum word length (bytes) to enter the step; 0 disables the check.
    pub entry_min_length: usize,
    /// The word must end with one of these to enter; empty means no gate.
    pub required_endings: &'static [&'static str],
    pub rules: Vec<SuffixRule>,
}
