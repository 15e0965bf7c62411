//! The step graph and its traversal.
//!
//! `StepGraph` owns one `Step` per `StepId`, stored at `StepId::index`, so a
//! hop is an array index instead of a name lookup. The graph is built once and
//! never mutated; it is shared by reference between all callers.
//!
//! ## Invariants
//!
//! - `steps[i].id.index() == i` for every step.
//! - Following edges from `StepId::Plural` always reaches `Edge::Terminal`;
//!   the table is acyclic.

use super::metrics::{StepSet, Traversal, Visit};
use crate::{Edge, Step, StepId};

/// Immutable table of stemming steps.
#[derive(Debug)]
pub struct StepGraph {
    steps: Vec<Step>,
}

impl StepGraph {
    /// Every traversal starts here.
    pub const ENTRY: StepId = StepId::Plural;

    /// Build the graph from one step per `StepId`, in any order.
    pub fn new(mut steps: Vec<Step>) -> Self {
        steps.sort_by_key(|step| step.id);
        debug_assert!(
            steps.len() == StepId::COUNT && steps.iter().enumerate().all(|(idx, step)| step.id.index() == idx),
            "step graph needs exactly one step per StepId"
        );
        StepGraph { steps }
    }

    pub fn step(&self, id: StepId) -> &Step {
        &self.steps[id.index()]
    }

    /// Walk the graph from [`StepGraph::ENTRY`] until a terminal edge.
    ///
    /// `word` is expected to be trimmed and lowercased already. When `trace`
    /// is false no per-step record is kept.
    pub fn traverse(&self, word: String, trace: bool) -> Traversal {
        let debug = super::debug_enabled();
        let mut word = word;
        let mut applied = StepSet::empty();
        let mut visits = Vec::new();
        let mut next = Edge::To(Self::ENTRY);

        while let Edge::To(id) = next {
            let step = self.step(id);
            let outcome = step.apply(&word);
            let rule = outcome.as_ref().map(|rewrite| rewrite.rule.suffix);

            if debug {
                let output = outcome.as_ref().map_or(word.as_str(), |rewrite| rewrite.word.as_str());
                eprintln!("[step] name={} input=\"{}\" output=\"{}\" rule={:?}", id, word, output, rule);
            }

            next = match outcome {
                Some(rewrite) => {
                    applied |= StepSet::from(id);
                    let previous = std::mem::replace(&mut word, rewrite.word);
                    if trace {
                        visits.push(Visit { step: id, input: previous, output: word.clone(), rule });
                    }
                    step.on_success
                }
                None => {
                    if trace {
                        visits.push(Visit { step: id, input: word.clone(), output: word.clone(), rule: None });
                    }
                    step.on_failure
                }
            };
        }

        Traversal { word, applied, visits }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> StepGraph {
        StepGraph::new(crate::rules::get())
    }

    #[test]
    fn steps_are_indexed_by_id() {
        let graph = graph();
        for id in StepId::ALL {
            assert_eq!(graph.step(id).id, id);
        }
    }

    #[test]
    fn edges_only_point_forward() {
        // Forward-only edges make every walk reach a terminal edge.
        let graph = graph();
        for step in StepId::ALL.map(|id| graph.step(id)) {
            for edge in [step.on_success, step.on_failure] {
                if let Edge::To(next) = edge {
                    assert!(next > step.id, "{} -> {} points backwards", step.id, next);
                }
            }
        }
    }

    #[test]
    fn traversal_records_visits_when_tracing() {
        let graph = graph();
        let run = graph.traverse("cantando".to_string(), true);

        assert_eq!(run.word, "cant");
        let visited: Vec<StepId> = run.visits.iter().map(|v| v.step).collect();
        assert_eq!(
            visited,
            vec![
                StepId::Plural,
                StepId::Feminine,
                StepId::Augmentative,
                StepId::Adverb,
                StepId::Noun,
                StepId::Verb
            ]
        );
        assert_eq!(run.applied, StepSet::VERB);

        let verb = run.visits.last().unwrap();
        assert_eq!(verb.input, "cantando");
        assert_eq!(verb.output, "cant");
        assert_eq!(verb.rule, Some("ando"));
    }

    #[test]
    fn traversal_without_trace_keeps_no_visits() {
        let run = graph().traverse("cantando".to_string(), false);
        assert_eq!(run.word, "cant");
        assert!(run.visits.is_empty());
    }

    #[test]
    fn noun_rewrite_ends_the_walk() {
        let run = graph().traverse("funcionamento".to_string(), true);
        assert_eq!(run.word, "funcion");
        assert_eq!(run.visits.last().map(|v| v.step), Some(StepId::Noun));
        assert!(run.applied.contains(StepSet::NOUN));
        assert!(!run.applied.contains(StepSet::VERB));
    }

    #[test]
    fn unmatched_word_falls_through_to_vowel() {
        let run = graph().traverse("grande".to_string(), true);
        assert_eq!(run.word, "grand");
        assert_eq!(run.visits.len(), StepId::COUNT);
        assert_eq!(run.applied, StepSet::VOWEL);
    }

    #[test]
    fn pass_through_steps_continue_after_a_rewrite() {
        let run = graph().traverse("menina".to_string(), true);
        assert_eq!(run.word, "menin");
        assert_eq!(run.applied, StepSet::FEMININE | StepSet::VOWEL);
        assert_eq!(run.applied.steps().collect::<Vec<_>>(), vec![StepId::Feminine, StepId::Vowel]);
        assert_eq!(run.visits[1].output, "menino");
    }

    #[test]
    fn replacement_can_lengthen_the_word() {
        let run = graph().traverse("amabilíssimo".to_string(), true);
        assert_eq!(run.word, "amavel");
        assert_eq!(run.applied, StepSet::AUGMENTATIVE | StepSet::NOUN);
    }
}
