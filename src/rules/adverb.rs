//! Adverb reduction. A single rule: `-mente`.

use crate::{Edge, Step, StepId};

pub(crate) fn step() -> Step {
    Step {
        id: StepId::Adverb,
        on_success: Edge::To(StepId::Noun),
        on_failure: Edge::To(StepId::Noun),
        entry_min_length: 0,
        required_endings: &[],
        rules: vec![
            suffix_rule!("mente", 4, "", except: ["experimente"]),
        ],
    }
}
