//! RSLP step tables.
//!
//! Each submodule declares one step: its entry gate, its two edges and its
//! ordered suffix rules. The data is a hand-curated linguistic resource; rule
//! order, minimum lengths, replacements and exception lists all change output
//! for real words and must not be reordered or deduplicated.
//!
//! Routing, in traversal order:
//!
//! ```text
//! Plural       -> Feminine      (either outcome)
//! Feminine     -> Augmentative  (either outcome)
//! Augmentative -> Adverb        (either outcome)
//! Adverb       -> Noun          (either outcome)
//! Noun         -> end on rewrite, Verb otherwise
//! Verb         -> end on rewrite, Vowel otherwise
//! Vowel        -> end
//! ```
//!
//! These edges do not follow the step diagram of the published RSLP paper
//! everywhere (Noun, Verb and Adverb routing differ); they are kept as is.

#[path = "rules/adverb.rs"]
mod adverb;
#[path = "rules/augmentative.rs"]
mod augmentative;
#[path = "rules/feminine.rs"]
mod feminine;
#[path = "rules/noun.rs"]
mod noun;
#[path = "rules/plural.rs"]
mod plural;
#[path = "rules/verb.rs"]
mod verb;
#[path = "rules/vowel.rs"]
mod vowel;


use crate::Step;

/// All steps of the Portuguese stemmer.
pub(crate) fn get() -> Vec<Step> {
    vec![
        plural::step(),
        feminine::step(),
        augmentative::step(),
        adverb::step(),
        noun::step(),
        verb::step(),
        vowel::step(),
    ]
}
