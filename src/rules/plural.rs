//! Plural reduction.
//!
//! Only words ending in `s` with at least three bytes enter this step. The
//! ordering matters: `-ns` and the nasal plurals must fire before the generic
//! `-s` rule, which carries the longest exception list in the table.

use crate::{Edge, Step, StepId};

pub(crate) fn step() -> Step {
    Step {
        id: StepId::Plural,
        on_success: Edge::To(StepId::Feminine),
        on_failure: Edge::To(StepId::Feminine),
        entry_min_length: 3,
        required_endings: &["s"],
        rules: vec![
            suffix_rule!("ns", 1, "m"),
            suffix_rule!("ões", 3, "ão"),
            suffix_rule!("ães", 1, "ão", except: ["mãe"]),
            suffix_rule!("ais", 1, "al", except: ["cais", "mais"]),
            suffix_rule!("éis", 2, "el"),
            suffix_rule!("eis", 2, "el"),
            suffix_rule!("óis", 2, "ol"),
            suffix_rule!("is", 2, "il", except: [
                "lápis", "cais", "mais", "crúcis", "biquínis", "pois", "depois", "dois", "leis",
            ]),
            suffix_rule!("les", 3, "l"),
            suffix_rule!("res", 3, "r"),
            suffix_rule!("s", 2, "", except: [
                "aliás", "pires", "lápis", "cais", "mais", "mas", "menos", "férias", "fezes", "pêsames", "crúcis",
                "gás", "atrás", "moisés", "através", "convés", "ês", "país", "após", "ambas", "ambos", "messias",
            ]),
        ],
    }
}
