//! Vowel removal. Last resort for words that matched neither noun nor verb
//! suffixes.

use crate::{Edge, Step, StepId};

pub(crate) fn step() -> Step {
    Step {
        id: StepId::Vowel,
        on_success: Edge::Terminal,
        on_failure: Edge::Terminal,
        entry_min_length: 0,
        required_endings: &[],
        rules: vec![
            suffix_rule!("bil", 2, "vel"),
            suffix_rule!("gue", 2, "g", except: ["gangue", "jegue"]),
            suffix_rule!("á", 3, ""),
            suffix_rule!("ê", 3, "", except: ["bebê"]),
            suffix_rule!("a", 3, "", except: ["ásia"]),
            suffix_rule!("e", 3, ""),
            suffix_rule!("o", 3, "", except: ["ão"]),
        ],
    }
}
