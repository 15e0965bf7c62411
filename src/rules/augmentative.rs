//! Augmentative and diminutive reduction (`-íssimo`, `-inho`, `-zão`, ...).

use crate::{Edge, Step, StepId};

pub(crate) fn step() -> Step {
    Step {
        id: StepId::Augmentative,
        on_success: Edge::To(StepId::Adverb),
        on_failure: Edge::To(StepId::Adverb),
        entry_min_length: 0,
        required_endings: &[],
        rules: vec![
            suffix_rule!("díssimo", 5, ""),
            suffix_rule!("abilíssimo", 5, ""),
            suffix_rule!("íssimo", 3, ""),
            suffix_rule!("ésimo", 3, ""),
            suffix_rule!("érrimo", 4, ""),
            suffix_rule!("zinho", 2, ""),
            suffix_rule!("quinho", 4, "c"),
            suffix_rule!("uinho", 4, ""),
            suffix_rule!("adinho", 3, ""),
            suffix_rule!("inho", 3, "", except: ["caminho", "cominho"]),
            suffix_rule!("alhão", 4, ""),
            suffix_rule!("uça", 4, ""),
            suffix_rule!("aço", 4, "", except: ["antebraço"]),
            suffix_rule!("aça", 4, ""),
            suffix_rule!("adão", 4, ""),
            suffix_rule!("idão", 4, ""),
            suffix_rule!("ázio", 3, "", except: ["topázio"]),
            suffix_rule!("arraz", 4, ""),
            suffix_rule!("zarrão", 3, ""),
            suffix_rule!("arrão", 4, ""),
            suffix_rule!("arra", 3, ""),
            suffix_rule!("zão", 2, "", except: ["coalizão"]),
            suffix_rule!("ão", 3, "", except: [
                "camarão", "chimarrão", "canção", "coração", "embrião", "grotão", "glutão", "ficção", "fogão",
                "feição", "furacão", "gamão", "lampião", "leão", "macacão", "nação", "órfão", "orgão", "patrão",
                "portão", "quinhão", "rincão", "tração", "falcão", "espião", "mamão", "folião", "cordão", "aptidão",
                "campeão", "colchão", "limão", "leilão", "melão", "barão", "milhão", "bilhão", "fusão", "cristão",
                "ilusão", "capitão", "estação", "senão",
            ]),
        ],
    }
}
