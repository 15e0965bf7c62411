//! Feminine reduction: maps feminine endings onto their masculine form
//! (`-ona` -> `-ão`, `-ora` -> `-or`, `-eira` -> `-eiro`, ...). Entered only by
//! words ending in `a`.

use crate::{Edge, Step, StepId};

pub(crate) fn step() -> Step {
    Step {
        id: StepId::Feminine,
        on_success: Edge::To(StepId::Augmentative),
        on_failure: Edge::To(StepId::Augmentative),
        entry_min_length: 3,
        required_endings: &["a"],
        rules: vec![
            suffix_rule!("ona", 3, "ão", except: [
                "abandona", "lona", "iona", "cortisona", "monótona", "maratona", "acetona", "detona", "carona",
            ]),
            suffix_rule!("ora", 3, "or"),
            suffix_rule!("na", 4, "no", except: [
                "carona", "abandona", "lona", "iona", "cortisona", "monótona", "maratona", "acetona", "detona",
                "guiana", "campana", "grana", "caravana", "banana", "paisana",
            ]),
            suffix_rule!("inha", 3, "inho", except: ["rainha", "linha", "minha"]),
            suffix_rule!("esa", 3, "ês", except: ["mesa", "obesa", "princesa", "turquesa", "ilesa", "pesa", "presa"]),
            suffix_rule!("osa", 3, "oso", except: ["mucosa", "prosa"]),
            suffix_rule!("íaca", 3, "íaco"),
            suffix_rule!("ica", 3, "ico", except: ["dica"]),
            suffix_rule!("ada", 2, "ado", except: ["pitada"]),
            suffix_rule!("ida", 3, "ido", except: ["vida"]),
            suffix_rule!("ída", 3, "ido", except: ["recaída", "saída", "dúvida"]),
            suffix_rule!("ima", 3, "imo", except: ["vítima"]),
            suffix_rule!("iva", 3, "ivo", except: ["saliva", "oliva"]),
            suffix_rule!("eira", 3, "eiro", except: [
                "beira", "cadeira", "frigideira", "bandeira", "feira", "capoeira", "barreira", "fronteira", "besteira",
                "poeira",
            ]),
            suffix_rule!("ã", 2, "ão", except: ["amanhã", "arapuã", "fã", "divã"]),
        ],
    }
}
