//! Verb suffix reduction: regular conjugations of `-ar`, `-er` and `-ir` verbs,
//! longest inflections first.

use crate::{Edge, Step, StepId};

pub(crate) fn step() -> Step {
    Step {
        id: StepId::Verb,
        on_success: Edge::Terminal,
        on_failure: Edge::To(StepId::Vowel),
        entry_min_length: 0,
        required_endings: &[],
        rules: vec![
            suffix_rule!("aríamo", 2, ""),
            suffix_rule!("ássemo", 2, ""),
            suffix_rule!("eríamo", 2, ""),
            suffix_rule!("êssemo", 2, ""),
            suffix_rule!("iríamo", 3, ""),
            suffix_rule!("íssemo", 3, ""),
            suffix_rule!("áramo", 2, ""),
            suffix_rule!("árei", 2, ""),
            suffix_rule!("aremo", 2, ""),
            suffix_rule!("ariam", 2, ""),
            suffix_rule!("aríei", 2, ""),
            suffix_rule!("ássei", 2, ""),
            suffix_rule!("assem", 2, ""),
            suffix_rule!("ávamo", 2, ""),
            suffix_rule!("êramo", 3, ""),
            suffix_rule!("eremo", 3, ""),
            suffix_rule!("eriam", 3, ""),
            suffix_rule!("eríei", 3, ""),
            suffix_rule!("êssei", 3, ""),
            suffix_rule!("essem", 3, ""),
            suffix_rule!("íramo", 3, ""),
            suffix_rule!("iremo", 3, ""),
            suffix_rule!("iriam", 3, ""),
            suffix_rule!("iríei", 3, ""),
            suffix_rule!("íssei", 3, ""),
            suffix_rule!("issem", 3, ""),
            suffix_rule!("ando", 2, ""),
            suffix_rule!("endo", 3, ""),
            suffix_rule!("indo", 3, ""),
            suffix_rule!("ondo", 3, ""),
            suffix_rule!("aram", 2, ""),
            suffix_rule!("arão", 2, ""),
            suffix_rule!("arde", 2, ""),
            suffix_rule!("arei", 2, ""),
            suffix_rule!("arem", 2, ""),
            suffix_rule!("aria", 2, ""),
            suffix_rule!("armo", 2, ""),
            suffix_rule!("asse", 2, ""),
            suffix_rule!("aste", 2, ""),
            suffix_rule!("avam", 2, "", except: ["agravam"]),
            suffix_rule!("ávei", 2, ""),
            suffix_rule!("eram", 3, ""),
            suffix_rule!("erão", 3, ""),
            suffix_rule!("erde", 3, ""),
            suffix_rule!("erei", 3, ""),
            suffix_rule!("êrei", 3, ""),
            suffix_rule!("erem", 3, ""),
            suffix_rule!("eria", 3, ""),
            suffix_rule!("ermo", 3, ""),
            suffix_rule!("esse", 3, ""),
            suffix_rule!("este", 3, "", except: ["faroeste", "agreste"]),
            suffix_rule!("íamo", 3, ""),
            suffix_rule!("iram", 3, ""),
            suffix_rule!("íram", 3, ""),
            suffix_rule!("irão", 2, ""),
            suffix_rule!("irde", 2, ""),
            suffix_rule!("irei", 3, "", except: ["admirei"]),
            suffix_rule!("irem", 3, "", except: ["adquirem"]),
            suffix_rule!("iria", 3, ""),
            suffix_rule!("irmo", 3, ""),
            suffix_rule!("isse", 3, ""),
            suffix_rule!("iste", 4, ""),
            suffix_rule!("iava", 4, "", except: ["ampliava"]),
            suffix_rule!("amo", 2, ""),
            suffix_rule!("iona", 3, ""),
            suffix_rule!("ara", 2, "", except: ["arara", "prepara"]),
            suffix_rule!("ará", 2, "", except: ["alvará"]),
            suffix_rule!("are", 2, "", except: ["prepare"]),
            suffix_rule!("ava", 2, "", except: ["agrava"]),
            suffix_rule!("emo", 2, ""),
            suffix_rule!("era", 3, "", except: ["acelera", "espera"]),
            suffix_rule!("erá", 3, ""),
            suffix_rule!("ere", 3, "", except: ["espere"]),
            suffix_rule!("iam", 3, "", except: ["enfiam", "ampliam", "elogiam", "ensaiam"]),
            suffix_rule!("íei", 3, ""),
            suffix_rule!("imo", 3, "", except: ["reprimo", "intimo", "íntimo", "nimo", "queimo", "ximo"]),
            suffix_rule!("ira", 3, "", except: ["fronteira", "sátira"]),
            suffix_rule!("ído", 3, ""),
            suffix_rule!("irá", 3, ""),
            suffix_rule!("tizar", 4, "", except: ["alfabetizar"]),
            suffix_rule!("izar", 5, "", except: ["organizar"]),
            suffix_rule!("itar", 5, "", except: ["acreditar", "explicitar", "estreitar"]),
            suffix_rule!("ire", 3, "", except: ["adquire"]),
            suffix_rule!("omo", 3, ""),
            suffix_rule!("ai", 2, ""),
            suffix_rule!("am", 2, ""),
            suffix_rule!("ear", 4, "", except: ["alardear", "nuclear"]),
            suffix_rule!("ar", 2, "", except: ["azar", "bazaar", "patamar"]),
            suffix_rule!("uei", 3, ""),
            suffix_rule!("uía", 5, "u"),
            suffix_rule!("ei", 3, ""),
            suffix_rule!("guem", 3, "g"),
            suffix_rule!("em", 2, "", except: ["alem", "virgem"]),
            suffix_rule!("er", 2, "", except: ["éter", "pier"]),
            suffix_rule!("eu", 3, "", except: ["chapeu"]),
            suffix_rule!("ia", 3, "", except: [
                "estória", "fatia", "acia", "praia", "elogia", "mania", "lábia", "aprecia", "polícia", "arredia",
                "cheia", "ásia",
            ]),
            suffix_rule!("ir", 3, "", except: ["freir"]),
            suffix_rule!("iu", 3, ""),
            suffix_rule!("eou", 5, ""),
            suffix_rule!("ou", 3, ""),
            suffix_rule!("i", 3, ""),
        ],
    }
}
