//! Noun and adjective suffix reduction.
//!
//! This is the largest table. Several suffixes appear more than once with
//! different minimums (`ário` is listed at 3 and again at 5); both entries are
//! kept in their authored order since first match wins.

use crate::{Edge, Step, StepId};

pub(crate) fn step() -> Step {
    Step {
        id: StepId::Noun,
        on_success: Edge::Terminal,
        on_failure: Edge::To(StepId::Verb),
        entry_min_length: 0,
        required_endings: &[],
        rules: vec![
            suffix_rule!("encialista", 4, ""),
            suffix_rule!("alista", 5, ""),
            suffix_rule!("agem", 3, "", except: ["coragem", "chantagem", "vantagem", "carruagem"]),
            suffix_rule!("ático", 3, ""),
            suffix_rule!("iamento", 4, ""),
            suffix_rule!("amento", 3, "", except: ["firmamento", "fundamento", "departamento"]),
            suffix_rule!("imento", 3, ""),
            suffix_rule!("mento", 6, "", except: [
                "firmamento", "elemento", "complemento", "instrumento", "departamento",
            ]),
            suffix_rule!("alizado", 4, ""),
            suffix_rule!("atizado", 4, ""),
            suffix_rule!("tizado", 4, "", except: ["alfabetizado"]),
            suffix_rule!("izado", 5, "", except: ["organizado", "pulverizado"]),
            suffix_rule!("ativo", 4, "", except: ["pejorativo", "relativo"]),
            suffix_rule!("tivo", 4, "", except: ["relativo"]),
            suffix_rule!("ivo", 4, "", except: ["passivo", "possessivo", "pejorativo", "positivo"]),
            suffix_rule!("ado", 2, "", except: ["grado"]),
            suffix_rule!("ido", 3, "", except: [
                "cândido", "consolido", "rápido", "decido", "tímido", "duvido", "marido",
            ]),
            suffix_rule!("ador", 3, ""),
            suffix_rule!("edor", 3, ""),
            suffix_rule!("idor", 4, "", except: ["ouvidor"]),
            suffix_rule!("dor", 4, "", except: ["ouvidor"]),
            suffix_rule!("sor", 4, "", except: ["assessor"]),
            suffix_rule!("atória", 5, ""),
            suffix_rule!("tor", 3, "", except: [
                "benfeitor", "leitor", "editor", "pastor", "produtor", "promotor", "consultor",
            ]),
            suffix_rule!("or", 2, "", except: [
                "motor", "melhor", "redor", "rigor", "sensor", "tambor", "tumor", "assessor", "benfeitor", "pastor",
                "terior", "favor", "autor",
            ]),
            suffix_rule!("abilidade", 5, ""),
            suffix_rule!("icionista", 4, ""),
            suffix_rule!("cionista", 5, ""),
            suffix_rule!("ionista", 5, ""),
            suffix_rule!("ionar", 5, ""),
            suffix_rule!("ional", 4, ""),
            suffix_rule!("ência", 3, ""),
            suffix_rule!("ância", 4, "", except: ["ambulância"]),
            suffix_rule!("edouro", 3, ""),
            suffix_rule!("queiro", 3, "c"),
            suffix_rule!("adeiro", 4, "", except: ["desfiladeiro"]),
            suffix_rule!("eiro", 3, "", except: ["desfiladeiro", "pioneiro", "mosteiro"]),
            suffix_rule!("uoso", 3, ""),
            suffix_rule!("oso", 3, "", except: ["precioso"]),
            suffix_rule!("alizaç", 5, ""),
            suffix_rule!("atizaç", 5, ""),
            suffix_rule!("tizaç", 5, ""),
            suffix_rule!("izaç", 5, "", except: ["organizaç"]),
            suffix_rule!("aç", 3, "", except: ["equaç", "relaç"]),
            suffix_rule!("iç", 3, "", except: ["eleição"]),
            suffix_rule!("ário", 3, "", except: [
                "voluntário", "salário", "aniversário", "diário", "lionário", "armário",
            ]),
            suffix_rule!("atório", 3, ""),
            suffix_rule!("ário", 5, "", except: [
                "voluntário", "salário", "aniversário", "diário", "compulsório", "lionário", "próprio", "stério",
                "armário",
            ]),
            suffix_rule!("ério", 6, ""),
            suffix_rule!("ês", 4, ""),
            suffix_rule!("eza", 3, ""),
            suffix_rule!("ez", 4, ""),
            suffix_rule!("esco", 4, ""),
            suffix_rule!("ante", 2, "", except: [
                "gigante", "elefante", "adiante", "possante", "instante", "restaurante",
            ]),
            suffix_rule!("ástico", 4, "", except: ["eclesiástico"]),
            suffix_rule!("alístico", 3, ""),
            suffix_rule!("áutico", 4, ""),
            suffix_rule!("êutico", 4, ""),
            suffix_rule!("tico", 3, "", except: [
                "político", "eclesiástico", "diagnostico", "prático", "doméstico", "diagnóstico", "idêntico",
                "alopático", "artístico", "autêntico", "eclético", "crítico", "critico",
            ]),
            suffix_rule!("ico", 4, "", except: ["tico", "público", "explico"]),
            suffix_rule!("ividade", 5, ""),
            suffix_rule!("idade", 4, "", except: ["autoridade", "comunidade"]),
            suffix_rule!("oria", 4, "", except: ["categoria"]),
            suffix_rule!("encial", 5, ""),
            suffix_rule!("ista", 4, ""),
            suffix_rule!("auta", 5, ""),
            suffix_rule!("quice", 4, "c"),
            suffix_rule!("ice", 4, "", except: ["cúmplice"]),
            suffix_rule!("íaco", 3, ""),
            suffix_rule!("ente", 4, "", except: [
                "freqüente", "alimente", "acrescente", "permanente", "oriente", "aparente",
            ]),
            suffix_rule!("ense", 5, ""),
            suffix_rule!("inal", 3, ""),
            suffix_rule!("ano", 4, ""),
            suffix_rule!("ável", 2, "", except: ["afável", "razoável", "potável", "vulnerável"]),
            suffix_rule!("ível", 3, "", except: ["possível"]),
            suffix_rule!("vel", 5, "", except: ["possível", "vulnerável", "solúvel"]),
            suffix_rule!("bil", 3, "vel"),
            suffix_rule!("ura", 4, "", except: ["imatura", "acupuntura", "costura"]),
            suffix_rule!("ural", 4, ""),
            suffix_rule!("ual", 3, "", except: ["bissexual", "virtual", "visual", "pontual"]),
            suffix_rule!("ial", 3, ""),
            suffix_rule!("al", 4, "", except: [
                "afinal", "animal", "estatal", "bissexual", "desleal", "fiscal", "formal", "pessoal", "liberal",
                "postal", "virtual", "visual", "pontual", "sideral", "sucursal",
            ]),
            suffix_rule!("alismo", 4, ""),
            suffix_rule!("ivismo", 4, ""),
            suffix_rule!("ismo", 3, "", except: ["cinismo"]),
        ],
    }
}
