//! Rule application and step gating.
//!
//! A rule is tried against the word as it stands when the rule is reached,
//! so exceptions are compared with the current value, not the original input.
//! Lengths are UTF-8 byte lengths.

use crate::{Step, SuffixRule};

impl SuffixRule {
    /// Rewrite `word` if this rule applies: strip `suffix`, append `replacement`.
    ///
    /// Both the length check (`word.len() >= min_stem_length + suffix.len()`)
    /// and the exception list are checked before the suffix itself.
    pub fn apply(&self, word: &str) -> Option<String> {
        if word.len() < self.min_stem_length + self.suffix.len() {
            return None;
        }
        if self.exceptions.iter().any(|exception| *exception == word) {
            return None;
        }

        // The match is anchored at the end, so the cut lands on a char boundary.
        let stem = word.strip_suffix(self.suffix)?;
        let mut rewritten = String::with_capacity(stem.len() + self.replacement.len());
        rewritten.push_str(stem);
        rewritten.push_str(self.replacement);
        Some(rewritten)
    }
}

/// A successful step: the rewritten word and the rule that produced it.
#[derive(Debug, Clone)]
pub struct Rewrite<'a> {
    pub word: String,
    pub rule: &'a SuffixRule,
}

impl Step {
    /// Entry gate: minimum length, then required endings.
    pub fn admits(&self, word: &str) -> bool {
        if self.entry_min_length > 0 && word.len() < self.entry_min_length {
            return false;
        }
        self.required_endings.is_empty() || self.required_endings.iter().any(|ending| word.ends_with(ending))
    }

    /// Run the gate, then the rules in order. First applicable rule wins.
    pub fn apply(&self, word: &str) -> Option<Rewrite<'_>> {
        if !self.admits(word) {
            return None;
        }
        self.rules.iter().find_map(|rule| rule.apply(word).map(|word| Rewrite { word, rule }))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Edge, Step, StepId, SuffixRule};

    fn gated_step(entry_min_length: usize, required_endings: &'static [&'static str]) -> Step {
        Step {
            id: StepId::Plural,
            on_success: Edge::Terminal,
            on_failure: Edge::Terminal,
            entry_min_length,
            required_endings,
            rules: vec![suffix_rule!("es", 1, ""), suffix_rule!("s", 1, "")],
        }
    }

    #[test]
    fn rule_requires_minimum_length_including_suffix() {
        let rule = suffix_rule!("ns", 1, "m");
        assert_eq!(rule.apply("bons").as_deref(), Some("bom"));
        // "ns" alone: 2 < 1 + 2
        assert_eq!(rule.apply("ns"), None);
        assert_eq!(rule.apply("ans").as_deref(), Some("am"));
    }

    #[test]
    fn rule_length_is_measured_in_bytes() {
        // "ão" is 2 chars but 3 bytes.
        let rule = suffix_rule!("o", 2, "");
        assert_eq!(rule.apply("ão").as_deref(), Some("ã"));
    }

    #[test]
    fn rule_skips_exceptions_by_whole_word() {
        let rule = suffix_rule!("ães", 1, "ão", except: ["mãe"]);
        assert_eq!(rule.apply("capitães").as_deref(), Some("capitão"));

        let rule = suffix_rule!("s", 2, "", except: ["lápis", "mais"]);
        assert_eq!(rule.apply("lápis"), None);
        assert_eq!(rule.apply("mais"), None);
        // Exceptions are not suffix matches.
        assert_eq!(rule.apply("demais").as_deref(), Some("demai"));
    }

    #[test]
    fn rule_without_matching_suffix_does_not_apply() {
        let rule = suffix_rule!("mente", 4, "", except: ["experimente"]);
        assert_eq!(rule.apply("felizmente").as_deref(), Some("feliz"));
        assert_eq!(rule.apply("experimente"), None);
        assert_eq!(rule.apply("caminho"), None);
    }

    #[test]
    fn replacement_may_grow_the_word() {
        let rule = suffix_rule!("bil", 3, "vel");
        assert_eq!(rule.apply("amabil").as_deref(), Some("amavel"));
    }

    #[test]
    fn empty_suffix_matches_any_long_enough_word() {
        let rule = SuffixRule { suffix: "", min_stem_length: 4, replacement: "x", exceptions: &[] };
        assert_eq!(rule.apply("casa").as_deref(), Some("casax"));
        assert_eq!(rule.apply("cas"), None);
    }

    #[test]
    fn gate_checks_length_and_endings() {
        let step = gated_step(3, &["s"]);
        assert!(step.admits("bons"));
        assert!(!step.admits("os"));
        assert!(!step.admits("bom"));

        let open = gated_step(0, &[]);
        assert!(open.admits(""));
        assert!(open.admits("qualquer"));
    }

    #[test]
    fn step_stops_at_first_applicable_rule() {
        let step = gated_step(0, &[]);
        let rewrite = step.apply("males").unwrap();
        assert_eq!(rewrite.word, "mal");
        assert_eq!(rewrite.rule.suffix, "es");

        // "es" would need 3 bytes, so the shorter rule fires.
        let rewrite = step.apply("as").unwrap();
        assert_eq!(rewrite.word, "a");
        assert_eq!(rewrite.rule.suffix, "s");
    }

    #[test]
    fn gate_rejection_skips_rules() {
        let step = gated_step(3, &["s"]);
        assert!(step.apply("casa").is_none());
    }
}
